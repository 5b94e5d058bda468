//! Student record: persisted form, inbound payload, and per-field rules.

use crate::error::AppError;
use crate::service::{FieldRule, Format, RequestValidator};
use serde::{Deserialize, Serialize};

/// A stored student. `id` is assigned by the store on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

/// Create/update request body. Every field is optional on the wire so that a missing
/// field is reported as blank by validation rather than rejected by the JSON decoder.
/// Any `id` in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
}

/// Field values that passed validation. The only input the store accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

impl StudentFields {
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            major: self.major,
        }
    }
}

pub const FIRST_NAME_RULE: FieldRule = FieldRule {
    field: "firstName",
    required: true,
    blank_message: "First name cannot be blank",
    min_length: Some(2),
    max_length: Some(50),
    format: None,
    invalid_message: Some("First name must be between 2 and 50 characters"),
};

pub const LAST_NAME_RULE: FieldRule = FieldRule {
    field: "lastName",
    required: true,
    blank_message: "Last name cannot be blank",
    min_length: Some(2),
    max_length: Some(50),
    format: None,
    invalid_message: Some("Last name must be between 2 and 50 characters"),
};

pub const EMAIL_RULE: FieldRule = FieldRule {
    field: "email",
    required: true,
    blank_message: "Email cannot be blank",
    min_length: None,
    max_length: None,
    format: Some(Format::Email),
    invalid_message: Some("Please provide a valid email address"),
};

pub const MAJOR_RULE: FieldRule = FieldRule {
    field: "major",
    required: true,
    blank_message: "Major cannot be blank",
    min_length: None,
    max_length: None,
    format: None,
    invalid_message: None,
};

impl StudentPayload {
    /// Check every field and return the accepted values, or all failing fields at once.
    pub fn validate(self) -> Result<StudentFields, AppError> {
        let mut v = RequestValidator::default();
        v.check(&FIRST_NAME_RULE, self.first_name.as_deref());
        v.check(&LAST_NAME_RULE, self.last_name.as_deref());
        v.check(&EMAIL_RULE, self.email.as_deref());
        v.check(&MAJOR_RULE, self.major.as_deref());
        v.finish()?;

        Ok(StudentFields {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            major: self.major.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(first: &str, last: &str, email: &str, major: &str) -> StudentPayload {
        StudentPayload {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(email.into()),
            major: Some(major.into()),
        }
    }

    fn failing_fields(p: StudentPayload) -> Vec<(&'static str, String)> {
        match p.validate() {
            Err(AppError::Validation(errors)) => {
                errors.into_iter().map(|e| (e.field, e.message)).collect()
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_student() {
        let fields = payload("Al", "Lee", "a@b.com", "CS").validate().unwrap();
        assert_eq!(fields.first_name, "Al");
        assert_eq!(fields.into_student(7).id, 7);
    }

    #[test]
    fn short_first_name_is_rejected() {
        let errors = failing_fields(payload("A", "Lee", "a@b.com", "CS"));
        assert_eq!(
            errors,
            vec![("firstName", "First name must be between 2 and 50 characters".to_string())]
        );
    }

    #[test]
    fn display_name_email_is_rejected() {
        let errors = failing_fields(payload("Al", "Lee", "Al <a@b.com>", "CS"));
        assert_eq!(
            errors,
            vec![("email", "Please provide a valid email address".to_string())]
        );
    }

    #[test]
    fn long_last_name_is_rejected() {
        let errors = failing_fields(payload("Al", &"x".repeat(51), "a@b.com", "CS"));
        assert_eq!(errors[0].0, "lastName");
        assert!(payload("Al", &"x".repeat(50), "a@b.com", "CS").validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let errors = failing_fields(payload("Al", "Lee", "not-an-email", "CS"));
        assert_eq!(
            errors,
            vec![("email", "Please provide a valid email address".to_string())]
        );
    }

    #[test]
    fn missing_and_blank_fields_are_all_reported() {
        let p = StudentPayload {
            first_name: None,
            last_name: Some("   ".into()),
            email: None,
            major: Some("".into()),
        };
        let errors = failing_fields(p);
        assert_eq!(
            errors,
            vec![
                ("firstName", "First name cannot be blank".to_string()),
                ("lastName", "Last name cannot be blank".to_string()),
                ("email", "Email cannot be blank".to_string()),
                ("major", "Major cannot be blank".to_string()),
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(payload("Zoë", "Ørsted", "z@o.dk", "Physics").validate().is_ok());
        let errors = failing_fields(payload("é", "Lee", "a@b.com", "CS"));
        assert_eq!(errors[0].0, "firstName");
    }

    #[test]
    fn payload_ignores_id_and_uses_camel_case() {
        let p: StudentPayload = serde_json::from_str(
            r#"{"id": 99, "firstName": "Al", "lastName": "Lee", "email": "a@b.com", "major": "CS"}"#,
        )
        .unwrap();
        assert_eq!(p.first_name.as_deref(), Some("Al"));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn student_serializes_camel_case() {
        let s = Student {
            id: 1,
            first_name: "Al".into(),
            last_name: "Lee".into(),
            email: "a@b.com".into(),
            major: "CS".into(),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 1, "firstName": "Al", "lastName": "Lee", "email": "a@b.com", "major": "CS"})
        );
    }
}
