//! StudentService: validation in front of the persistence gateway.

mod students;
mod validation;
pub use students::StudentService;
pub use validation::{FieldRule, Format, RequestValidator};
