//! HTTP handlers for student CRUD and the origin guard.

pub mod origin;
pub mod student;
pub use origin::*;
pub use student::*;
