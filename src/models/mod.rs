pub mod envelope;
pub mod form;
pub mod student;

pub use envelope::Envelope;
pub use form::{FormBuffer, FormField};
pub use student::{NewStudent, StudentRecord, UpdateName};
