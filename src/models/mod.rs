pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod filters;
pub mod patient;

pub use appointment::Appointment;
pub use doctor::{Doctor, NewDoctor};
pub use enums::Role;
pub use filters::DoctorFilter;
pub use patient::Patient;

/// Errors from parsing model values out of their wire/storage form.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
