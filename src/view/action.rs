use crate::models::{Doctor, Patient, Role};

/// Modal dialogs the pages can open, each with its own payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    AddDoctor,
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
    /// Booking overlay for a logged-in patient.
    BookAppointment { doctor: Doctor, patient: Patient },
}

impl ModalKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDoctor => "addDoctor",
            Self::AdminLogin => "adminLogin",
            Self::DoctorLogin => "doctorLogin",
            Self::PatientLogin => "patientLogin",
            Self::PatientSignup => "patientSignup",
            Self::BookAppointment { .. } => "bookAppointment",
        }
    }
}

/// What an interactive element does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    DeleteDoctor { doctor_id: u64 },
    /// Unauthenticated booking attempt: only asks the user to log in.
    PromptPatientLogin,
    BookAppointment { doctor_id: u64 },
    OpenModal(ModalKind),
    Navigate(String),
    SelectRole(Role),
    Logout,
    LogoutPatient,
    AddPrescription { appointment_id: u64, patient_name: String },
}

impl Action {
    /// Stable identifier rendered as `data-action` for host event wiring.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeleteDoctor { .. } => "delete-doctor",
            Self::PromptPatientLogin => "prompt-patient-login",
            Self::BookAppointment { .. } => "book-appointment",
            Self::OpenModal(_) => "open-modal",
            Self::Navigate(_) => "navigate",
            Self::SelectRole(_) => "select-role",
            Self::Logout => "logout",
            Self::LogoutPatient => "logout-patient",
            Self::AddPrescription { .. } => "add-prescription",
        }
    }
}
