//! Request and response bodies of the clinic REST API.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Doctor, Patient};

/// Body of `POST /admin`.
#[derive(Clone, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /doctor/login`.
#[derive(Clone, Serialize)]
pub struct DoctorCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoctorsResponse {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppointmentsResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatientResponse {
    pub patient: Patient,
}

#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
