//! REST client for the clinic backend.
//!
//! One async operation per backend capability. Every operation returns
//! `ApiResult<T>`: transport failures, non-success statuses and body
//! parsing failures all arrive as an [`ApiError`] carrying a
//! human-readable message, never as a panic or a raw `reqwest` error.
//! Filter semantics belong to the backend; the client never filters.

pub mod client;
pub mod error;
pub mod types;

pub use client::HttpClinicApi;
pub use error::{ApiError, ApiResult};
pub use types::{AdminCredentials, DoctorCredentials};

use chrono::NaiveDate;

use crate::models::{Appointment, Doctor, DoctorFilter, NewDoctor, Patient};
use crate::session::SessionToken;

/// Backend capabilities used by the page controllers.
///
/// Handlers run one event at a time on a single thread, so the futures
/// carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait ClinicApi {
    /// `GET /doctor`
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>>;

    /// `GET /doctor/filter/{name}/{time}/{specialty}`
    async fn filter_doctors(&self, filter: &DoctorFilter) -> ApiResult<Vec<Doctor>>;

    /// `POST /doctor/{token}`. Returns the backend message.
    async fn save_doctor(&self, doctor: &NewDoctor, token: &SessionToken) -> ApiResult<String>;

    /// `DELETE /doctor/{id}/{token}`. Returns the backend message.
    async fn delete_doctor(&self, doctor_id: u64, token: &SessionToken) -> ApiResult<String>;

    /// `GET /appointments/{date}/{patientName}/{token}`
    async fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &SessionToken,
    ) -> ApiResult<Vec<Appointment>>;

    /// `POST /admin`
    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<SessionToken>;

    /// `POST /doctor/login`
    async fn doctor_login(&self, credentials: &DoctorCredentials) -> ApiResult<SessionToken>;

    /// `GET /patient/{token}`
    async fn patient_details(&self, token: &SessionToken) -> ApiResult<Patient>;
}
