//! Test doubles shared by the component and page tests.

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::api::{AdminCredentials, ApiError, ApiResult, ClinicApi, DoctorCredentials};
use crate::context::{PageContext, Ui};
use crate::models::{Appointment, Doctor, DoctorFilter, NewDoctor, Patient, Role};
use crate::session::{MemoryStorage, SessionStore, SessionToken};
use crate::view::ModalKind;

/// One recorded call on [`MockApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListDoctors,
    FilterDoctors(DoctorFilter),
    SaveDoctor(NewDoctor),
    DeleteDoctor(u64),
    ListAppointments {
        date: NaiveDate,
        patient_name: Option<String>,
    },
    AdminLogin(String),
    DoctorLogin(String),
    PatientDetails,
}

/// Scripted API: every operation returns its configured result.
pub struct MockApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub doctors: RefCell<ApiResult<Vec<Doctor>>>,
    pub filtered: RefCell<ApiResult<Vec<Doctor>>>,
    pub save: RefCell<ApiResult<String>>,
    pub delete: RefCell<ApiResult<String>>,
    pub appointments: RefCell<ApiResult<Vec<Appointment>>>,
    pub login: RefCell<ApiResult<SessionToken>>,
    pub patient: RefCell<ApiResult<Patient>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            doctors: RefCell::new(Ok(Vec::new())),
            filtered: RefCell::new(Ok(Vec::new())),
            save: RefCell::new(Ok("Doctor registered successfully".into())),
            delete: RefCell::new(Ok("Doctor deleted successfully".into())),
            appointments: RefCell::new(Ok(Vec::new())),
            login: RefCell::new(Ok(SessionToken::new("issued-token"))),
            patient: RefCell::new(Ok(patient())),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ClinicApi for MockApi {
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        self.record(ApiCall::ListDoctors);
        self.doctors.borrow().clone()
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> ApiResult<Vec<Doctor>> {
        self.record(ApiCall::FilterDoctors(filter.clone()));
        self.filtered.borrow().clone()
    }

    async fn save_doctor(&self, doctor: &NewDoctor, _token: &SessionToken) -> ApiResult<String> {
        self.record(ApiCall::SaveDoctor(doctor.clone()));
        self.save.borrow().clone()
    }

    async fn delete_doctor(&self, doctor_id: u64, _token: &SessionToken) -> ApiResult<String> {
        self.record(ApiCall::DeleteDoctor(doctor_id));
        self.delete.borrow().clone()
    }

    async fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        _token: &SessionToken,
    ) -> ApiResult<Vec<Appointment>> {
        self.record(ApiCall::ListAppointments {
            date,
            patient_name: patient_name.map(str::to_string),
        });
        self.appointments.borrow().clone()
    }

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<SessionToken> {
        self.record(ApiCall::AdminLogin(credentials.username.clone()));
        self.login.borrow().clone()
    }

    async fn doctor_login(&self, credentials: &DoctorCredentials) -> ApiResult<SessionToken> {
        self.record(ApiCall::DoctorLogin(credentials.email.clone()));
        self.login.borrow().clone()
    }

    async fn patient_details(&self, _token: &SessionToken) -> ApiResult<Patient> {
        self.record(ApiCall::PatientDetails);
        self.patient.borrow().clone()
    }
}

/// One recorded host effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Alert(String),
    Navigate(String),
    OpenModal(ModalKind),
    CloseModal,
}

#[derive(Debug, Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
}

impl RecordingUi {
    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Alert(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Navigate(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Ui for RecordingUi {
    fn alert(&mut self, message: &str) {
        self.events.push(UiEvent::Alert(message.to_string()));
    }

    fn navigate(&mut self, path: &str) {
        self.events.push(UiEvent::Navigate(path.to_string()));
    }

    fn open_modal(&mut self, modal: ModalKind) {
        self.events.push(UiEvent::OpenModal(modal));
    }

    fn close_modal(&mut self) {
        self.events.push(UiEvent::CloseModal);
    }
}

pub type TestContext = PageContext<MockApi, MemoryStorage, RecordingUi>;

/// Context whose session holds `role` and, optionally, a token.
pub fn context(role: Role, token: Option<&str>) -> TestContext {
    let mut session = SessionStore::new(MemoryStorage::new());
    if let Some(t) = token {
        session.set_session(role, &SessionToken::new(t)).unwrap();
    } else {
        session.set_role(role).unwrap();
    }
    PageContext::new(MockApi::default(), session, RecordingUi::default())
}

pub fn doctor(id: u64, name: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        email: format!("doctor{id}@clinic.org"),
        phone: "5550001111".to_string(),
        specialization: "Cardiology".to_string(),
        available_times: vec!["09:00-10:00".to_string(), "10:00-11:00".to_string()],
    }
}

pub fn patient() -> Patient {
    Patient {
        id: 77,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        phone: "5559998888".to_string(),
        address: None,
    }
}

pub fn appointment(id: u64, patient_name: &str) -> Appointment {
    Appointment {
        id,
        patient_id: id + 100,
        patient_name: patient_name.to_string(),
        patient_phone: "5550002222".to_string(),
        patient_email: "patient@example.org".to_string(),
        time: "09:00".to_string(),
    }
}

pub fn network_error() -> ApiError {
    ApiError::Connection("http://localhost:8080".to_string())
}
