//! Admin dashboard: list, filter, add and delete doctors.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::ClinicApi;
use crate::components::{doctor_card, handle_card_action, CardOutcome};
use crate::context::{PageContext, Ui};
use crate::models::{Doctor, DoctorFilter, NewDoctor};
use crate::session::Storage;
use crate::view::{Action, Element, ModalKind, Node};

const NO_MATCHES_MESSAGE: &str = "No doctors found with the given filters.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());

// ═══════════════════════════════════════════
// Add-doctor form
// ═══════════════════════════════════════════

/// Values submitted from the add-doctor modal.
#[derive(Debug, Clone, Default)]
pub struct AddDoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    /// Checked availability slots.
    pub available_times: Vec<String>,
}

/// Reasons a form is rejected before it reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("name must be between 3 and 100 characters")]
    NameLength,
    #[error("specialty must be between 3 and 50 characters")]
    SpecialtyLength,
    #[error("invalid email address")]
    Email,
    #[error("phone number must be 10 digits")]
    Phone,
    #[error("password must be at least 6 characters")]
    Password,
}

impl AddDoctorForm {
    /// Trim and validate into the save payload.
    pub fn validate(&self) -> Result<NewDoctor, FormError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let phone = required("phone", &self.phone)?;
        let specialty = required("specialty", &self.specialty)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("password"));
        }

        if !(3..=100).contains(&name.chars().count()) {
            return Err(FormError::NameLength);
        }
        if !(3..=50).contains(&specialty.chars().count()) {
            return Err(FormError::SpecialtyLength);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(FormError::Email);
        }
        if !PHONE_PATTERN.is_match(phone) {
            return Err(FormError::Phone);
        }
        if self.password.chars().count() < 6 {
            return Err(FormError::Password);
        }

        Ok(NewDoctor {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: self.password.clone(),
            specialization: specialty.to_string(),
            available_times: self.available_times.clone(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

// ═══════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listing {
    Cards,
    NoMatches,
}

/// Controller behind the admin dashboard's content area.
pub struct AdminDashboard<A: ClinicApi, S: Storage, U: Ui> {
    pub ctx: PageContext<A, S, U>,
    doctors: Vec<Doctor>,
    listing: Listing,
}

impl<A: ClinicApi, S: Storage, U: Ui> AdminDashboard<A, S, U> {
    pub fn new(ctx: PageContext<A, S, U>) -> Self {
        Self {
            ctx,
            doctors: Vec::new(),
            listing: Listing::Cards,
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Replace the content with one card per doctor.
    pub async fn load_doctor_cards(&mut self) {
        self.listing = Listing::Cards;
        match self.ctx.api.list_doctors().await {
            Ok(doctors) => {
                tracing::debug!(count = doctors.len(), "Loaded doctors");
                self.doctors = doctors;
            }
            Err(e) => {
                self.doctors.clear();
                self.ctx.report_api_failure("Failed to load doctors", &e);
            }
        }
    }

    /// Re-query with the current filter inputs.
    pub async fn filter_doctors_on_change(&mut self, filter: &DoctorFilter) {
        match self.ctx.api.filter_doctors(filter).await {
            Ok(doctors) => {
                self.listing = if doctors.is_empty() {
                    Listing::NoMatches
                } else {
                    Listing::Cards
                };
                self.doctors = doctors;
            }
            Err(e) => {
                self.doctors.clear();
                self.listing = Listing::NoMatches;
                self.ctx
                    .report_api_failure("An error occurred while filtering doctors", &e);
            }
        }
    }

    pub fn open_add_doctor(&mut self) {
        self.ctx.ui.open_modal(ModalKind::AddDoctor);
    }

    /// Submit the add-doctor modal. Returns whether the doctor was saved.
    pub async fn add_doctor(&mut self, form: &AddDoctorForm) -> bool {
        let Some(token) = self.ctx.session.token() else {
            self.ctx
                .ui
                .alert("You must be logged in as admin to add doctors.");
            return false;
        };

        let doctor = match form.validate() {
            Ok(doctor) => doctor,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected add-doctor form");
                self.ctx.ui.alert(&format!("Failed to add doctor: {e}"));
                return false;
            }
        };

        match self.ctx.api.save_doctor(&doctor, &token).await {
            Ok(message) => {
                tracing::info!(%message, "Doctor saved");
                self.ctx.ui.alert("Doctor added successfully.");
                self.ctx.ui.close_modal();
                self.load_doctor_cards().await;
                true
            }
            Err(e) => {
                self.ctx.report_api_failure("Failed to add doctor", &e);
                false
            }
        }
    }

    /// Dispatch an action raised by one of the rendered cards.
    pub async fn handle_card_action(&mut self, action: &Action) -> CardOutcome {
        handle_card_action(&mut self.ctx, &mut self.doctors, action).await
    }

    /// Children of the `#content` container.
    pub fn render_content(&self) -> Vec<Node> {
        match self.listing {
            Listing::NoMatches => vec![Element::new("p").text(NO_MATCHES_MESSAGE).into()],
            Listing::Cards => {
                let role = self.ctx.session.role();
                self.doctors.iter().map(|d| doctor_card(d, role)).collect()
            }
        }
    }
}
