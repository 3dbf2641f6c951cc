//! Doctor dashboard: appointments for a date, optionally filtered by patient.

use chrono::{NaiveDate, Utc};

use crate::api::ClinicApi;
use crate::components::{patient_row, prescription_path};
use crate::context::{PageContext, Ui};
use crate::models::Appointment;
use crate::session::Storage;
use crate::view::{Action, Element, Node};

const LOAD_ERROR_MESSAGE: &str = "Error loading appointments. Try again later.";

/// What the appointment table body currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentRows {
    /// Nothing loaded yet.
    Pending,
    Loaded(Vec<Appointment>),
    /// The backend had no appointments for this date.
    Empty(NaiveDate),
    Failed,
}

pub struct DoctorDashboard<A: ClinicApi, S: Storage, U: Ui> {
    pub ctx: PageContext<A, S, U>,
    selected_date: NaiveDate,
    patient_name: Option<String>,
    rows: AppointmentRows,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl<A: ClinicApi, S: Storage, U: Ui> DoctorDashboard<A, S, U> {
    /// Dashboard showing today's appointments (UTC).
    pub fn new(ctx: PageContext<A, S, U>) -> Self {
        Self::with_date(ctx, today())
    }

    pub fn with_date(ctx: PageContext<A, S, U>, selected_date: NaiveDate) -> Self {
        Self {
            ctx,
            selected_date,
            patient_name: None,
            rows: AppointmentRows::Pending,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    pub fn rows(&self) -> &AppointmentRows {
        &self.rows
    }

    /// Search-bar input. Blank input removes the name filter.
    pub async fn on_search_input(&mut self, value: &str) {
        let value = value.trim();
        self.patient_name = (!value.is_empty()).then(|| value.to_string());
        self.load_appointments().await;
    }

    /// "Today's Appointments" button.
    pub async fn on_today(&mut self) {
        self.selected_date = today();
        self.load_appointments().await;
    }

    pub async fn on_date_change(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.load_appointments().await;
    }

    /// Fetch appointments for the current date and name filter, replacing
    /// whatever the table showed before.
    pub async fn load_appointments(&mut self) {
        let Some(token) = self.ctx.session.token() else {
            tracing::warn!("No session token for appointment lookup");
            self.ctx.ui.alert("Session expired. Please log in again.");
            self.rows = AppointmentRows::Failed;
            return;
        };

        let result = self
            .ctx
            .api
            .list_appointments(self.selected_date, self.patient_name.as_deref(), &token)
            .await;

        self.rows = match result {
            Ok(appointments) if appointments.is_empty() => {
                AppointmentRows::Empty(self.selected_date)
            }
            Ok(appointments) => {
                tracing::debug!(
                    date = %self.selected_date,
                    count = appointments.len(),
                    "Loaded appointments"
                );
                AppointmentRows::Loaded(appointments)
            }
            Err(e) => {
                tracing::error!(error = %e, date = %self.selected_date, "Error loading appointments");
                AppointmentRows::Failed
            }
        };
    }

    /// Rows of `#patientTableBody`.
    pub fn table_body(&self) -> Vec<Node> {
        match &self.rows {
            AppointmentRows::Pending => Vec::new(),
            AppointmentRows::Loaded(appointments) => appointments.iter().map(patient_row).collect(),
            AppointmentRows::Empty(date) => {
                vec![message_row(&format!("No Appointments found for {date}."))]
            }
            AppointmentRows::Failed => vec![message_row(LOAD_ERROR_MESSAGE)],
        }
    }

    /// Handle a click on a patient row. Returns `false` for foreign actions.
    pub fn handle_row_action(&mut self, action: &Action) -> bool {
        match action {
            Action::AddPrescription {
                appointment_id,
                patient_name,
            } => {
                self.ctx
                    .ui
                    .navigate(&prescription_path(*appointment_id, patient_name));
                true
            }
            _ => false,
        }
    }
}

fn message_row(message: &str) -> Node {
    Element::new("tr")
        .child(Element::new("td").attr("colspan", "5").text(message))
        .into()
}
