//! Doctor card: doctor details plus exactly one role-dependent affordance.

use crate::api::ClinicApi;
use crate::context::{PageContext, Ui};
use crate::models::{Doctor, Role};
use crate::session::Storage;
use crate::view::{Action, Element, ModalKind, Node};

/// What handling a card action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    /// The doctor was deleted and its card removed from the list.
    Removed(u64),
    /// The user was told to log in; nothing else happened.
    LoginPrompted,
    /// The booking overlay was opened.
    BookingOpened,
    /// The action failed and the user was notified.
    Failed,
    /// Not a card action, or no card with that doctor id.
    Ignored,
}

/// Build the card for `doctor` as seen by `role`.
pub fn doctor_card(doctor: &Doctor, role: Role) -> Node {
    let info = Element::new("div")
        .class("doctor-info")
        .child(Element::new("h3").text(doctor.name.as_str()))
        .child(Element::new("p").text(format!("Specialization: {}", doctor.specialization)))
        .child(Element::new("p").text(format!("Email: {}", doctor.email)))
        .child(
            Element::new("ul").children(
                doctor
                    .available_times
                    .iter()
                    .map(|time| Element::new("li").text(time.as_str())),
            ),
        );

    let actions = Element::new("div")
        .class("card-actions")
        .children(card_affordance(doctor, role));

    Element::new("div")
        .class("doctor-card")
        .attr("data-doctor-id", doctor.id.to_string())
        .child(info)
        .child(actions)
        .into()
}

fn card_affordance(doctor: &Doctor, role: Role) -> Option<Element> {
    match role {
        Role::Admin => Some(
            Element::new("button")
                .class("delete-btn")
                .on_click(Action::DeleteDoctor {
                    doctor_id: doctor.id,
                })
                .text("Delete"),
        ),
        Role::Guest | Role::Patient => Some(
            Element::new("button")
                .class("book-btn")
                .on_click(Action::PromptPatientLogin)
                .text("Book Now"),
        ),
        Role::LoggedPatient => Some(
            Element::new("button")
                .class("book-btn")
                .on_click(Action::BookAppointment {
                    doctor_id: doctor.id,
                })
                .text("Book Now"),
        ),
        Role::Doctor => None,
    }
}

/// Handle an action raised by one of the cards built from `doctors`.
///
/// A successful delete removes exactly that doctor from `doctors`.
pub async fn handle_card_action<A, S, U>(
    ctx: &mut PageContext<A, S, U>,
    doctors: &mut Vec<Doctor>,
    action: &Action,
) -> CardOutcome
where
    A: ClinicApi,
    S: Storage,
    U: Ui,
{
    match action {
        Action::DeleteDoctor { doctor_id } => delete_doctor(ctx, doctors, *doctor_id).await,
        Action::PromptPatientLogin => {
            ctx.ui
                .alert("Please log in as a patient to book an appointment.");
            CardOutcome::LoginPrompted
        }
        Action::BookAppointment { doctor_id } => {
            let Some(doctor) = doctors.iter().find(|d| d.id == *doctor_id).cloned() else {
                tracing::warn!(doctor_id, "Booking requested for a doctor not on the page");
                return CardOutcome::Ignored;
            };
            open_booking(ctx, doctor).await
        }
        _ => CardOutcome::Ignored,
    }
}

async fn delete_doctor<A, S, U>(
    ctx: &mut PageContext<A, S, U>,
    doctors: &mut Vec<Doctor>,
    doctor_id: u64,
) -> CardOutcome
where
    A: ClinicApi,
    S: Storage,
    U: Ui,
{
    let Some(token) = ctx.session.token() else {
        ctx.ui.alert("You must be logged in as admin to delete doctors.");
        return CardOutcome::Failed;
    };

    match ctx.api.delete_doctor(doctor_id, &token).await {
        Ok(message) => {
            tracing::info!(doctor_id, %message, "Doctor deleted");
            doctors.retain(|d| d.id != doctor_id);
            ctx.ui.alert("Doctor successfully deleted.");
            CardOutcome::Removed(doctor_id)
        }
        Err(e) => {
            ctx.report_api_failure("Failed to delete doctor", &e);
            CardOutcome::Failed
        }
    }
}

async fn open_booking<A, S, U>(ctx: &mut PageContext<A, S, U>, doctor: Doctor) -> CardOutcome
where
    A: ClinicApi,
    S: Storage,
    U: Ui,
{
    let Some(token) = ctx.session.token() else {
        ctx.ui.alert("Session expired. Please log in again.");
        return CardOutcome::Failed;
    };

    match ctx.api.patient_details(&token).await {
        Ok(patient) => {
            ctx.ui
                .open_modal(ModalKind::BookAppointment { doctor, patient });
            CardOutcome::BookingOpened
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch patient details");
            ctx.ui.alert("Unable to fetch patient details.");
            CardOutcome::Failed
        }
    }
}
