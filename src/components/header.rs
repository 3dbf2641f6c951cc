//! Site header: logo plus role-dependent navigation.

use crate::config::APP_NAME;
use crate::context::{log_session_error, Ui};
use crate::models::Role;
use crate::pages::{self, PATIENT_LOGIN_PAGE};
use crate::session::{SessionStore, Storage};
use crate::view::{Action, Element, ModalKind, Node};

const LOGO_SRC: &str = "../assets/images/logo/logo.png";
const LOGO_TITLE: &str = "Hospital CMS";

/// Result of rendering the header for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOutcome {
    Rendered(Node),
    /// The session was invalid; it was cleared and the user sent home.
    Redirected,
}

/// Render the header for `path` under the stored session.
///
/// At the site root the stored role is dropped and only the logo is shown.
/// An authenticated role without a token is treated as an expired session.
pub fn render_header<S: Storage, U: Ui>(
    path: &str,
    session: &mut SessionStore<S>,
    ui: &mut U,
) -> HeaderOutcome {
    if path.ends_with('/') {
        log_session_error(session.clear_role());
        return HeaderOutcome::Rendered(header_shell(None).into());
    }

    if !session.is_consistent() {
        tracing::warn!(role = %session.role(), "Authenticated role without token, clearing session");
        log_session_error(session.clear_session());
        ui.alert("Session expired or invalid login. Please log in again.");
        ui.navigate(pages::HOME_PAGE);
        return HeaderOutcome::Redirected;
    }

    HeaderOutcome::Rendered(header_shell(Some(nav_for(session.role()))).into())
}

fn header_shell(nav: Option<Element>) -> Element {
    let logo = Element::new("div")
        .class("logo-section")
        .child(
            Element::new("img")
                .class("logo-img")
                .attr("src", LOGO_SRC)
                .attr("alt", format!("{APP_NAME} Logo")),
        )
        .child(Element::new("span").class("logo-title").text(LOGO_TITLE));

    Element::new("header")
        .class("header")
        .child(logo)
        .children(nav)
}

fn nav_button(label: &str, action: Action) -> Element {
    Element::new("button")
        .class("adminBtn")
        .on_click(action)
        .text(label)
}

fn nav_link(label: &str, action: Action) -> Element {
    Element::new("a")
        .attr("href", "#")
        .on_click(action)
        .text(label)
}

fn nav_for(role: Role) -> Element {
    let nav = Element::new("nav");
    match role {
        Role::Admin => nav
            .child(nav_button("Add Doctor", Action::OpenModal(ModalKind::AddDoctor)).id("addDocBtn"))
            .child(nav_link("Logout", Action::Logout)),
        Role::Doctor => nav
            .child(nav_button("Home", Action::SelectRole(Role::Doctor)))
            .child(nav_link("Logout", Action::Logout)),
        Role::Patient => nav
            .child(nav_button("Login", Action::OpenModal(ModalKind::PatientLogin)).id("patientLogin"))
            .child(
                nav_button("Sign Up", Action::OpenModal(ModalKind::PatientSignup))
                    .id("patientSignup"),
            ),
        Role::LoggedPatient => nav
            .child(
                nav_button(
                    "Home",
                    Action::Navigate(pages::LOGGED_PATIENT_DASHBOARD.to_string()),
                )
                .id("home"),
            )
            .child(
                nav_button(
                    "Appointments",
                    Action::Navigate(pages::PATIENT_APPOINTMENTS_PAGE.to_string()),
                )
                .id("patientAppointments"),
            )
            .child(nav_link("Logout", Action::LogoutPatient)),
        Role::Guest => nav,
    }
}

/// Perform a header navigation action. Returns `false` for actions the
/// header does not own.
pub fn handle_header_action<S: Storage, U: Ui>(
    action: &Action,
    session: &mut SessionStore<S>,
    ui: &mut U,
) -> bool {
    match action {
        Action::Logout => {
            log_session_error(session.clear_session());
            ui.navigate(pages::HOME_PAGE);
        }
        Action::LogoutPatient => {
            log_session_error(session.clear_token());
            log_session_error(session.set_role(Role::Patient));
            ui.navigate(PATIENT_LOGIN_PAGE);
        }
        Action::OpenModal(modal) => ui.open_modal(modal.clone()),
        Action::Navigate(path) => ui.navigate(path),
        Action::SelectRole(role) => pages::select_role(session, ui, *role),
        _ => return false,
    }
    true
}
