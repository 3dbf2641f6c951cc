//! Page controllers and the role-selection navigation they share.

pub mod admin_dashboard;
pub mod doctor_dashboard;
pub mod login;

pub use admin_dashboard::{AddDoctorForm, AdminDashboard};
pub use doctor_dashboard::{AppointmentRows, DoctorDashboard};
pub use login::LoginPage;

use crate::context::{log_session_error, Ui};
use crate::models::Role;
use crate::session::{SessionStore, Storage};

// ═══════════════════════════════════════════
// Navigation targets
// ═══════════════════════════════════════════

pub const HOME_PAGE: &str = "/";
pub const PATIENT_LOGIN_PAGE: &str = "/pages/patientLogin.html";
pub const PATIENT_DASHBOARD: &str = "/pages/patientDashboard.html";
pub const LOGGED_PATIENT_DASHBOARD: &str = "/pages/loggedPatientDashboard.html";
pub const PATIENT_APPOINTMENTS_PAGE: &str = "/pages/patientAppointments.html";

/// Persist `role` and navigate to its landing page.
///
/// Admin and doctor dashboards are addressed by token; without one the user
/// is sent home instead.
pub fn select_role<S: Storage, U: Ui>(session: &mut SessionStore<S>, ui: &mut U, role: Role) {
    log_session_error(session.set_role(role));

    let target = match role {
        Role::Admin | Role::Doctor => match session.token() {
            Some(token) => {
                let prefix = if role == Role::Admin {
                    "/adminDashboard"
                } else {
                    "/doctorDashboard"
                };
                format!("{prefix}/{}", token.as_str())
            }
            None => {
                tracing::warn!(%role, "No session token, returning home");
                HOME_PAGE.to_string()
            }
        },
        Role::Patient => PATIENT_DASHBOARD.to_string(),
        Role::LoggedPatient => LOGGED_PATIENT_DASHBOARD.to_string(),
        Role::Guest => HOME_PAGE.to_string(),
    };
    ui.navigate(&target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionToken};
    use crate::testing::RecordingUi;

    fn navigate_as(role: Role, token: Option<&str>) -> (SessionStore<MemoryStorage>, Vec<String>) {
        let mut session = SessionStore::<MemoryStorage>::default();
        if let Some(t) = token {
            session.set_session(Role::Guest, &SessionToken::new(t)).unwrap();
        }
        let mut ui = RecordingUi::default();
        select_role(&mut session, &mut ui, role);
        let navs = ui.navigations().into_iter().map(str::to_string).collect();
        (session, navs)
    }

    #[test]
    fn admin_and_doctor_land_on_token_dashboards() {
        let (session, navs) = navigate_as(Role::Admin, Some("abc"));
        assert_eq!(navs, vec!["/adminDashboard/abc"]);
        assert_eq!(session.role(), Role::Admin);

        let (session, navs) = navigate_as(Role::Doctor, Some("xyz"));
        assert_eq!(navs, vec!["/doctorDashboard/xyz"]);
        assert_eq!(session.role(), Role::Doctor);
    }

    #[test]
    fn dashboards_without_token_go_home() {
        for role in [Role::Admin, Role::Doctor] {
            let (_, navs) = navigate_as(role, None);
            assert_eq!(navs, vec!["/"]);
        }
    }

    #[test]
    fn patient_roles_land_on_static_pages() {
        assert_eq!(
            navigate_as(Role::Patient, None).1,
            vec!["/pages/patientDashboard.html"]
        );
        assert_eq!(
            navigate_as(Role::LoggedPatient, Some("p")).1,
            vec!["/pages/loggedPatientDashboard.html"]
        );
        assert_eq!(navigate_as(Role::Guest, None).1, vec!["/"]);
    }
}
