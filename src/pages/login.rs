//! Login index: admin and doctor sign-in.

use crate::api::{AdminCredentials, ApiResult, ClinicApi, DoctorCredentials};
use crate::context::{log_session_error, PageContext, Ui};
use crate::models::Role;
use crate::pages::select_role;
use crate::session::{SessionToken, Storage};
use crate::view::ModalKind;

pub struct LoginPage<A: ClinicApi, S: Storage, U: Ui> {
    pub ctx: PageContext<A, S, U>,
}

impl<A: ClinicApi, S: Storage, U: Ui> LoginPage<A, S, U> {
    pub fn new(ctx: PageContext<A, S, U>) -> Self {
        Self { ctx }
    }

    pub fn open_admin_login(&mut self) {
        self.ctx.ui.open_modal(ModalKind::AdminLogin);
    }

    pub fn open_doctor_login(&mut self) {
        self.ctx.ui.open_modal(ModalKind::DoctorLogin);
    }

    /// Returns whether a session was established.
    pub async fn admin_login(&mut self, username: &str, password: &str) -> bool {
        let credentials = AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = self.ctx.api.admin_login(&credentials).await;
        self.finish_login(Role::Admin, "Admin", result)
    }

    /// Returns whether a session was established.
    pub async fn doctor_login(&mut self, email: &str, password: &str) -> bool {
        let credentials = DoctorCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.ctx.api.doctor_login(&credentials).await;
        self.finish_login(Role::Doctor, "Doctor", result)
    }

    fn finish_login(&mut self, role: Role, label: &str, result: ApiResult<SessionToken>) -> bool {
        match result {
            Ok(token) => {
                tracing::info!(%role, "Login succeeded");
                log_session_error(self.ctx.session.set_session(role, &token));
                select_role(&mut self.ctx.session, &mut self.ctx.ui, role);
                true
            }
            Err(e) if e.is_status() => {
                tracing::warn!(%role, error = %e, "Login rejected");
                self.ctx.ui.alert(&format!("Invalid {label} credentials!"));
                false
            }
            Err(e) => {
                tracing::error!(%role, error = %e, "Login error");
                self.ctx.ui.alert(&format!(
                    "An error occurred during {label} login. Please try again."
                ));
                false
            }
        }
    }
}
