//! Page context: the collaborators every controller and action handler needs.

use crate::api::{ApiError, ClinicApi};
use crate::session::{SessionError, SessionStore, Storage};
use crate::view::ModalKind;

/// Host-side effects a page can request.
///
/// In a browser these map to `alert`, `location.href` and the modal
/// helpers; headless hosts record them.
pub trait Ui {
    /// Blocking notification.
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, path: &str);
    fn open_modal(&mut self, modal: ModalKind);
    fn close_modal(&mut self);
}

/// Session, API client and host UI, injected into a page controller.
pub struct PageContext<A: ClinicApi, S: Storage, U: Ui> {
    pub api: A,
    pub session: SessionStore<S>,
    pub ui: U,
}

impl<A: ClinicApi, S: Storage, U: Ui> PageContext<A, S, U> {
    pub fn new(api: A, session: SessionStore<S>, ui: U) -> Self {
        Self { api, session, ui }
    }

    /// Log an API failure and surface `prefix: message` to the user.
    pub fn report_api_failure(&mut self, prefix: &str, err: &ApiError) {
        tracing::error!(error = %err, "{prefix}");
        self.ui.alert(&format!("{prefix}: {}", err.user_message()));
    }
}

/// Log a failed session write. Storage errors never abort a UI handler.
pub fn log_session_error(result: Result<(), SessionError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to update session storage");
    }
}
