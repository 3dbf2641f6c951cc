//! View builders: doctor card, patient row, header, footer.

pub mod doctor_card;
pub mod footer;
pub mod header;
pub mod patient_row;

pub use doctor_card::{doctor_card, handle_card_action, CardOutcome};
pub use footer::footer;
pub use header::{handle_header_action, render_header, HeaderOutcome};
pub use patient_row::{patient_row, prescription_path};
