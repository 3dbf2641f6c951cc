use serde::{Deserialize, Serialize};

/// One booked appointment as shown on the doctor dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient_id: u64,
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: String,
    #[serde(default)]
    pub patient_email: String,
    #[serde(alias = "appointmentTime")]
    pub time: String,
}
