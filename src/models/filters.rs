/// Optional constraints narrowing a doctor listing.
///
/// `None` means no constraint on that field; matching is done by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Build a filter from raw input values; blank inputs become `None`.
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
