use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Doctor as returned by the backend listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(alias = "specialty")]
    pub specialization: String,
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// Payload of the add-doctor form.
///
/// Serialized with the specialization under both `specialization` and
/// `specialty`: the backend entity binds the latter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(alias = "specialty")]
    pub specialization: String,
    pub available_times: Vec<String>,
}

impl Serialize for NewDoctor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NewDoctor", 7)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("phone", &self.phone)?;
        state.serialize_field("password", &self.password)?;
        state.serialize_field("specialization", &self.specialization)?;
        state.serialize_field("specialty", &self.specialization)?;
        state.serialize_field("availableTimes", &self.available_times)?;
        state.end()
    }
}
