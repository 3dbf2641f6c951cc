//! Table row for one appointment on the doctor dashboard.

use reqwest::Url;

use crate::models::Appointment;
use crate::view::{Action, Element, Node};

/// Page that records a prescription for an appointment.
pub const ADD_PRESCRIPTION_PAGE: &str = "/pages/addPrescription.html";

/// `<tr>` with the patient id, name, phone, email and a prescription button.
///
/// Both the id cell and the button carry the same `AddPrescription` action.
pub fn patient_row(appointment: &Appointment) -> Node {
    let action = Action::AddPrescription {
        appointment_id: appointment.id,
        patient_name: appointment.patient_name.clone(),
    };

    Element::new("tr")
        .child(
            Element::new("td")
                .class("patient-id")
                .on_click(action.clone())
                .text(appointment.patient_id.to_string()),
        )
        .child(Element::new("td").text(appointment.patient_name.as_str()))
        .child(Element::new("td").text(appointment.patient_phone.as_str()))
        .child(Element::new("td").text(appointment.patient_email.as_str()))
        .child(
            Element::new("td").child(
                Element::new("button")
                    .class("prescription-btn")
                    .attr("title", "Add Prescription")
                    .on_click(action)
                    .text("Add Prescription"),
            ),
        )
        .into()
}

/// Navigation target of an `AddPrescription` action, query values encoded.
pub fn prescription_path(appointment_id: u64, patient_name: &str) -> String {
    let id = appointment_id.to_string();
    // Only used for its form encoder; the host part is discarded.
    match Url::parse_with_params(
        &format!("http://localhost{ADD_PRESCRIPTION_PAGE}"),
        &[("appointmentId", id.as_str()), ("patientName", patient_name)],
    ) {
        Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode prescription link");
            format!("{ADD_PRESCRIPTION_PAGE}?appointmentId={id}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn row_has_five_cells_in_order() {
        let row = patient_row(&testing::appointment(5, "Grace Hopper"));
        let cells = row.find_by_tag("td");
        assert_eq!(cells.len(), 5);

        let texts: Vec<String> = row
            .as_element()
            .unwrap()
            .child_nodes()
            .iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(
            texts,
            vec![
                "105",
                "Grace Hopper",
                "5550002222",
                "patient@example.org",
                "Add Prescription"
            ]
        );
    }

    #[test]
    fn id_cell_and_button_share_the_action() {
        let row = patient_row(&testing::appointment(5, "Grace Hopper"));
        let expected = Action::AddPrescription {
            appointment_id: 5,
            patient_name: "Grace Hopper".into(),
        };
        let actions: Vec<&Action> = row.actions();
        assert_eq!(actions, vec![&expected, &expected]);
    }

    #[test]
    fn prescription_path_encodes_name() {
        assert_eq!(
            prescription_path(5, "Grace Hopper & Co"),
            "/pages/addPrescription.html?appointmentId=5&patientName=Grace+Hopper+%26+Co"
        );
    }
}
