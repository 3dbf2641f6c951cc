use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{
    AdminCredentials, AppointmentsResponse, DoctorCredentials, DoctorsResponse, MessageResponse,
    PatientResponse, TokenResponse,
};
use super::ClinicApi;
use crate::config::Config;
use crate::models::{Appointment, Doctor, DoctorFilter, NewDoctor, Patient};
use crate::session::SessionToken;

/// HTTP client for the clinic backend.
pub struct HttpClinicApi {
    base_url: Url,
    client: Client,
    timeout_secs: u64,
    placeholder: String,
}

impl HttpClinicApi {
    /// Create a client from validated configuration.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ApiError::Http(format!("invalid base URL {}: {e}", config.api_base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Http(format!(
                "base URL {} cannot carry path segments",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Http(e.without_url().to_string()))?;

        Ok(Self {
            base_url,
            client,
            timeout_secs: config.timeout.as_secs(),
            placeholder: config.filter_placeholder.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append percent-encoded path segments to the base URL.
    ///
    /// Dot-only segments would be collapsed by URL normalization and route
    /// the request elsewhere, so they are rejected.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        if segments.iter().any(|s| is_dot_segment(s)) {
            return Err(ApiError::Http("path segment cannot consist of dots only".into()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Http(format!("base URL {} cannot carry path segments", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn segment_or_placeholder<'a>(&'a self, value: Option<&'a str>) -> &'a str {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty() && !is_dot_segment(v))
            .unwrap_or(&self.placeholder)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(self.base_url.to_string())
            } else if e.is_timeout() {
                ApiError::Timeout(self.timeout_secs)
            } else {
                ApiError::Http(e.without_url().to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.without_url().to_string()))
    }

    /// Success message of a mutation; JSON `{message}` or a plain-text body.
    async fn send_for_message(&self, request: RequestBuilder, fallback: &str) -> ApiResult<String> {
        let response = self.send(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.without_url().to_string()))?;

        let message = match serde_json::from_str::<MessageResponse>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => Some(body.trim().to_string()),
        };
        Ok(message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()))
    }

    async fn login<B: serde::Serialize>(&self, segments: &[&str], body: &B) -> ApiResult<SessionToken> {
        let url = self.endpoint(segments)?;
        let parsed: TokenResponse = self.send_json(self.client.post(url).json(body)).await?;
        parsed
            .token
            .filter(|t| !t.is_empty())
            .map(SessionToken::new)
            .ok_or(ApiError::MissingToken)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c == '.')
}

impl ClinicApi for HttpClinicApi {
    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        let url = self.endpoint(&["doctor"])?;
        let parsed: DoctorsResponse = self.send_json(self.client.get(url)).await?;
        tracing::debug!(count = parsed.doctors.len(), "Fetched doctors");
        Ok(parsed.doctors)
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> ApiResult<Vec<Doctor>> {
        let url = self.endpoint(&[
            "doctor",
            "filter",
            self.segment_or_placeholder(filter.name.as_deref()),
            self.segment_or_placeholder(filter.time.as_deref()),
            self.segment_or_placeholder(filter.specialty.as_deref()),
        ])?;
        let parsed: DoctorsResponse = self.send_json(self.client.get(url)).await?;
        tracing::debug!(count = parsed.doctors.len(), "Fetched filtered doctors");
        Ok(parsed.doctors)
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &SessionToken) -> ApiResult<String> {
        let url = self.endpoint(&["doctor", token.as_str()])?;
        self.send_for_message(self.client.post(url).json(doctor), "Doctor save status unknown.")
            .await
    }

    async fn delete_doctor(&self, doctor_id: u64, token: &SessionToken) -> ApiResult<String> {
        let id = doctor_id.to_string();
        let url = self.endpoint(&["doctor", &id, token.as_str()])?;
        self.send_for_message(self.client.delete(url), "Doctor deletion status unknown.")
            .await
    }

    async fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &SessionToken,
    ) -> ApiResult<Vec<Appointment>> {
        let date = date.format("%Y-%m-%d").to_string();
        let url = self.endpoint(&[
            "appointments",
            &date,
            self.segment_or_placeholder(patient_name),
            token.as_str(),
        ])?;
        let parsed: AppointmentsResponse = self.send_json(self.client.get(url)).await?;
        tracing::debug!(count = parsed.appointments.len(), %date, "Fetched appointments");
        Ok(parsed.appointments)
    }

    async fn admin_login(&self, credentials: &AdminCredentials) -> ApiResult<SessionToken> {
        self.login(&["admin"], credentials).await
    }

    async fn doctor_login(&self, credentials: &DoctorCredentials) -> ApiResult<SessionToken> {
        self.login(&["doctor", "login"], credentials).await
    }

    async fn patient_details(&self, token: &SessionToken) -> ApiResult<Patient> {
        let url = self.endpoint(&["patient", token.as_str()])?;
        let parsed: PatientResponse = self.send_json(self.client.get(url)).await?;
        Ok(parsed.patient)
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
