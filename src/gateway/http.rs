//! REST implementations of both gateway traits.

use std::time::Duration;

use log::{debug, error};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part as MultipartPart};

use crate::domain::client::CreatedClient;
use crate::dto::api::{ApiErrorEnvelope, CreateClientEnvelope};
use crate::dto::lookup::{CountryDto, LocationSuggestion};
use crate::gateway::errors::{
    GatewayError, GatewayResult, VALIDATION_FAILED_PATTERN,
};
use crate::gateway::{ClientGateway, LookupGateway};
use crate::models::config::ApiConfig;
use crate::payload::{PartValue, SubmissionPayload};

/// Longest body excerpt carried inside an error message.
const BODY_EXCERPT_LEN: usize = 200;

/// Gateway talking to the CRM backend and the public lookup services.
#[derive(Clone, Debug)]
pub struct RestGateway {
    http: reqwest::Client,
    base_url: String,
    geocode_url: String,
    countries_url: String,
}

impl RestGateway {
    /// Builds the underlying HTTP client from configuration.
    pub fn new(config: &ApiConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            geocode_url: config.geocode_url.clone(),
            countries_url: config.countries_url.clone(),
        })
    }

    fn clients_url(&self) -> String {
        format!("{}/api/clients", self.base_url)
    }
}

impl ClientGateway for RestGateway {
    async fn create_client(&self, payload: SubmissionPayload) -> GatewayResult<CreatedClient> {
        let url = self.clients_url();
        let form = to_multipart(payload)?;
        debug!("submitting client creation to {url}");

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("client creation failed with status {status}");
            return Err(classify_rejection(status, &body));
        }

        let envelope: CreateClientEnvelope = serde_json::from_str(&body).map_err(|_| {
            error!("client creation returned an unrecognized envelope");
            GatewayError::UnexpectedResponse(excerpt(&body))
        })?;
        if !envelope.success {
            return Err(classify_rejection(status, &body));
        }

        CreatedClient::try_from(envelope).map_err(GatewayError::from)
    }
}

impl LookupGateway for RestGateway {
    async fn search_locations(&self, query: &str) -> GatewayResult<Vec<LocationSuggestion>> {
        debug!("location lookup for {query:?}");
        let response = self
            .http
            .get(&self.geocode_url)
            .query(&[("q", query), ("format", "json"), ("limit", "5")])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn list_countries(&self) -> GatewayResult<Vec<String>> {
        let response = self
            .http
            .get(&self.countries_url)
            .send()
            .await?
            .error_for_status()?;
        let countries: Vec<CountryDto> = response.json().await?;
        let mut names: Vec<String> = countries.into_iter().map(|c| c.name.common).collect();
        names.sort();
        Ok(names)
    }
}

/// Converts the assembled payload into a `reqwest` multipart form.
fn to_multipart(payload: SubmissionPayload) -> GatewayResult<Form> {
    let mut form = Form::new();
    for part in payload.into_parts() {
        form = match part.value {
            PartValue::Text(text) => form.text(part.name, text),
            PartValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let file = MultipartPart::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| GatewayError::Config(e.to_string()))?;
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}

/// Maps a rejected submission to the error taxonomy: field-rejection messages
/// become [`GatewayError::Validation`], everything else keeps its status and
/// message.
fn classify_rejection(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| excerpt(body));

    if message.contains(VALIDATION_FAILED_PATTERN) {
        GatewayError::Validation(message)
    } else {
        GatewayError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

fn excerpt(body: &str) -> String {
    let mut excerpt: String = body.chars().take(BODY_EXCERPT_LEN).collect();
    if body.chars().count() > BODY_EXCERPT_LEN {
        excerpt.push('…');
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failed_message_is_classified() {
        let body = r#"{"success":false,"message":"Client validation failed: name"}"#;
        let err = classify_rejection(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn other_rejections_keep_status_and_message() {
        let body = r#"{"success":false,"message":"duplicate client"}"#;
        let err = classify_rejection(StatusCode::CONFLICT, body);
        match err {
            GatewayError::Status { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "duplicate client");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn non_json_bodies_fall_back_to_an_excerpt() {
        let err = classify_rejection(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        match err {
            GatewayError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>upstream down</html>");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
