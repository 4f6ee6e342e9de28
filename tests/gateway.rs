//! REST gateway behavior against a stubbed backend.

use hireflow_crm_client::domain::client::ClientDraft;
use hireflow_crm_client::domain::upload::UploadSlots;
use hireflow_crm_client::forms::contact::ContactForm;
use hireflow_crm_client::gateway::http::RestGateway;
use hireflow_crm_client::gateway::{ClientGateway, GatewayError, LookupGateway};
use hireflow_crm_client::models::config::ApiConfig;
use hireflow_crm_client::payload::SubmissionPayload;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        geocode_url: format!("{}/search", server.uri()),
        countries_url: format!("{}/countries", server.uri()),
        timeout_secs: 5,
        user_agent: "hireflow-crm-client/test".into(),
    }
}

fn sample_payload() -> SubmissionPayload {
    let contact = ContactForm {
        first_name: "Sam".into(),
        phone: "501112222".into(),
        country_code: "966".into(),
        ..ContactForm::default()
    }
    .build()
    .expect("valid contact");

    let draft = ClientDraft {
        name: "Acme".into(),
        phone_number: "501234567".into(),
        address: "Riyadh".into(),
        primary_contacts: vec![contact],
        ..ClientDraft::default()
    };
    SubmissionPayload::assemble(&draft, &UploadSlots::new()).expect("valid draft")
}

#[tokio::test]
async fn create_client_decodes_the_canonical_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": { "data": { "_id": "66f1a2", "name": "Acme" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let created = gateway
        .create_client(sample_payload())
        .await
        .expect("creation succeeds");

    assert_eq!(created.id.as_str(), "66f1a2");
    assert_eq!(created.name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn alternate_envelope_shapes_are_hard_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "client": { "_id": "66f1a2" }
        })))
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let err = gateway
        .create_client(sample_payload())
        .await
        .expect_err("unrecognized shape must not be silent success");

    assert!(matches!(err, GatewayError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn backend_validation_failures_map_to_a_stable_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Client validation failed: phoneNumber is invalid"
        })))
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let err = gateway
        .create_client(sample_payload())
        .await
        .expect_err("rejected submission");

    match err {
        GatewayError::Validation(message) => {
            assert!(message.contains("Client validation failed"));
        }
        other => panic!("expected validation classification, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "internal error"
        })))
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let err = gateway
        .create_client(sample_payload())
        .await
        .expect_err("server error");

    match err {
        GatewayError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected status classification, got {other:?}"),
    }
}

#[tokio::test]
async fn location_search_sends_the_query_and_decodes_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Riyadh"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "display_name": "Riyadh, Saudi Arabia", "lat": "24.63", "lon": "46.71" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let suggestions = gateway
        .search_locations("Riyadh")
        .await
        .expect("lookup succeeds");

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].coords(), Some((24.63, 46.71)));
}

#[tokio::test]
async fn countries_are_flattened_and_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": { "common": "Saudi Arabia" } },
            { "name": { "common": "Egypt" } }
        ])))
        .mount(&server)
        .await;

    let gateway = RestGateway::new(&config_for(&server)).expect("gateway builds");
    let countries = gateway.list_countries().await.expect("lookup succeeds");

    assert_eq!(countries, vec!["Egypt", "Saudi Arabia"]);
}
