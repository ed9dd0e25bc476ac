//! Authenticator lifecycle tests against a mock API

mod common;

use common::{
    CHALLENGE_DOMAIN, CHALLENGE_VALUE, credentials_for, json_body, mount_json, mount_manifest,
    received_on,
};
use dns_subdomain_provider::{ProviderError, create_authenticator};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_perform_then_cleanup() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;
    mount_json(
        &server,
        "POST",
        "/assign-validation-data",
        200,
        json!({ "success": true }),
    )
    .await;
    mount_json(
        &server,
        "DELETE",
        "/clean-validation-data",
        200,
        json!({ "success": true }),
    )
    .await;

    let authenticator = require_ok!(create_authenticator(credentials_for(&server)));
    require_ok!(
        authenticator
            .perform(CHALLENGE_DOMAIN, CHALLENGE_DOMAIN, CHALLENGE_VALUE)
            .await
    );
    require_ok!(
        authenticator
            .cleanup(CHALLENGE_DOMAIN, CHALLENGE_DOMAIN, CHALLENGE_VALUE)
            .await
    );

    // One client per lifecycle call, each fetching the manifest once.
    assert_eq!(received_on(&server, "/manifest").await.len(), 2);

    let assigned = received_on(&server, "/assign-validation-data").await;
    let cleaned = received_on(&server, "/clean-validation-data").await;
    assert_eq!(assigned.len(), 1);
    assert_eq!(cleaned.len(), 1);
    assert_eq!(json_body(&assigned[0]), json_body(&cleaned[0]));
}

#[tokio::test]
async fn test_perform_propagates_manifest_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/manifest", 404, json!({})).await;

    let authenticator = require_ok!(create_authenticator(credentials_for(&server)));
    let result = authenticator
        .perform(CHALLENGE_DOMAIN, CHALLENGE_DOMAIN, CHALLENGE_VALUE)
        .await;
    assert!(
        matches!(
            &result,
            Err(ProviderError::ManifestUnavailable { status: 404, .. })
        ),
        "unexpected result: {result:?}"
    );
    assert!(
        received_on(&server, "/assign-validation-data")
            .await
            .is_empty()
    );
}

#[tokio::test]
async fn test_cleanup_reports_provider_failure() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;
    mount_json(
        &server,
        "DELETE",
        "/clean-validation-data",
        200,
        json!({ "success": false, "message": "record not found" }),
    )
    .await;

    let authenticator = require_ok!(create_authenticator(credentials_for(&server)));
    let result = authenticator
        .cleanup(CHALLENGE_DOMAIN, CHALLENGE_DOMAIN, CHALLENGE_VALUE)
        .await;

    let err = require_some!(result.err(), "cleanup failure should be reported");
    assert!(err.is_expected());
    assert!(err.to_string().contains("record not found"));
}

#[tokio::test]
async fn test_perform_incompatible_domain() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    let authenticator = require_ok!(create_authenticator(credentials_for(&server)));
    let result = authenticator
        .perform(
            "www.unrelated.org",
            "_acme-challenge.www.unrelated.org",
            CHALLENGE_VALUE,
        )
        .await;

    let err = require_some!(result.err());
    let message = err.to_string();
    assert!(message.contains("www.unrelated.org"));
    assert!(message.contains("example.com"));
    assert!(
        received_on(&server, "/assign-validation-data")
            .await
            .is_empty()
    );
}
