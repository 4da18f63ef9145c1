//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A fresh application (state + router) per test
//! - Request builders for JSON and Basic-auth requests
//! - Response body decoding

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use classroom_api::app::{build_router, AppState};
use classroom_api::config::Config;
use serde_json::Value;
use tower::Service as _;

/// Test context containing the router and the state behind it
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
}

impl TestContext {
    /// Creates a new test context with freshly seeded collections
    pub fn new() -> Self {
        let state = AppState::new(Config::default());
        let app = build_router(state.clone());

        TestContext { app, state }
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().call(request).await.unwrap()
    }

    /// Sends a bodiless request
    pub async fn request(&self, method: &str, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Sends a JSON request
    pub async fn json(&self, method: &str, uri: &str, body: Value) -> Response {
        self.send(json_request(method, uri, body)).await
    }

    /// GETs `uri` and decodes the JSON body, asserting 200
    pub async fn get_json(&self, uri: &str) -> Value {
        let response = self.request("GET", uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        body_json(response).await
    }
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Returns a Basic `Authorization` header value
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

/// Reads the whole response body
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Reads and decodes a JSON response body
pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A complete task payload
pub fn task(id: i64, title: &str, completed: bool) -> Value {
    serde_json::json!({ "id": id, "title": title, "completed": completed })
}

/// A complete order payload
pub fn order(identifier: i64, customer: &str) -> Value {
    serde_json::json!({
        "identifier": identifier,
        "customerName": customer,
        "creationDatetime": "2026-10-18T09:30:00Z",
        "totalAmount": "42.50"
    })
}

/// A complete profile creation payload
pub fn profile_payload(email: &str, language: &str) -> Value {
    serde_json::json!({
        "personalInfo": {
            "firstName": "Hery",
            "lastName": "Rakoto",
            "birthdate": "1998-04-12",
            "email": email
        },
        "address": {
            "street": "Lot II A 12",
            "city": "Antananarivo",
            "country": "Madagascar",
            "postalCode": "101"
        },
        "preferences": { "needsNewsletter": true, "language": language }
    })
}
