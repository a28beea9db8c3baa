//! Helpers for driving the router in-process.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::api::http::routes;
use crate::api::middleware;
use crate::test_fixtures::store_seeder::SeededStore;
use crate::App;

/// Router plus the store directory backing it.
pub struct TestServer {
    pub seeded: SeededStore,
    router: Router,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::over(SeededStore::empty().await)
    }

    pub fn over(seeded: SeededStore) -> Self {
        let app = Arc::new(App::new(seeded.store.clone(), "magic-movers-test"));
        let router = middleware::apply(routes().with_state(app), None);
        Self { seeded, router }
    }

    /// Send one request and decode the JSON body (`Value::Null` when not JSON).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// GET with extra request headers; returns the raw response headers and body bytes.
    pub async fn get_raw(&self, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, Vec<u8>) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, headers, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, None).await
    }

    /// Create a mover and return its id.
    pub async fn create_mover(&self, name: &str, weight_limit: u32) -> String {
        let (status, body) = self
            .post(
                "/api/magic-movers",
                serde_json::json!({ "name": name, "weightLimit": weight_limit, "energy": 10 }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create mover: {body}");
        id_of(&body)
    }

    /// Create an item and return its id.
    pub async fn create_item(&self, name: &str, weight: u32) -> String {
        let (status, body) = self
            .post(
                "/api/magic-items",
                serde_json::json!({ "name": name, "weight": weight }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create item: {body}");
        id_of(&body)
    }

    pub async fn load(&self, mover_id: &str, item_ids: &[impl AsRef<str>]) -> (StatusCode, Value) {
        let ids: Vec<&str> = item_ids.iter().map(AsRef::as_ref).collect();
        self.post(
            &format!("/api/magic-movers/{mover_id}/load"),
            serde_json::json!({ "magicItemsIds": ids }),
        )
        .await
    }
}

pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("body has an id").to_string()
}
