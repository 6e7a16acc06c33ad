// Helpers shared by the HTTP and end to end tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::marks::core::record::MarkSheet;
use crate::modules::marks::core::store::RecordStore;
use crate::shared::infrastructure::snapshot::in_memory::InMemorySnapshot;
use crate::shell::state::AppState;

pub async fn make_test_state(seed: MarkSheet) -> (AppState, Arc<InMemorySnapshot<MarkSheet>>) {
    let snapshot = Arc::new(InMemorySnapshot::seeded(seed));
    let store = RecordStore::load(snapshot.clone())
        .await
        .expect("seeded snapshot should load");
    (AppState::new(store), snapshot)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
