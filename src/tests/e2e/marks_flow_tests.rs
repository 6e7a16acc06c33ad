// End to end flow over the full router and a JSON snapshot on disk.

use axum::{Router, http::StatusCode};
use rstest::{fixture, rstest};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use crate::modules::marks::core::store::{RecordStore, StoreError};
use crate::shared::infrastructure::snapshot::json_file::JsonFileSnapshot;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::get_json;

struct Workspace {
    dir: TempDir,
    snapshot_path: PathBuf,
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("student.json");
    std::fs::write(&snapshot_path, "{}").unwrap();
    Workspace { dir, snapshot_path }
}

async fn boot(ws: &Workspace) -> Router {
    let store = RecordStore::load(Arc::new(JsonFileSnapshot::new(&ws.snapshot_path)))
        .await
        .expect("snapshot should load");
    router(AppState::new(store), ws.dir.path())
}

fn on_disk(ws: &Workspace) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(&ws.snapshot_path).unwrap()).unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_add_search_and_delete_a_student(workspace: Workspace) {
    let app = boot(&workspace).await;

    let (status, added) = get_json(app.clone(), "/add/alice/90").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        added,
        json!({"student": "alice", "mark": 90, "status": "success"})
    );

    let (_, found) = get_json(app.clone(), "/search/alice").await;
    assert_eq!(
        found,
        json!({"status": "found", "student": "alice", "marks": 90})
    );

    let (_, missing) = get_json(app.clone(), "/search/bob").await;
    assert_eq!(missing, json!({"status": "not found", "student": "bob"}));

    let (_, deleted) = get_json(app.clone(), "/delete/alice").await;
    assert_eq!(deleted, json!({"student": "alice", "status": "deleted"}));

    let (_, gone) = get_json(app, "/search/alice").await;
    assert_eq!(gone, json!({"status": "not found", "student": "alice"}));
    assert_eq!(on_disk(&workspace), json!({}));
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_last_write_per_student(workspace: Workspace) {
    let app = boot(&workspace).await;

    for uri in ["/add/alice/50", "/add/bob/60", "/add/alice/70", "/add/carol/0"] {
        get_json(app.clone(), uri).await;
    }

    let expected = json!({"alice": 70, "bob": 60, "carol": 0});
    let (_, all) = get_json(app, "/all").await;
    assert_eq!(all, expected);
    assert_eq!(on_disk(&workspace), expected);
}

#[rstest]
#[tokio::test]
async fn it_should_reproduce_the_sheet_after_a_restart(workspace: Workspace) {
    let first = boot(&workspace).await;
    get_json(first.clone(), "/add/alice/90").await;
    get_json(first.clone(), "/add/bob/72.5").await;
    get_json(first.clone(), "/add/carol/40").await;
    get_json(first.clone(), "/delete/carol").await;
    let (_, before) = get_json(first, "/all").await;

    let second = boot(&workspace).await;
    let (_, after) = get_json(second, "/all").await;

    assert_eq!(after, before);
    assert_eq!(after, json!({"alice": 90, "bob": 72.5}));
}

#[rstest]
#[tokio::test]
async fn it_should_not_store_a_rejected_mark(workspace: Workspace) {
    let app = boot(&workspace).await;

    let (status, _) = get_json(app.clone(), "/add/alice/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = get_json(app, "/all").await;
    assert_eq!(all, json!({}));
    assert_eq!(std::fs::read_to_string(&workspace.snapshot_path).unwrap(), "{}");
}

#[rstest]
#[tokio::test]
async fn it_should_write_an_indented_snapshot(workspace: Workspace) {
    let app = boot(&workspace).await;
    get_json(app, "/add/alice/90").await;

    let raw = std::fs::read_to_string(&workspace.snapshot_path).unwrap();
    assert_eq!(raw, "{\n  \"alice\": 90\n}\n");
}

#[rstest]
#[case("")]
#[case("[1, 2]")]
#[case("{\"alice\": \"ninety\"}")]
#[tokio::test]
async fn it_should_refuse_to_start_on_a_corrupt_snapshot(
    workspace: Workspace,
    #[case] content: &str,
) {
    std::fs::write(&workspace.snapshot_path, content).unwrap();
    let result = RecordStore::load(Arc::new(JsonFileSnapshot::new(&workspace.snapshot_path))).await;
    assert!(matches!(result, Err(StoreError::CorruptSnapshot(_))));
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_start_without_a_snapshot(workspace: Workspace) {
    std::fs::remove_file(&workspace.snapshot_path).unwrap();
    let result = RecordStore::load(Arc::new(JsonFileSnapshot::new(&workspace.snapshot_path))).await;
    assert!(matches!(result, Err(StoreError::CorruptSnapshot(_))));
}
