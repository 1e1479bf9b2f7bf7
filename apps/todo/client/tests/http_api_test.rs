//! `HttpTaskApi` and `TaskState` against a live tasks router on a random port.

use axum::Router;
use chrono::Utc;
use domain_tasks::{InMemoryTaskStore, TaskInput, TaskPriority, TaskService, handlers};
use tokio::net::TcpListener;
use todo_client::{
    ClientError, HttpTaskApi, LocalStore, StoreMode, TaskApi, TaskDraft, TaskState,
};

/// Serve `/api/tasks` in the background, returning the API base URL
async fn spawn_server() -> String {
    spawn_server_with(InMemoryTaskStore::new()).await
}

async fn spawn_server_with(store: InMemoryTaskStore) -> String {
    let service = TaskService::new(store);
    let app = Router::new().nest("/api/tasks", handlers::router(service));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// An address nothing listens on
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_crud_roundtrip_over_http() {
    let api = HttpTaskApi::new(spawn_server().await);

    let created = api
        .create(&TaskInput {
            title: "Pay bills".to_string(),
            priority: TaskPriority::High,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!created.completed);

    let mut input = created.to_input();
    input.priority = TaskPriority::Low;
    input.completed = true;
    let updated = api.update(&created.id, &input).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date_created, created.date_created);
    assert!(updated.completed);

    assert_eq!(api.get(&created.id).await.unwrap(), updated);
    assert_eq!(api.list().await.unwrap(), vec![updated.clone()]);

    assert_eq!(api.delete(&created.id).await.unwrap(), updated);
    let err = api.get(&created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_ids_with_reserved_characters_reach_the_task() {
    let odd = TaskInput {
        title: "Odd id".to_string(),
        ..Default::default()
    }
    .into_task("a/b?c".to_string(), Utc::now());
    let base_url = spawn_server_with(InMemoryTaskStore::with_tasks(vec![odd])).await;
    let api = HttpTaskApi::new(base_url);

    let fetched = api.get("a/b?c").await.unwrap();
    assert_eq!(fetched.title, "Odd id");

    let err = api.get("a/b").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(id) if id == "a/b"));

    assert_eq!(api.delete("a/b?c").await.unwrap().id, "a/b?c");
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_title_is_api_error() {
    let api = HttpTaskApi::new(spawn_server().await);

    let err = api.create(&TaskInput::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400 }));
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    let api = HttpTaskApi::new(dead_url().await);

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_state_uses_remote_when_reachable() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = TaskState::new(
        HttpTaskApi::new(spawn_server().await),
        LocalStore::new(dir.path().join("storage.json")),
    );

    state.load().await.unwrap();
    state.add(TaskDraft::new("Remote task")).await.unwrap();

    assert_eq!(state.mode(), StoreMode::Remote);
    assert!(!dir.path().join("storage.json").exists());
}

#[tokio::test]
async fn test_state_falls_back_when_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("storage.json");
    let mut state = TaskState::new(
        HttpTaskApi::new(dead_url().await),
        LocalStore::new(store_path.clone()),
    );

    state.load().await.unwrap();
    assert_eq!(state.mode(), StoreMode::Local);

    let created = state.add(TaskDraft::new("Offline task")).await.unwrap();
    let reloaded = LocalStore::new(store_path).load_tasks().await.unwrap();
    assert_eq!(reloaded, vec![created]);
}
