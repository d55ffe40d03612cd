// tests/storage_remote_test.rs
// Remote backend against a local mock of the todos service: wire mapping,
// priority merge-back, and the exact bodies each operation sends.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use taskdeck::tasks::storage::remote::RemoteTaskStore;
use taskdeck::tasks::{StorageError, TaskManager, TaskPriority, TaskStatus, TaskStorage};

// ==== Mock Todos Service ====

struct MockTodo {
    id: i64,
    todo: String,
    completed: bool,
}

#[derive(Default)]
struct MockApi {
    todos: Mutex<Vec<MockTodo>>,
    next_id: AtomicI64,
    requests: Mutex<Vec<(String, Value)>>,
    report_deleted: AtomicBool,
}

impl MockApi {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            report_deleted: AtomicBool::new(true),
            ..Self::default()
        })
    }

    fn seed(&self, id: i64, todo: &str, completed: bool) {
        self.todos.lock().unwrap().push(MockTodo {
            id,
            todo: todo.to_string(),
            completed,
        });
    }

    fn record(&self, method: &str, path: &str, body: Value) {
        self.requests
            .lock()
            .unwrap()
            .push((format!("{} {}", method, path), body));
    }

    fn recorded(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn list_todos(State(api): State<Arc<MockApi>>, Path(user_id): Path<i64>) -> Json<Value> {
    api.record("GET", &format!("/todos/user/{}", user_id), Value::Null);
    let todos = api.todos.lock().unwrap();
    let items: Vec<Value> = todos
        .iter()
        .map(|t| json!({"id": t.id, "todo": t.todo, "completed": t.completed, "userId": user_id}))
        .collect();
    Json(json!({"todos": items, "total": items.len(), "skip": 0, "limit": items.len()}))
}

async fn add_todo(State(api): State<Arc<MockApi>>, Json(body): Json<Value>) -> Json<Value> {
    api.record("POST", "/todos/add", body.clone());
    let id = api.next_id.fetch_add(1, Ordering::SeqCst);
    let todo = body["todo"].as_str().unwrap_or_default().to_string();
    let completed = body["completed"].as_bool().unwrap_or(false);
    api.todos.lock().unwrap().push(MockTodo {
        id,
        todo: todo.clone(),
        completed,
    });
    Json(json!({"id": id, "todo": todo, "completed": completed, "userId": body["userId"]}))
}

async fn update_todo(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    api.record("PUT", &format!("/todos/{}", id), body.clone());
    let mut todos = api.todos.lock().unwrap();
    let todo = todos.iter_mut().find(|t| t.id == id).expect("known todo id");
    if let Some(title) = body["todo"].as_str() {
        todo.todo = title.to_string();
    }
    if let Some(completed) = body["completed"].as_bool() {
        todo.completed = completed;
    }
    Json(json!({"id": id, "todo": todo.todo, "completed": todo.completed, "userId": 1}))
}

async fn delete_todo(State(api): State<Arc<MockApi>>, Path(id): Path<i64>) -> Json<Value> {
    api.record("DELETE", &format!("/todos/{}", id), Value::Null);
    let mut todos = api.todos.lock().unwrap();
    let index = todos
        .iter()
        .position(|t| t.id == id)
        .expect("known todo id");
    let removed = todos.remove(index);
    Json(json!({
        "id": removed.id,
        "todo": removed.todo,
        "completed": removed.completed,
        "userId": 1,
        "isDeleted": api.report_deleted.load(Ordering::SeqCst),
        "deletedOn": "2025-01-01T00:00:00.000Z",
    }))
}

/// Serves the mock on an ephemeral port and returns the todos base url.
async fn spawn_mock(api: Arc<MockApi>) -> String {
    let app = Router::new()
        .route("/todos/user/{user_id}", get(list_todos))
        .route("/todos/add", post(add_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock");
    });
    format!("http://{}/todos", addr)
}

async fn setup(api: &Arc<MockApi>) -> RemoteTaskStore {
    let base_url = spawn_mock(api.clone()).await;
    RemoteTaskStore::new(base_url, 7, Duration::from_secs(5)).expect("remote store")
}

// ==== Tests ====

#[tokio::test]
async fn load_maps_wire_records_to_tasks() {
    let api = MockApi::new();
    api.seed(1, "Buy milk", false);
    api.seed(2, "Call mom", true);
    let store = setup(&api).await;

    let mut tasks = store.load_tasks().await.unwrap();
    tasks.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "1");
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].status, TaskStatus::Planned);
    assert_eq!(tasks[1].id, "2");
    assert_eq!(tasks[1].status, TaskStatus::Completed);
    // The service has no priority field; loads default it.
    assert!(tasks.iter().all(|t| t.priority == TaskPriority::Normal));
}

#[tokio::test]
async fn add_sends_the_fields_and_merges_the_priority_back() {
    let api = MockApi::new();
    let store = setup(&api).await;

    let task = store
        .add_task("Walk dog", TaskPriority::Important, TaskStatus::Planned)
        .await
        .unwrap();

    // Id and title come back from the service, the priority is ours.
    assert_eq!(task.id, "1");
    assert_eq!(task.title, "Walk dog");
    assert_eq!(task.priority, TaskPriority::Important);
    assert_eq!(task.status, TaskStatus::Planned);

    let recorded = api.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "POST /todos/add");
    assert_eq!(
        recorded[0].1,
        json!({"todo": "Walk dog", "completed": false, "userId": 7})
    );
}

#[tokio::test]
async fn update_title_sends_only_the_title() {
    let api = MockApi::new();
    api.seed(5, "Buy milk", false);
    let store = setup(&api).await;

    store.update_title("5", "Buy oat milk").await.unwrap();

    let recorded = api.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "PUT /todos/5");
    assert_eq!(recorded[0].1, json!({"todo": "Buy oat milk"}));
}

#[tokio::test]
async fn update_status_always_sends_completed_true() {
    // Known issue carried on purpose: the flag on the wire is hardwired, so
    // moving a task back to planned never reaches the service.
    let api = MockApi::new();
    api.seed(5, "Buy milk", true);
    let store = setup(&api).await;

    store.update_status("5", TaskStatus::Planned).await.unwrap();
    store
        .update_status("5", TaskStatus::Completed)
        .await
        .unwrap();

    let recorded = api.recorded();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].1, json!({"completed": true}));
    assert_eq!(recorded[1].1, json!({"completed": true}));
    assert!(api.todos.lock().unwrap()[0].completed);
}

#[tokio::test]
async fn update_priority_never_touches_the_network() {
    let api = MockApi::new();
    api.seed(5, "Buy milk", false);
    let store = setup(&api).await;

    store
        .update_priority("5", TaskPriority::Important)
        .await
        .unwrap();

    assert!(api.recorded().is_empty());
}

#[tokio::test]
async fn remove_deletes_and_tolerates_is_deleted_false() {
    let api = MockApi::new();
    api.seed(5, "Buy milk", false);
    api.report_deleted.store(false, Ordering::SeqCst);
    let store = setup(&api).await;

    store.remove_task("5").await.unwrap();

    assert_eq!(api.recorded()[0].0, "DELETE /todos/5");
    assert!(api.todos.lock().unwrap().is_empty());
}

#[tokio::test]
async fn mutation_sequence_is_reflected_by_load() {
    let api = MockApi::new();
    let store = setup(&api).await;

    let milk = store
        .add_task("Buy milk", TaskPriority::Normal, TaskStatus::Planned)
        .await
        .unwrap();
    let mom = store
        .add_task("Call mom", TaskPriority::Important, TaskStatus::Planned)
        .await
        .unwrap();

    store.update_title(&milk.id, "Buy oat milk").await.unwrap();
    store
        .update_status(&mom.id, TaskStatus::Completed)
        .await
        .unwrap();
    store.remove_task(&milk.id).await.unwrap();

    let tasks = store.load_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, mom.id);
    assert_eq!(tasks[0].title, "Call mom");
    assert_eq!(tasks[0].status, TaskStatus::Completed);
    // Priorities never reach the service, so a reload resets them.
    assert_eq!(tasks[0].priority, TaskPriority::Normal);
}

#[tokio::test]
async fn replanning_diverges_between_cache_and_service() {
    // The documented known issue end to end: the manager's collection moves
    // back to planned while the service keeps the task completed.
    let api = MockApi::new();
    api.seed(5, "Buy milk", true);
    let store = setup(&api).await;

    let mut manager = TaskManager::new(Arc::new(store));
    manager.load_tasks().await.unwrap();
    assert_eq!(manager.tasks()[0].status, TaskStatus::Completed);

    manager
        .update_status("5", TaskStatus::Planned)
        .await
        .unwrap();

    assert_eq!(manager.tasks()[0].status, TaskStatus::Planned);
    assert!(api.todos.lock().unwrap()[0].completed);
    assert_eq!(api.recorded().last().unwrap().1, json!({"completed": true}));
}

#[tokio::test]
async fn service_errors_map_to_remote_api_errors() {
    let api = MockApi::new();
    let base_url = spawn_mock(api).await;
    let store = RemoteTaskStore::new(format!("{}/nowhere", base_url), 7, Duration::from_secs(5))
        .unwrap();

    let err = store.load_tasks().await.unwrap_err();

    match err {
        StorageError::RemoteApi { status, .. } => assert_eq!(status, 404),
        other => panic!("expected RemoteApi error, got {:?}", other),
    }
}
