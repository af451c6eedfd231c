//! # タスク API の統合テスト
//!
//! モックリポジトリでルーターを組み立て、HTTP リクエスト単位で
//! ステータスコードとレスポンス形状を検証する。
//!
//! - 作成はタイトルをトリムし、空タイトルを 400 で拒否する
//! - 一覧は作成日時の降順で返す
//! - 存在しない id への更新・削除は 404 を返す
//! - 削除は物理削除であり、再削除は 404 になる

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use chrono::Utc;
use http::{Method, Request, StatusCode, header};
use pretty_assertions::assert_eq;
use tasuki_domain::task::{Task, TaskId, TaskTitle};
use tasuki_infra::{InfraError, repository::TaskRepository};
use tasuki_server::{app_builder::build_app, handler::TaskState, usecase::TaskUseCaseImpl};
use tower::ServiceExt;

// ===== モックリポジトリ =====

/// インメモリのモックリポジトリ
///
/// PostgreSQL 実装と同じ契約を守る: id は挿入順に単調増加し、
/// 一覧は作成日時の降順（同時刻は id の降順）で返す。
#[derive(Clone)]
struct MockTaskRepository {
    tasks:   Arc<Mutex<Vec<Task>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockTaskRepository {
    fn new() -> Self {
        Self {
            tasks:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let mut tasks: Vec<Task> = self.tasks.lock().unwrap().clone();
        tasks.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.id().cmp(&a.id()))
        });
        Ok(tasks)
    }

    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError> {
        let mut next_id = self.next_id.lock().unwrap();
        let task = Task::from_db(
            TaskId::from_i64(*next_id),
            title.clone(),
            false,
            Utc::now(),
        );
        *next_id += 1;
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn set_completion(
        &self,
        id: TaskId,
        completed: bool,
    ) -> Result<Option<Task>, InfraError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id() == id) {
            Some(slot) => {
                *slot = slot.clone().with_completion(completed);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id() != id);
        Ok(tasks.len() < before)
    }
}

// ===== ヘルパー =====

/// モックリポジトリでルーターを組み立てる
fn test_app() -> Router {
    let state = Arc::new(TaskState {
        usecase: TaskUseCaseImpl::new(MockTaskRepository::new()),
    });
    build_app(state)
}

/// リクエストを送信し、ステータスと JSON ボディを返す
async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // axum の extractor rejection はプレーンテキストを返すため、
    // JSON 以外のボディは文字列値として扱う
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });

    (status, json)
}

// ===== テスト =====

#[tokio::test]
async fn test_タスク一覧_空の場合は空配列を返す() {
    let app = test_app();

    let (status, body) = request(&app, Method::GET, "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_タスク作成_タイトルをトリムして201を返す() {
    let app = test_app();

    let (status, created) = request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "  Buy milk  "})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["completed"], false);
    assert!(created["id"].is_i64());
    assert!(created["created_at"].is_string());

    // 作成したタスクが一覧にそのまま現れる
    let (status, listed) = request(&app, Method::GET, "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn test_タスク作成_空白のみのタイトルは400() {
    let app = test_app();

    let (status, body) = request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");

    // 行は挿入されない
    let (_, listed) = request(&app, Method::GET, "/tasks", None).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn test_タスク作成_タイトル欠落は400() {
    let app = test_app();

    let (status, _) = request(&app, Method::POST, "/tasks", Some(serde_json::json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_タスク一覧_作成日時の降順で返す() {
    let app = test_app();

    request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "タスク A"})),
    )
    .await;
    request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "タスク B"})),
    )
    .await;

    let (status, listed) = request(&app, Method::GET, "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    // 後に作成した B が先頭
    assert_eq!(listed[0]["title"], "タスク B");
    assert_eq!(listed[1]["title"], "タスク A");
}

#[tokio::test]
async fn test_完了更新_completedのみ変更される() {
    let app = test_app();

    let (_, created) = request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "レポート提出"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = request(
        &app,
        Method::PATCH,
        &format!("/tasks/{id}"),
        Some(serde_json::json!({"completed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_完了更新_存在しないidは404() {
    let app = test_app();

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/tasks/999",
        Some(serde_json::json!({"completed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn test_完了更新_真偽値以外は拒否される() {
    let app = test_app();

    let (_, created) = request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "厳密な真偽値"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // 真偽値以外はデシリアライズの時点で拒否される
    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/tasks/{id}"),
        Some(serde_json::json!({"completed": "yes"})),
    )
    .await;
    assert!(status.is_client_error());

    // 行は変更されない
    let (_, listed) = request(&app, Method::GET, "/tasks", None).await;
    assert_eq!(listed[0]["completed"], false);
}

#[tokio::test]
async fn test_削除_成功時はメッセージを返し再削除は404() {
    let app = test_app();

    let (_, created) = request(
        &app,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({"title": "捨てるタスク"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = request(&app, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    // 一覧から消える
    let (_, listed) = request(&app, Method::GET, "/tasks", None).await;
    assert_eq!(listed, serde_json::json!([]));

    // 再削除は 404
    let (status, _) = request(&app, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ヘルスチェック() {
    let app = test_app();

    let (status, body) = request(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["message"].is_string());
}
