//! # タスク API ハンドラ
//!
//! タスクの CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! | メソッド & パス | 成功レスポンス |
//! |----------------|---------------|
//! | GET /tasks | 200, タスクの配列 |
//! | POST /tasks | 201, 作成されたタスク |
//! | PATCH /tasks/{id} | 200, 更新されたタスク |
//! | DELETE /tasks/{id} | 200, 確認メッセージ |

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tasuki_domain::task::{Task, TaskId};
use tasuki_infra::repository::TaskRepository;

use crate::{error::ApiError, usecase::TaskUseCaseImpl};

/// タスクハンドラーの State
pub struct TaskState<R> {
   pub usecase: TaskUseCaseImpl<R>,
}

/// タスク DTO
///
/// `created_at` は RFC 3339 形式の文字列で返す。
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:         i64,
   pub title:      String,
   pub completed:  bool,
   pub created_at: String,
}

impl TaskDto {
   fn from_task(task: &Task) -> Self {
      Self {
         id:         task.id().as_i64(),
         title:      task.title().as_str().to_string(),
         completed:  task.completed(),
         created_at: task.created_at().to_rfc3339(),
      }
   }
}

/// タスク作成リクエスト
///
/// `title` は `Option` で受け、欠落・`null` も空タイトルと同じく
/// バリデーションエラー（400）として扱う。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   pub title: Option<String>,
}

/// 完了状態更新リクエスト
///
/// `completed` は厳密に真偽値のみ受け付ける。真偽値以外の JSON 値は
/// デシリアライズの時点で拒否される。
#[derive(Debug, Deserialize)]
pub struct UpdateCompletionRequest {
   pub completed: bool,
}

/// タスク削除レスポンス
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
   pub message: String,
}

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /tasks
pub async fn list_tasks<R>(State(state): State<Arc<TaskState<R>>>) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   let tasks = state.usecase.list_tasks().await?;

   let response: Vec<TaskDto> = tasks.iter().map(TaskDto::from_task).collect();

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /tasks
pub async fn create_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   Json(request): Json<CreateTaskRequest>,
) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   let title = request.title.unwrap_or_default();

   let task = state.usecase.create_task(&title).await?;

   Ok((StatusCode::CREATED, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクの完了状態を更新する
///
/// ## エンドポイント
/// PATCH /tasks/{id}
pub async fn update_task_completion<R>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<i64>,
   Json(request): Json<UpdateCompletionRequest>,
) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   let task = state
      .usecase
      .set_completion(TaskId::from_i64(id), request.completed)
      .await?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクを削除する
///
/// ## エンドポイント
/// DELETE /tasks/{id}
pub async fn delete_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   state.usecase.delete_task(TaskId::from_i64(id)).await?;

   let response = DeleteTaskResponse {
      message: "タスクを削除しました".to_string(),
   };

   Ok((StatusCode::OK, Json(response)).into_response())
}
