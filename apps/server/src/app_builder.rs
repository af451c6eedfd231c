//! # アプリケーション構築
//!
//! ルーターとレイヤーの組み立てを担当する。`main.rs` はインフラ初期化と
//! サーバー起動に集中し、統合テストはモックリポジトリで同じルーターを
//! 組み立てる。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, patch},
};
use tasuki_infra::repository::TaskRepository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handler::{
   TaskState,
   create_task,
   delete_task,
   health_check,
   list_tasks,
   update_task_completion,
};

/// ルーターを構築する
///
/// ブラウザを含む別オリジンのクライアントから呼び出されるため、
/// CORS は全オリジン許可とする。
pub fn build_app<R>(state: Arc<TaskState<R>>) -> Router
where
   R: TaskRepository + 'static,
{
   Router::new()
      .route("/health", get(health_check))
      .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
      .route(
         "/tasks/{id}",
         patch(update_task_completion::<R>).delete(delete_task::<R>),
      )
      .with_state(state)
      .layer(CorsLayer::permissive())
      .layer(TraceLayer::new_for_http())
}
