//! # タスクストア API クライアント
//!
//! タスクストアの HTTP API を呼び出すクライアント。
//!
//! レスポンスのステータスコードをクライアントエラー型にマッピングする。
//! ネットワークレベルの失敗（応答なし）もエラーとして同様に扱う。

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// タスク DTO
///
/// タスクストアが返す JSON 形状そのまま。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskDto {
   pub id:         i64,
   pub title:      String,
   pub completed:  bool,
   pub created_at: String,
}

/// タスク作成リクエスト
#[derive(Debug, Serialize)]
struct CreateTaskRequest<'a> {
   title: &'a str,
}

/// 完了状態更新リクエスト
#[derive(Debug, Serialize)]
struct UpdateCompletionRequest {
   completed: bool,
}

/// タスクストアクライアントエラー
#[derive(Debug, Error)]
pub enum ClientError {
   /// バリデーションエラー（400）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// タスクが見つからない（404）
   #[error("タスクが見つかりません")]
   TaskNotFound,

   /// ネットワークエラー
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 予期しないエラー
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for ClientError {
   fn from(err: reqwest::Error) -> Self {
      ClientError::Network(err.to_string())
   }
}

/// タスクストア API クライアント実装
#[derive(Clone)]
pub struct TaskApiClient {
   base_url: String,
   client:   reqwest::Client,
}

impl TaskApiClient {
   /// 新しいクライアントを作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: タスクストアのベース URL（例: `http://localhost:4000`）
   pub fn new(base_url: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client:   reqwest::Client::new(),
      }
   }

   /// タスク一覧を取得する
   ///
   /// タスクストアの `GET /tasks` を呼び出す。
   pub async fn list_tasks(&self) -> Result<Vec<TaskDto>, ClientError> {
      let url = format!("{}/tasks", self.base_url);

      let response = self.client.get(&url).send().await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.json::<Vec<TaskDto>>().await?;
            Ok(body)
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }

   /// タスクを作成する
   ///
   /// タスクストアの `POST /tasks` を呼び出す。
   pub async fn create_task(&self, title: &str) -> Result<TaskDto, ClientError> {
      let url = format!("{}/tasks", self.base_url);

      let response = self
         .client
         .post(&url)
         .json(&CreateTaskRequest { title })
         .send()
         .await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.json::<TaskDto>().await?;
            Ok(body)
         }
         StatusCode::BAD_REQUEST => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Validation(body))
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }

   /// 完了状態を更新する
   ///
   /// タスクストアの `PATCH /tasks/{id}` を呼び出す。
   pub async fn set_completion(&self, id: i64, completed: bool) -> Result<TaskDto, ClientError> {
      let url = format!("{}/tasks/{}", self.base_url, id);

      let response = self
         .client
         .patch(&url)
         .json(&UpdateCompletionRequest { completed })
         .send()
         .await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.json::<TaskDto>().await?;
            Ok(body)
         }
         StatusCode::NOT_FOUND => Err(ClientError::TaskNotFound),
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }

   /// タスクを削除する
   ///
   /// タスクストアの `DELETE /tasks/{id}` を呼び出す。
   pub async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
      let url = format!("{}/tasks/{}", self.base_url, id);

      let response = self.client.delete(&url).send().await?;

      match response.status() {
         status if status.is_success() => Ok(()),
         StatusCode::NOT_FOUND => Err(ClientError::TaskNotFound),
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }
}
