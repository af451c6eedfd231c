//! # サーバーエラー定義
//!
//! タスクストアのエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーと HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `Validation` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `Database` | 500 Internal Server Error |
//!
//! 500 系は詳細をサーバー側のログにのみ出力し、レスポンスには
//! 固定の汎用メッセージを返す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use tasuki_domain::DomainError;
use tasuki_infra::InfraError;
use thiserror::Error;

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

/// タスクストアで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// バリデーションエラー
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         not_found @ DomainError::NotFound { .. } => ApiError::NotFound(not_found.to_string()),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, error_type, title, detail) = match &self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            "https://tasuki.example.com/errors/validation-error",
            "Validation Error",
            msg.clone(),
         ),
         ApiError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            "https://tasuki.example.com/errors/not-found",
            "Not Found",
            msg.clone(),
         ),
         ApiError::Database(e) => {
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "https://tasuki.example.com/errors/internal-error",
               "Internal Server Error",
               "内部エラーが発生しました".to_string(),
            )
         }
      };

      (
         status,
         Json(ErrorResponse {
            error_type: error_type.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
         }),
      )
         .into_response()
   }
}
