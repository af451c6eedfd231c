//! # ヘルスチェックハンドラ
//!
//! タスクストアの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "OK",
//!   "message": "バックエンドは正常に稼働しています"
//! }
//! ```

use axum::Json;
use serde::Serialize;

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"OK"`）
    pub status:  String,
    /// 稼働状態の説明
    pub message: String,
}

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
/// データベースへの到達性は確認しない。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "OK".to_string(),
        message: "バックエンドは正常に稼働しています".to_string(),
    })
}
