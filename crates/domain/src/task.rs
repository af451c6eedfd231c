//! # タスク
//!
//! タスク管理の中心となるエンティティと値オブジェクトを定義する。
//!
//! ## ライフサイクル
//!
//! - 作成: ストアが id と created_at を採番して永続化する
//! - 更新: `completed` のみ変更可能（title と created_at は不変）
//! - 削除: 物理削除（論理削除は行わない）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::Utc;
//! use tasuki_domain::task::{Task, TaskId, TaskTitle};
//!
//! let title = TaskTitle::new("  牛乳を買う  ")?;
//! assert_eq!(title.as_str(), "牛乳を買う");
//!
//! let task = Task::from_db(TaskId::from_i64(1), title, false, Utc::now());
//! assert!(!task.completed());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// TaskId（タスク識別子）
// =========================================================================

/// タスクの一意識別子
///
/// ストア側（`BIGSERIAL`）が採番するため、ドメイン層で新規生成はしない。
/// 採番順に単調増加する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(i64);

impl TaskId {
    /// DB に格納された値から識別子を復元する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TaskTitle（タスクタイトル）
// =========================================================================

/// タイトルの最大文字数（DB: `VARCHAR(255)`）
const MAX_TASK_TITLE_LENGTH: usize = 255;

/// タスクタイトル（値オブジェクト）
///
/// 構築時に前後の空白を除去する。1〜255 文字。
///
/// # 不変条件
///
/// - 空文字列・空白のみの文字列ではない
/// - 最大 255 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        if value.chars().count() > MAX_TASK_TITLE_LENGTH {
            return Err(DomainError::Validation(
                "タイトルは 255 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// Task（タスクエンティティ）
// =========================================================================

/// タスクエンティティ
///
/// id と created_at はストアが採番するため、構築は DB の行からの
/// 復元（[`Task::from_db`]）のみ。completed の変更は
/// [`Task::with_completion`] で新しいインスタンスを返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id:         TaskId,
    title:      TaskTitle,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// DB の行からエンティティを復元する
    pub fn from_db(
        id: TaskId,
        title: TaskTitle,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    /// completed のみ変更した新しいインスタンスを返す
    ///
    /// id・title・created_at は変更されない。
    pub fn with_completion(self, completed: bool) -> Self {
        Self { completed, ..self }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
