//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一文で完結**: 各操作は 1 行だけを対象とする単一の SQL 文。
//!   `RETURNING` で変更後の行を同じラウンドトリップで取得する
//! - **実行時マッピング**: `sqlx::query_as` + `FromRow` の行構造体で
//!   DB の行をドメインエンティティに変換する
//! - **並び順**: 一覧は作成日時の降順。同時刻の行は id の降順で
//!   並びを決定的にする

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tasuki_domain::task::{Task, TaskId, TaskTitle};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの CRUD 操作を定義する。更新系は対象行が存在しない場合に
/// `None` / `false` を返し、呼び出し側が not-found として扱う。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクを作成日時の降順で取得する
    async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

    /// タスクを挿入する
    ///
    /// id と created_at はストアが採番し、completed は false で
    /// 初期化される。挿入された行全体を返す。
    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError>;

    /// completed を上書きする
    ///
    /// 対象行が存在しない場合は `None` を返す。
    async fn set_completion(
        &self,
        id: TaskId,
        completed: bool,
    ) -> Result<Option<Task>, InfraError>;

    /// タスクを削除する
    ///
    /// 削除した場合は `true`、対象行が存在しない場合は `false` を返す。
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError>;
}

/// tasks テーブルの行
///
/// DB の行をそのまま受け取る中間構造体。[`TaskRow::into_task`] で
/// ドメインエンティティに変換する。
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id:         i64,
    title:      String,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        // DB の NOT NULL 制約と VARCHAR(255) により title は常に有効
        let title = TaskTitle::new(self.title).expect("DB に格納されたタイトルは常に有効");
        Task::from_db(TaskId::from_i64(self.id), title, self.completed, self.created_at)
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, completed, created_at
            FROM tasks
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (title)
            VALUES ($1)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_task())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id, completed))]
    async fn set_completion(
        &self,
        id: TaskId,
        completed: bool,
    ) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET completed = $2
            WHERE id = $1
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(id.as_i64())
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TaskId) -> Result<bool, InfraError> {
        let deleted = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresTaskRepository>();
        assert_send_sync::<Box<dyn TaskRepository>>();
    }
}
