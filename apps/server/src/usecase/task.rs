//! # タスクユースケース
//!
//! タスクの一覧取得・作成・完了状態更新・削除のロジックを実装する。
//!
//! すべての操作はリポジトリの単一呼び出しで完結する。複数行に
//! またがる更新はないため、トランザクション管理は持たない。

use tasuki_domain::{
   DomainError,
   task::{Task, TaskId, TaskTitle},
};
use tasuki_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスクユースケース実装
///
/// R: TaskRepository
pub struct TaskUseCaseImpl<R> {
   repo: R,
}

impl<R> TaskUseCaseImpl<R>
where
   R: TaskRepository,
{
   pub fn new(repo: R) -> Self {
      Self { repo }
   }

   /// タスク一覧を取得する
   ///
   /// 作成日時の降順（最新が先頭）で返す。
   pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
      Ok(self.repo.find_all().await?)
   }

   /// タスクを作成する
   ///
   /// タイトルは前後の空白を除去し、空ならバリデーションエラーを返す。
   /// id と created_at はストアが採番し、completed は false で初期化される。
   pub async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
      let title = TaskTitle::new(title)?;

      Ok(self.repo.insert(&title).await?)
   }

   /// 完了状態を上書きする
   ///
   /// 対象タスクが存在しない場合は not-found エラーを返す。
   /// completed 以外のフィールドは変更されない。
   pub async fn set_completion(&self, id: TaskId, completed: bool) -> Result<Task, ApiError> {
      let updated = self.repo.set_completion(id, completed).await?;

      updated.ok_or_else(|| {
         ApiError::from(DomainError::NotFound {
            entity_type: "Task",
            id:          id.to_string(),
         })
      })
   }

   /// タスクを削除する
   ///
   /// 物理削除。対象タスクが存在しない場合は not-found エラーを返す。
   pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
      let deleted = self.repo.delete(id).await?;

      if !deleted {
         return Err(ApiError::from(DomainError::NotFound {
            entity_type: "Task",
            id:          id.to_string(),
         }));
      }

      Ok(())
   }
}
