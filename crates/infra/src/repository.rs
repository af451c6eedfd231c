//! # リポジトリ層
//!
//! エンティティの永続化を担当するリポジトリを定義する。
//!
//! ## 設計方針
//!
//! - リポジトリはトレイトとして定義し、PostgreSQL 実装と
//!   テスト用インメモリ実装を差し替え可能にする
//! - 各操作は単一の SQL 文で完結する（複数文のトランザクションは不要）

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
