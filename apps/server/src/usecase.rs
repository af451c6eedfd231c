//! # ユースケース層
//!
//! タスクストアのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリをジェネリクスで外部から注入し、
//!   テストではインメモリ実装に差し替える
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod task;

pub use task::TaskUseCaseImpl;
