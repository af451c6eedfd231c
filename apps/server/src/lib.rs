//! # Tasuki サーバーライブラリ
//!
//! タスクストアのハンドラ・ユースケース・ルーター構築を公開する。
//! 統合テストがモックリポジトリでルーターを組み立てられるように、
//! バイナリ本体（`main.rs`）とは分離している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
