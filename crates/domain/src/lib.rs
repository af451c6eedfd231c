//! # Tasuki ドメイン層
//!
//! タスク管理のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`task::Task`]）
//! - **値オブジェクト**: 不変条件を構築時に強制するオブジェクト
//!   （[`task::TaskTitle`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use tasuki_domain::task::TaskTitle;
//!
//! let title = TaskTitle::new("  牛乳を買う  ").unwrap();
//! assert_eq!(title.as_str(), "牛乳を買う");
//! ```

pub mod error;
pub mod task;

pub use error::DomainError;
