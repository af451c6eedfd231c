//! # サーバー設定
//!
//! 環境変数からタスクストアサーバーの設定を読み込む。
//! すべての変数にデフォルト値があり、未設定でも起動できる。

use std::env;

/// タスクストアサーバーの設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// データベース接続設定
    pub database: DatabaseConfig,
}

/// PostgreSQL 接続設定
///
/// 接続 URL ではなく個別の環境変数で受け取り、[`DatabaseConfig::url`] で
/// 組み立てる。
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL ホスト
    pub host:     String,
    /// PostgreSQL ポート
    pub port:     u16,
    /// 接続ユーザー
    pub user:     String,
    /// 接続パスワード
    pub password: String,
    /// データベース名
    pub name:     String,
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `4000` |
    pub fn from_env() -> Self {
        Self {
            host:     env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:     env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    /// 環境変数からデータベース設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `DB_HOST` | `localhost` |
    /// | `DB_PORT` | `5432` |
    /// | `DB_USER` | `tasuki` |
    /// | `DB_PASSWORD` | `tasuki` |
    /// | `DB_NAME` | `tasuki` |
    fn from_env() -> Self {
        Self {
            host:     env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port:     env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .expect("DB_PORT は有効なポート番号である必要があります"),
            user:     env::var("DB_USER").unwrap_or_else(|_| "tasuki".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "tasuki".to_string()),
            name:     env::var("DB_NAME").unwrap_or_else(|_| "tasuki".to_string()),
        }
    }

    /// PostgreSQL 接続 URL を組み立てる
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
