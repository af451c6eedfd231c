//! # タスクストアサーバー
//!
//! タスクの永続化と JSON HTTP API を担当するサーバー。
//!
//! ## 役割
//!
//! - **永続化**: PostgreSQL の tasks テーブルを所有する
//! - **API**: タスクの一覧・作成・完了状態更新・削除を公開する
//! - **スキーマ初期化**: 起動時に tasks テーブルの存在を保証する
//!
//! ## 環境変数
//!
//! すべてデフォルト値があり、未設定でも起動できる。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `HOST` | `0.0.0.0` | バインドアドレス |
//! | `PORT` | `4000` | ポート番号 |
//! | `DB_HOST` | `localhost` | PostgreSQL ホスト |
//! | `DB_PORT` | `5432` | PostgreSQL ポート |
//! | `DB_USER` | `tasuki` | 接続ユーザー |
//! | `DB_PASSWORD` | `tasuki` | 接続パスワード |
//! | `DB_NAME` | `tasuki` | データベース名 |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p tasuki-server
//!
//! # 本番環境
//! PORT=4000 DB_HOST=db.internal cargo run -p tasuki-server --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use tasuki_infra::{db, repository::PostgresTaskRepository};
use tasuki_server::{
   app_builder::build_app,
   config::ServerConfig,
   handler::TaskState,
   usecase::TaskUseCaseImpl,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// タスクストアサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベース接続プールの作成とスキーマ初期化
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   // RUST_LOG 環境変数でログレベルを制御可能
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tasuki=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ServerConfig::from_env();

   tracing::info!(
      "タスクストアサーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成（接続は初回クエリ時に確立される）
   let pool = db::create_pool(&config.database.url())?;

   // スキーマ初期化。失敗してもプロセスは継続し、以降の操作が
   // 個別に失敗する
   match db::init_schema(&pool).await {
      Ok(()) => tracing::info!("データベースを初期化しました"),
      Err(e) => tracing::error!("データベースの初期化に失敗しました: {}", e),
   }

   // 依存コンポーネントを初期化
   let task_repository = PostgresTaskRepository::new(pool);
   let task_state = Arc::new(TaskState {
      usecase: TaskUseCaseImpl::new(task_repository),
   });

   // ルーター構築
   let app = build_app(task_state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("タスクストアサーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
