//! # タスク操作ターミナルクライアント
//!
//! タスクストアの状態を端末に描画し、ユーザーの操作を API 呼び出しに
//! 変換する対話型クライアント。
//!
//! ## 動作
//!
//! - 起動時に一覧を取得して描画する
//! - 変更操作が成功するたびに一覧全体を再取得して描画し直す
//!   （楽観的なローカル更新は行わない）
//! - 失敗時はエラーメッセージを表示し、直前のスナップショットを保持する
//! - 削除は実行前に確認プロンプトを出す
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p tasuki-cli -- --api-url http://localhost:4000
//! ```
//!
//! ## コマンド
//!
//! | コマンド | 動作 |
//! |----------|------|
//! | `add <タイトル>` | タスクを追加する |
//! | `toggle <ID>` | 完了状態を反転する |
//! | `rm <ID>` | 確認のうえタスクを削除する |
//! | `refresh` | 一覧を再取得する |
//! | `quit` | 終了する |

mod client;
mod command;
mod render;

use clap::Parser;
use dialoguer::{Confirm, Input};

use crate::{
   client::{ClientError, TaskApiClient, TaskDto},
   command::Command,
   render::render_task_list,
};

/// タスクストアの対話型クライアント
#[derive(Debug, Parser)]
#[command(name = "tasuki", version, about = "タスクストアの対話型クライアント")]
struct Args {
   /// タスクストア API のベース URL
   #[arg(long, env = "TASUKI_API_URL", default_value = "http://localhost:4000")]
   api_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   let args = Args::parse();
   let api = TaskApiClient::new(&args.api_url);

   // 起動時に一覧を取得して描画する
   let mut snapshot = refetch(&api, Vec::new()).await;

   print_help();

   loop {
      let line: String = Input::new()
         .with_prompt("tasuki")
         .allow_empty(true)
         .interact_text()?;

      let command = match Command::parse(&line) {
         Ok(command) => command,
         Err(message) => {
            eprintln!("{message}");
            continue;
         }
      };

      match command {
         Command::Empty => {}
         Command::Help => print_help(),
         Command::Refresh => snapshot = refetch(&api, snapshot).await,
         Command::Add(title) => match api.create_task(&title).await {
            Ok(_) => snapshot = refetch(&api, snapshot).await,
            Err(e) => report_error("タスクを作成できませんでした", &e),
         },
         Command::Toggle(id) => {
            // 現在のスナップショットから反転後の完了状態を決める
            let Some(task) = snapshot.iter().find(|t| t.id == id) else {
               eprintln!("ID {id} のタスクは一覧にありません（refresh で再取得できます）");
               continue;
            };
            match api.set_completion(id, !task.completed).await {
               Ok(_) => snapshot = refetch(&api, snapshot).await,
               Err(e) => report_error("タスクを更新できませんでした", &e),
            }
         }
         Command::Remove(id) => {
            let confirmed = Confirm::new()
               .with_prompt(format!("タスク {id} を削除しますか?"))
               .default(false)
               .interact()?;
            if !confirmed {
               continue;
            }
            match api.delete_task(id).await {
               Ok(()) => snapshot = refetch(&api, snapshot).await,
               Err(e) => report_error("タスクを削除できませんでした", &e),
            }
         }
         Command::Quit => break,
      }
   }

   Ok(())
}

/// 一覧を再取得して描画する
///
/// 取得に失敗した場合はエラーを表示し、直前のスナップショットを
/// そのまま返す。
async fn refetch(api: &TaskApiClient, previous: Vec<TaskDto>) -> Vec<TaskDto> {
   match api.list_tasks().await {
      Ok(tasks) => {
         print!("{}", render_task_list(&tasks));
         tasks
      }
      Err(e) => {
         report_error("タスクを読み込めませんでした", &e);
         previous
      }
   }
}

/// ユーザー向けの汎用メッセージとエラー詳細を表示する
fn report_error(message: &str, err: &ClientError) {
   eprintln!("{message}: {err}");
}

fn print_help() {
   println!("コマンド: add <タイトル> | toggle <ID> | rm <ID> | refresh | quit");
}
