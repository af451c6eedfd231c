//! # コマンド解析
//!
//! プロンプトに入力された 1 行をコマンドに解析する。

/// プロンプトで受け付けるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
   /// タスクを追加する（タイトルは空白除去済み・非空）
   Add(String),
   /// 完了状態を反転する
   Toggle(i64),
   /// タスクを削除する
   Remove(i64),
   /// 一覧を再取得する
   Refresh,
   /// コマンド一覧を表示する
   Help,
   /// 終了する
   Quit,
   /// 空行（何もしない）
   Empty,
}

impl Command {
   /// 入力行を解析する
   ///
   /// 失敗時はユーザーに表示するメッセージを返す。
   pub fn parse(line: &str) -> Result<Self, String> {
      let line = line.trim();
      if line.is_empty() {
         return Ok(Command::Empty);
      }

      let (name, rest) = match line.split_once(char::is_whitespace) {
         Some((name, rest)) => (name, rest.trim()),
         None => (line, ""),
      };

      match name {
         "add" => {
            if rest.is_empty() {
               Err("タイトルを入力してください".to_string())
            } else {
               Ok(Command::Add(rest.to_string()))
            }
         }
         "toggle" => parse_id(rest).map(Command::Toggle),
         "rm" => parse_id(rest).map(Command::Remove),
         "refresh" => Ok(Command::Refresh),
         "help" => Ok(Command::Help),
         "quit" | "exit" => Ok(Command::Quit),
         other => Err(format!("不明なコマンドです: {other}（help で一覧を表示）")),
      }
   }
}

fn parse_id(rest: &str) -> Result<i64, String> {
   rest.parse()
      .map_err(|_| "タスク ID を数値で指定してください".to_string())
}
