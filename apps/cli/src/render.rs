//! # タスク一覧の描画
//!
//! 取得したスナップショットを端末向けの文字列に変換する。
//! 描画のたびに一覧全体を作り直す（差分更新は行わない）。

use crate::client::TaskDto;

/// 一覧が空のときに表示するプレースホルダ
const EMPTY_STATE: &str = "（タスクはありません）";

/// タスク一覧を描画する
///
/// 空なら空状態の 1 行のみ、それ以外はタスクごとに 1 行を出力する。
/// 各行はチェックボックス（`[x]` / `[ ]`）、id、タイトルからなる。
pub fn render_task_list(tasks: &[TaskDto]) -> String {
   if tasks.is_empty() {
      return format!("{EMPTY_STATE}\n");
   }

   let mut out = String::new();
   for task in tasks {
      let mark = if task.completed { 'x' } else { ' ' };
      out.push_str(&format!(
         "[{}] {:>4}  {}\n",
         mark,
         task.id,
         sanitize_title(&task.title)
      ));
   }
   out
}

/// タイトルをプレーンテキストとして無害化する
///
/// 制御文字（ANSI エスケープ等）を置換し、タイトル由来の
/// 端末制御を防ぐ。それ以外の文字はそのまま出力する。
fn sanitize_title(title: &str) -> String {
   title
      .chars()
      .map(|c| if c.is_control() { '�' } else { c })
      .collect()
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn task(id: i64, title: &str, completed: bool) -> TaskDto {
      TaskDto {
         id,
         title: title.to_string(),
         completed,
         created_at: "2026-08-05T12:00:00+00:00".to_string(),
      }
   }

   #[test]
   fn test_空一覧は空状態の表示のみ() {
      let rendered = render_task_list(&[]);

      assert_eq!(rendered, "（タスクはありません）\n");
      assert!(!rendered.contains('['));
   }

   #[test]
   fn test_タスクごとに1行でチェックボックスを表示する() {
      let tasks = vec![task(2, "タスク B", true), task(1, "タスク A", false)];

      let rendered = render_task_list(&tasks);

      let lines: Vec<&str> = rendered.lines().collect();
      assert_eq!(lines.len(), 2);
      assert!(lines[0].starts_with("[x]"));
      assert!(lines[0].contains("タスク B"));
      assert!(lines[1].starts_with("[ ]"));
      assert!(lines[1].contains("タスク A"));
   }

   #[test]
   fn test_タイトルはプレーンテキストとしてそのまま表示する() {
      let tasks = vec![task(1, "<b>太字</b> & \"引用\"", false)];

      let rendered = render_task_list(&tasks);

      // マークアップとして解釈せず、そのまま出力する
      assert!(rendered.contains("<b>太字</b> & \"引用\""));
   }

   #[test]
   fn test_タイトル中の制御文字は置換される() {
      let tasks = vec![task(1, "red\u{1b}[31mtext", false)];

      let rendered = render_task_list(&tasks);

      assert!(!rendered.contains('\u{1b}'));
      assert!(rendered.contains("red�[31mtext"));
   }
}
