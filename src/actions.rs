//! CI ホストとの境界
//!
//! ワークフローコマンド形式のログ出力、名前付き入力、実行コンテキストを扱う。
//! このシステム固有のロジックは持たない。

pub mod command;
pub mod context;
pub mod input;

pub use command::{escape_data, CommandKind, WorkflowLog};
pub use context::ActionContext;
pub use input::Inputs;
