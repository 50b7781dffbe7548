//! ワークフローコマンド
//!
//! フォーマット:
//!
//! ```text
//! ::debug::This is the debug message
//! ::error::This is the error message
//! ```
//!
//! info は接頭辞なしでそのまま出力する。

use std::io::{self, Stdout, Write};

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// ワークフローコマンド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Debug,
    Error,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Debug => "debug",
            CommandKind::Error => "error",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// コマンドメッセージのエスケープ
///
/// `%` を最初に置換しないと `%0A` などが二重にエスケープされる。
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::<kind>::<message>` 形式の1行を生成（改行なし）
pub fn format_command(kind: CommandKind, message: &str) -> String {
    format!("::{}::{}", kind, escape_data(message))
}

/// ワークフローログ
///
/// 書き込み先を保持し、error を出力したかどうかを記録する。
pub struct WorkflowLog<W: Write> {
    writer: W,
    failed: bool,
}

impl WorkflowLog<Stdout> {
    /// 標準出力に書き込むログを作成
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WorkflowLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// デバッグメッセージを出力
    pub fn debug(&mut self, message: &str) {
        let line = format_command(CommandKind::Debug, message);
        self.write_line(&line);
    }

    /// 情報メッセージをそのまま出力
    pub fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    /// error を出力し、実行を失敗扱いにする
    pub fn set_failed(&mut self, message: &str) {
        self.failed = true;
        let line = format_command(CommandKind::Error, message);
        self.write_line(&line);
    }

    /// error が出力されたかどうか
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// 終了コード（失敗時 1）
    pub fn exit_code(&self) -> i32 {
        if self.failed {
            1
        } else {
            0
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        // 出力先が閉じている場合は報告手段がないので捨てる
        let _ = write!(self.writer, "{}{}", line, EOL).and_then(|_| self.writer.flush());
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
