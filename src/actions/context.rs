//! 実行コンテキスト
//!
//! CI ホストが提供する環境情報。プロセス環境を直接読む代わりに明示的に渡す。

use crate::env::EnvVar;

/// 現在のリポジトリ (`owner/name`) を示す環境変数
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionContext {
    pub repository: Option<String>,
}

impl ActionContext {
    /// プロセス環境から作成
    pub fn from_env() -> Self {
        Self {
            repository: EnvVar::get(REPOSITORY_VAR),
        }
    }

    pub fn with_repository(repository: impl Into<String>) -> Self {
        Self {
            repository: Some(repository.into()),
        }
    }

    /// 空文字列は未設定として扱う
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref().filter(|r| !r.is_empty())
    }
}
