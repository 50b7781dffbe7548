//! アクション入力
//!
//! CI ホストは入力を `INPUT_<NAME>` 環境変数として渡す。
//! 値は前後の空白を除去して扱い、空の場合は未指定とみなす。

use crate::env::EnvVar;
use crate::error::{Result, SyncError};
use std::collections::BTreeMap;

const INPUT_PREFIX: &str = "INPUT_";

/// 名前付き入力の集合
///
/// 認証トークンを含むため、`Debug` では値を出力しない。
#[derive(Clone, Default)]
pub struct Inputs {
    values: BTreeMap<String, String>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// プロセス環境から `INPUT_` で始まる変数を読み込む
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// 任意の (変数名, 値) 列から読み込む
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(INPUT_PREFIX))
            .collect();
        Self { values }
    }

    /// 入力名を指定して値を設定（既存の値は上書き）
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(EnvVar::input_key(name), value.into());
    }

    /// 任意入力を取得（未指定・空はNone）
    pub fn get(&self, name: &str) -> Option<String> {
        self.values
            .get(&EnvVar::input_key(name))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 必須入力を取得
    pub fn get_required(&self, name: &str) -> Result<String> {
        self.get(name)
            .ok_or_else(|| SyncError::MissingInput(name.to_string()))
    }
}

impl std::fmt::Debug for Inputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inputs")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
