//! Glitch インポートAPI
//!
//! `POST {api}/project/githubImport?projectId=..&repo=..[&path=..]` を
//! `authorization` ヘッダー付きで送信する。リクエストボディはなし。

pub mod client;

pub use client::GlitchClient;

use crate::config::RunConfig;
use crate::error::Result;
use crate::token::AuthToken;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use url::Url;

const IMPORT_PATH: &str = "project/githubImport";

/// インポートリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// クエリ付きの完全なURL（認証情報は含まない）
    pub url: Url,
    pub auth_token: AuthToken,
}

impl ImportRequest {
    /// 実行設定からリクエストを構築
    ///
    /// クエリの順序は `projectId`, `repo`, `path`（指定時のみ）で固定。
    /// ベースURLにパスがある場合はその配下に連結する。
    pub fn new(api_url: &Url, config: &RunConfig) -> Result<Self> {
        let mut base = api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(IMPORT_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("projectId", &config.project_id);
            query.append_pair("repo", &config.repo);
            if let Some(path) = &config.path {
                query.append_pair("path", path);
            }
        }

        Ok(Self {
            url,
            auth_token: config.auth_token.clone(),
        })
    }
}

/// インポートAPIのレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResponse {
    pub status: u16,
    pub status_text: String,
    /// 失敗時のみ読み込んだ生のボディ
    pub body: String,
}

impl ImportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text(status),
            body: body.into(),
        }
    }

    /// サーバーが返した理由句で置き換える
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 失敗時に表示するメッセージ
    pub fn failure_message(&self) -> String {
        failure_message(&self.status_text, &self.body)
    }
}

/// インポートAPIクライアント trait
pub trait ImportService: Send + Sync {
    /// APIベースURL
    fn api_url(&self) -> &Url;

    /// リクエストを1回だけ送信する
    fn send<'a>(
        &'a self,
        request: &'a ImportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImportResponse>> + Send + 'a>>;
}

/// ステータスコードの標準理由句（未定義のコードは数値そのもの）
pub fn status_text(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

/// Glitch がまれに返す JSON エラーボディ
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    stderr: Option<Value>,
}

/// `stderr` の値を表示用文字列にする
///
/// null、false、0、空文字列は値なしとして扱う。
fn render_stderr(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// 失敗メッセージを決定する
///
/// ボディが JSON オブジェクトで値のある `stderr` を持てばそれを使い、
/// それ以外（非JSON、オブジェクト以外、フィールドなし）はステータステキストを使う。
pub fn failure_message(status_text: &str, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value::<ErrorBody>(v).ok())
        .and_then(|b| b.stderr)
        .and_then(render_stderr)
        .unwrap_or_else(|| status_text.to_string())
}

#[cfg(test)]
#[path = "glitch_test.rs"]
mod tests;
