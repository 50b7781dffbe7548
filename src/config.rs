//! HTTP設定と実行設定

use crate::actions::{ActionContext, Inputs};
use crate::error::{Result, SyncError};
use crate::token::AuthToken;
use reqwest::Client;
use std::time::Duration;

/// Glitch API のデフォルトベースURL
pub const DEFAULT_API_URL: &str = "https://api.glitch.com";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（None の場合はトランスポート任せ）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
    /// APIベースURL
    pub api_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("glitch-sync/", env!("CARGO_PKG_VERSION")).to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl HttpConfig {
    /// APIベースURLを差し替える
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// reqwest::Client を構築
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// 1回の実行に必要な入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub project_id: String,
    pub auth_token: AuthToken,
    /// リポジトリ内のサブディレクトリ
    pub path: Option<String>,
    /// `owner/name`
    pub repo: String,
}

impl RunConfig {
    /// 入力とコンテキストから設定を解決する
    ///
    /// 検証順序: `project-id` → `auth-token` → リポジトリ
    pub fn resolve(inputs: &Inputs, ctx: &ActionContext) -> Result<Self> {
        let project_id = inputs.get_required("project-id")?;
        let auth_token = AuthToken::new(inputs.get_required("auth-token")?);
        let path = inputs.get("path");
        let repo = inputs
            .get("repo")
            .or_else(|| ctx.repository().map(str::to_string))
            .ok_or(SyncError::RepositoryNotDetected)?;

        Ok(Self {
            project_id,
            auth_token,
            path,
            repo,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
