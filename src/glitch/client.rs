//! Glitch クライアント

use super::{ImportRequest, ImportResponse, ImportService};
use crate::config::HttpConfig;
use crate::error::Result;
use hyper::ext::ReasonPhrase;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// reqwest ベースの Glitch クライアント
pub struct GlitchClient {
    http: Client,
    api_url: Url,
}

impl GlitchClient {
    /// 新しいGlitchClientを作成
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_client()?,
            api_url: Url::parse(&config.api_url)?,
        })
    }

    async fn execute(&self, request: &ImportRequest) -> Result<ImportResponse> {
        let response = self
            .http
            .post(request.url.clone())
            .header(AUTHORIZATION, request.auth_token.as_str())
            .send()
            .await?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(ImportResponse::new(status, String::new()));
        }

        // 標準と異なる理由句は hyper がレスポンス拡張に保存している
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|r| String::from_utf8_lossy(r.as_bytes()).into_owned());

        let body = response.text().await?;
        let response = ImportResponse::new(status, body);
        Ok(match reason {
            Some(reason) => response.with_status_text(reason),
            None => response,
        })
    }
}

impl ImportService for GlitchClient {
    fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn send<'a>(
        &'a self,
        request: &'a ImportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ImportResponse>> + Send + 'a>> {
        Box::pin(self.execute(request))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
