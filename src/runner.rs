//! 同期ランナー
//!
//! 1回の実行で行うのは入力検証、リクエスト送信（最大1回）、結果の分類だけ。
//! 失敗は呼び出し元に伝播せず、`ImportOutcome` として返し `report` でログに変換する。

use crate::actions::{ActionContext, Inputs, WorkflowLog};
use crate::config::RunConfig;
use crate::error::{Result, SyncError};
use crate::glitch::{ImportRequest, ImportService};
use std::io::Write;

pub const SYNCING_MESSAGE: &str = "Syncing repo to Glitch 📡";
pub const SUCCESS_MESSAGE: &str = "Glitch project successfully updated! 🎉";

/// Glitch が返したエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    /// 表示用メッセージ（`stderr` またはステータステキスト）
    pub message: String,
}

/// 実行結果
#[derive(Debug)]
pub enum ImportOutcome {
    Success,
    /// リクエスト送信前の入力検証エラー
    Validation(SyncError),
    /// 2xx 以外のレスポンス
    Remote(RemoteFailure),
    /// 通信エラーなど想定外のエラー
    Unexpected(SyncError),
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Success)
    }
}

/// インポートを1回試行して結果を返す
pub async fn run<S, W>(
    inputs: &Inputs,
    ctx: &ActionContext,
    service: &S,
    log: &mut WorkflowLog<W>,
) -> ImportOutcome
where
    S: ImportService + ?Sized,
    W: Write,
{
    let config = match RunConfig::resolve(inputs, ctx) {
        Ok(config) => config,
        Err(err) => return ImportOutcome::Validation(err),
    };

    match sync(&config, service, log).await {
        Ok(outcome) => outcome,
        Err(err) => ImportOutcome::Unexpected(err),
    }
}

async fn sync<S, W>(
    config: &RunConfig,
    service: &S,
    log: &mut WorkflowLog<W>,
) -> Result<ImportOutcome>
where
    S: ImportService + ?Sized,
    W: Write,
{
    let request = ImportRequest::new(service.api_url(), config)?;
    log.debug(&format!("full URL: {}", request.url));
    log.info(SYNCING_MESSAGE);

    let response = service.send(&request).await?;
    if response.is_success() {
        return Ok(ImportOutcome::Success);
    }

    log.debug(&format!(
        "Raw {} error response from Glitch: {}",
        response.status, response.body
    ));

    let message = response.failure_message();
    Ok(ImportOutcome::Remote(RemoteFailure {
        status: response.status,
        status_text: response.status_text,
        body: response.body,
        message,
    }))
}

/// 結果を終端のログ行1行に変換する
pub fn report<W: Write>(outcome: &ImportOutcome, log: &mut WorkflowLog<W>) {
    match outcome {
        ImportOutcome::Success => log.info(SUCCESS_MESSAGE),
        ImportOutcome::Validation(err) => {
            log.set_failed(&format!("Error running workflow: {}", err));
        }
        ImportOutcome::Remote(failure) => {
            log.set_failed(&format!("Error syncing to Glitch: {}", failure.message));
        }
        ImportOutcome::Unexpected(err) => {
            log.debug(&format!("Raw error: {:?}", err));
            log.set_failed(&format!("Error running workflow: {}", err));
        }
    }
}

/// `run` と `report` をまとめて実行
pub async fn run_and_report<S, W>(
    inputs: &Inputs,
    ctx: &ActionContext,
    service: &S,
    log: &mut WorkflowLog<W>,
) -> ImportOutcome
where
    S: ImportService + ?Sized,
    W: Write,
{
    let outcome = run(inputs, ctx, service, log).await;
    report(&outcome, log);
    outcome
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
