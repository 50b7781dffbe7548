use clap::Parser;

use crate::actions::Inputs;
use crate::config::{HttpConfig, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[command(name = "glitch-sync", version)]
#[command(
    about = "Import the current GitHub repository into a Glitch project",
    long_about = "Import the current GitHub repository into a Glitch project.\n\n\
        Inputs are read from INPUT_<NAME> environment variables (INPUT_PROJECT-ID, \
        INPUT_AUTH-TOKEN, INPUT_PATH, INPUT_REPO) as provided by GitHub Actions. \
        Flags override the environment. The repository defaults to GITHUB_REPOSITORY."
)]
pub struct Cli {
    /// Glitch project ID
    #[arg(long)]
    pub project_id: Option<String>,

    /// Glitch authorization token
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Sub-directory of the repository to import
    #[arg(long)]
    pub path: Option<String>,

    /// Repository to import (owner/name)
    #[arg(long)]
    pub repo: Option<String>,

    /// Glitch API base URL
    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Cli {
    /// 環境変数の入力にフラグを上書きする
    pub fn apply(&self, mut inputs: Inputs) -> Inputs {
        let overrides = [
            ("project-id", &self.project_id),
            ("auth-token", &self.auth_token),
            ("path", &self.path),
            ("repo", &self.repo),
        ];
        for (name, value) in overrides {
            if let Some(value) = value {
                inputs.set(name, value.as_str());
            }
        }
        inputs
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::default().with_api_url(self.api_url.as_str())
    }
}
