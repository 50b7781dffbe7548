use clap::Parser;
use glitch_sync::actions::{ActionContext, Inputs, WorkflowLog};
use glitch_sync::cli::Cli;
use glitch_sync::glitch::GlitchClient;
use glitch_sync::runner::{self, ImportOutcome};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let inputs = cli.apply(Inputs::from_env());
    let ctx = ActionContext::from_env();
    let mut log = WorkflowLog::stdout();

    match GlitchClient::new(&cli.http_config()) {
        Ok(client) => {
            runner::run_and_report(&inputs, &ctx, &client, &mut log).await;
        }
        Err(err) => runner::report(&ImportOutcome::Unexpected(err), &mut log),
    }

    std::process::exit(log.exit_code());
}
