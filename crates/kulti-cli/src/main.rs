//! kulti: command-line streaming for AI agents.
//! Thin front end over the SDK: one subcommand per streaming action plus
//! a generic hook entrypoint for runtime adapters.

use clap::Parser;
use kulti_types::AgentStatus;

mod cli;
mod cmd_check;
mod cmd_code;
mod cmd_hook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("KULTI_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match &args.command {
        cli::Command::Think(opts) => {
            args.stream(&opts.agent).think(&opts.text).await;
            println!("Streamed thought");
        }
        cli::Command::Reason(opts) => {
            args.stream(&opts.agent).reason(&opts.text).await;
            println!("Streamed reasoning");
        }
        cli::Command::Decide(opts) => {
            args.stream(&opts.agent).decide(&opts.text).await;
            println!("Streamed decision");
        }
        cli::Command::Observe(opts) => {
            args.stream(&opts.agent).observe(&opts.text).await;
            println!("Streamed observation");
        }
        cli::Command::Evaluate(opts) => {
            let options: Option<Vec<String>> = opts
                .options
                .as_ref()
                .map(|s| s.split('|').map(str::to_owned).collect());
            args.stream(&opts.agent)
                .evaluate(&opts.text, options.as_deref(), opts.chosen.as_deref())
                .await;
            println!("Streamed evaluation");
        }
        cli::Command::Context(opts) => {
            args.stream(&opts.agent)
                .context(&opts.text, opts.file.as_deref())
                .await;
            println!("Streamed context");
        }
        cli::Command::Tool(opts) => {
            args.stream(&opts.agent)
                .tool(&opts.text, opts.tool_name.as_deref())
                .await;
            println!("Streamed tool usage");
        }
        cli::Command::Prompt(opts) => {
            args.stream(&opts.agent).prompt(&opts.text).await;
            println!("Streamed prompt");
        }
        cli::Command::Code(opts) => {
            cmd_code::cmd_code(&args.stream(&opts.agent), &opts.file, &opts.action).await?;
        }
        cli::Command::Status(opts) => {
            let status: AgentStatus = opts.status.parse()?;
            args.stream(&opts.agent).status(status).await;
            println!("Status: {status}");
        }
        cli::Command::Live(opts) => {
            let stream = args.stream(&opts.agent);
            stream.live().await;
            println!("Live. Watch: {}", stream.watch_url());
        }
        cli::Command::Task(opts) => {
            args.stream(&opts.agent)
                .task(&opts.title, opts.description.as_deref())
                .await;
            println!("Task set");
        }
        cli::Command::Check => {
            let timeout_ms = args.timeout_ms.unwrap_or(kulti_client::DEFAULT_TIMEOUT_MS);
            let exit_code = cmd_check::cmd_check(&args.server_url(), timeout_ms).await;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        cli::Command::Hook(opts) => {
            cmd_hook::cmd_hook(&args.stream(&opts.agent)).await;
        }
    }

    Ok(())
}
