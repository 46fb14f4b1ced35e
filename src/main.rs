use anyhow::Result;
use clap::Parser;

use release_tagger::config;
use release_tagger::domain::TriggerCause;
use release_tagger::host::{GitLabClient, HostClient};
use release_tagger::orchestrator::{ReleaseOrchestrator, RunOutcome, RunParams};
use release_tagger::sink::StdoutSink;
use release_tagger::ui;

/// Environment variable carrying the host API token.
const HOST_TOKEN_ENV: &str = "RELEASE_HOST_TOKEN";

#[derive(clap::Parser)]
#[command(
    name = "release-tagger",
    about = "Create the next release tag on a repository host by incrementing the latest matching tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Host base URL, overrides the configured one")]
    host_url: Option<String>,

    #[arg(short, long, help = "Explicit project id, overrides the configured one")]
    project_id: Option<u64>,

    #[arg(long, help = "Tag schema pattern, overrides the configured one")]
    tag_schema: Option<String>,

    #[arg(long, help = "Segment separator, overrides the configured one")]
    separator: Option<String>,

    #[arg(long = "ref", help = "Target ref for the new tag")]
    target_ref: Option<String>,

    #[arg(long, help = "Changelog text for the release record")]
    changelog: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-tagger {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI arguments win over the configuration file
    let host_url = args.host_url.or(config.host.url);
    let explicit_project = args.project_id.or(config.release.project_id);
    let tag_schema = args
        .tag_schema
        .unwrap_or_else(|| config.release.tag_schema.clone());
    let separator = args
        .separator
        .unwrap_or_else(|| config.release.separator.clone());
    let target_ref = args
        .target_ref
        .unwrap_or_else(|| config.release.target_ref.clone());

    let changelog = match args.changelog {
        Some(text) => text,
        None => match config.release.changelog_text() {
            Ok(text) => text,
            Err(e) => {
                ui::display_error(&format!("Cannot read changelog: {}", e));
                std::process::exit(1);
            }
        },
    };

    // Present only when the run was started by an inbound webhook event
    let cause = TriggerCause::from_env();

    let token = std::env::var(HOST_TOKEN_ENV).ok();
    let client = host_url.map(|url| GitLabClient::new(url, token));
    let client_ref = client.as_ref().map(|c| c as &dyn HostClient);

    let params = RunParams {
        explicit_project,
        cause,
        target_ref,
        tag_schema,
        separator,
        changelog,
    };

    let sink = StdoutSink;
    let orchestrator = ReleaseOrchestrator::new(client_ref, Some(&sink));

    match orchestrator.run(&params) {
        RunOutcome::Released { tag, .. } => {
            ui::display_success(&format!("Released {}", tag));
            Ok(())
        }
        RunOutcome::NoMatchingTag { schema } => {
            // Normal for a first release; the pipeline decides what it means
            ui::display_status(&format!("No tag matched schema '{}'", schema));
            Ok(())
        }
        RunOutcome::Failed(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
