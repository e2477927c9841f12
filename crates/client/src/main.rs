mod api;
mod cli;
mod form;
mod render;

use crate::api::HttpAnalyzer;
use crate::cli::Args;
use crate::form::AnalyzerForm;
use crate::render::{render_error, render_result, render_warning};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing();

    let analyzer = HttpAnalyzer::new(&args.server)?;
    tracing::debug!(url = %analyzer.url(), "sentiment client ready");
    let mut form = AnalyzerForm::default();

    if let Some(text) = args.text {
        form.set_text(text);
        if !form.can_submit() {
            eprintln!("{}", render_error(protocol::TEXT_REQUIRED_MESSAGE));
            return Ok(ExitCode::FAILURE);
        }
        let ok = run_submission(&mut form, &analyzer).await;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        form.set_text(line);
        if !form.can_submit() {
            continue;
        }
        run_submission(&mut form, &analyzer).await;
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_submission(form: &mut AnalyzerForm, analyzer: &HttpAnalyzer) -> bool {
    if form.will_truncate() {
        println!("{}", render_warning(&form.counter()));
    }
    if !form.submit(analyzer).await {
        return false;
    }
    if let Some(message) = form.error() {
        eprintln!("{}", render_error(message));
        return false;
    }
    if let Some(sentiment) = form.sentiment() {
        println!("{}", render_result(sentiment));
    }
    true
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
