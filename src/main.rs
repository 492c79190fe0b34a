use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use insight::conf::Config;
use insight::core::{CliArgs, setup_logging};
use insight::interface::QueryInterface;
use insight::query::{HttpBackend, Submission};
use insight::reference::{COLUMN_MAPPINGS, reference_table};
use insight::render::{LOADING, StateView};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "Insight started.");

    if args.reference {
        print!("{}", reference_table(COLUMN_MAPPINGS));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::from_env()?,
    };
    if let Some(endpoint) = args.endpoint {
        config.client.endpoint = endpoint;
    }

    let backend = HttpBackend::new(&config.client)?;
    info!("Using query service at {}", backend.url());
    let mut ui = QueryInterface::new(backend);

    match args.query {
        Some(text) => one_shot(&mut ui, text).await,
        None => interactive(&mut ui).await,
    }
}

async fn one_shot(ui: &mut QueryInterface<HttpBackend>, text: String) -> anyhow::Result<ExitCode> {
    ui.set_query(text);
    if ui.submit().await == Submission::Skipped {
        anyhow::bail!("query text is empty");
    }
    let screen = ui.screen();
    print!("{screen}");
    match screen.response {
        StateView::Failure(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

async fn interactive(ui: &mut QueryInterface<HttpBackend>) -> anyhow::Result<ExitCode> {
    println!("Enter your query (:reference for field names, :quit to exit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => continue,
            ":quit" => break,
            ":reference" => {
                print!("{}", reference_table(COLUMN_MAPPINGS));
                continue;
            }
            _ => {}
        }

        ui.set_query(line);
        eprintln!("{LOADING}");
        ui.submit().await;
        print!("{}", ui.screen().response);
    }
    Ok(ExitCode::SUCCESS)
}
