//! Interactive educational resource finder.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use edufind_common::{Config, ResourceType, SearchQuery};
use edufind_scout::ResourcePipeline;
use serper_client::SerperClient;

mod display;

#[derive(Parser)]
#[command(name = "edufind")]
#[command(about = "Find and rank educational resources for a topic")]
#[command(version)]
struct Cli {
    /// Course or topic name (prompted for when omitted)
    topic: Option<String>,

    /// Only include these resource types (repeatable)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    types: Vec<ResourceType>,

    /// Skip the resource-type filter prompts
    #[arg(short, long)]
    yes: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "\n{} {:#}",
                style("Error occurred while searching:").red().bold(),
                e
            );
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    if config.serper_api_key.is_none() {
        println!("{}", display::config_error_panel());
        return Ok(ExitCode::from(1));
    }

    let theme = ColorfulTheme::default();

    println!(
        "\n{}",
        style("Welcome to the Educational Resource Finder!").cyan().bold()
    );

    let topic = match cli.topic {
        Some(topic) => topic,
        None => Input::with_theme(&theme)
            .with_prompt("Enter the course or topic name")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Topic must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let types = if !cli.types.is_empty() || cli.yes {
        cli.types
    } else {
        prompt_types(&theme)?
    };

    let mut query = SearchQuery::new(topic);
    if !types.is_empty() {
        query = query.with_types(types);
    }

    let mut searcher = SerperClient::new(config.serper_api_key.clone(), config.search_timeout)?;
    if let Some(base_url) = &config.serper_base_url {
        searcher = searcher.with_base_url(base_url);
    }
    let pipeline =
        ResourcePipeline::new(Arc::new(searcher)).with_page_size(config.search_page_size);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let spinner = create_spinner("Searching for educational resources...");
    let result = runtime.block_on(pipeline.find_resources(&query));
    spinner.finish_and_clear();

    let resources = result?;
    display::print_results(&query.topic, &resources);

    Ok(ExitCode::SUCCESS)
}

/// Ask whether to filter, then confirm each resource type in turn.
fn prompt_types(theme: &ColorfulTheme) -> Result<Vec<ResourceType>> {
    let filter = Confirm::with_theme(theme)
        .with_prompt("Do you want to filter by resource type?")
        .default(false)
        .interact()?;
    if !filter {
        return Ok(Vec::new());
    }

    println!("\n{}", style("Available resource types:").bold());
    let mut selected = Vec::new();
    for t in ResourceType::ALL {
        let include = Confirm::with_theme(theme)
            .with_prompt(format!("Include {}?", style(t).cyan()))
            .default(true)
            .interact()?;
        if include {
            selected.push(t);
        }
    }
    Ok(selected)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
