use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;
mod config;

use cli::Cli;
use config::Config;
use promptr::provider::{
    AnthropicProvider, GeminiProvider, MockProvider, OpenAiProvider, ProviderGateway,
    ProviderSettings,
};
use promptr::server;
use promptr::service::PromptService;
use promptr::template::TemplateStore;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("promptr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn settings(provider: &config::ProviderConfig) -> ProviderSettings {
    ProviderSettings::new(provider.model.as_str(), provider.max_tokens, provider.temperature)
}

fn build_gateway(config: &Config, with_mock: bool) -> ProviderGateway {
    let providers = &config.providers;
    let mut gateway = ProviderGateway::new();
    gateway.register(Arc::new(OpenAiProvider::with_settings(
        providers.openai.api_key(),
        settings(&providers.openai),
    )));
    gateway.register(Arc::new(AnthropicProvider::with_settings(
        providers.anthropic.api_key(),
        settings(&providers.anthropic),
    )));
    gateway.register(Arc::new(GeminiProvider::with_settings(
        providers.google.api_key(),
        settings(&providers.google),
    )));
    if with_mock {
        gateway.register(Arc::new(MockProvider::new()));
    }
    gateway
}

async fn run_server(cli: &Cli, config: &Config) -> Result<()> {
    let templates_dir = cli
        .templates_dir
        .clone()
        .unwrap_or_else(|| config.templates.dir.clone());
    let bind = cli.bind.clone().unwrap_or_else(|| config.server.bind.clone());

    // Startup-fatal by design: a malformed template or missing directory
    // must not leave a partially working service
    let store = TemplateStore::load(&templates_dir).context(format!(
        "Failed to load templates from {}",
        templates_dir.display()
    ))?;

    let gateway = build_gateway(config, cli.mock || config.providers.enable_mock);
    let providers = gateway.provider_ids().join(", ");
    let service = Arc::new(PromptService::new(store, gateway));

    println!(
        "{} {} templates, providers: {}",
        "Loaded".green(),
        service.store().len(),
        providers
    );
    println!("{} http://{}", "Serving on".cyan(), bind);
    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    info!(
        "Starting server on {} with {} templates",
        bind,
        service.store().len()
    );
    server::serve(service, &bind)
        .await
        .context("Server error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    run_server(&cli, &config).await
}
