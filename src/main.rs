use std::time::Duration;

use bday_dispatch::utils::{logger, validation::Validate};
use bday_dispatch::{
    CliConfig, CsvContactSource, DispatchEngine, SendWindow, TwilioNotifier, WallClock,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Allow a .env file to supply the provider credentials
    let _ = dotenvy::dotenv();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bday-dispatch");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = CsvContactSource::new(config.contacts_file.clone());
    let notifier = TwilioNotifier::new(
        config.api_base.clone(),
        config.account_sid.clone(),
        config.auth_token.clone(),
        config.from_number.clone(),
    );
    let window = SendWindow {
        hour: config.send_hour,
        minute: config.send_minute,
    };

    let engine = DispatchEngine::new(
        source,
        notifier,
        WallClock,
        window,
        Duration::from_secs(config.poll_interval_secs),
    );

    let summary = engine.run().await?;
    println!(
        "Dispatch complete: {} sent, {} skipped",
        summary.sent, summary.skipped
    );

    Ok(())
}
