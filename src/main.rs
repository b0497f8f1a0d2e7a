use anyhow::Result;
use tarefas::config::Config;
use tarefas::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;
    logger.log(format!("Starting Tarefas {}", env!("CARGO_PKG_VERSION")));

    // Run the TUI application
    tarefas::ui::run_app(&config, logger).await?;

    Ok(())
}
