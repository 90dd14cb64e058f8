//! `solace serve` — Start the HTTP API server.

use solace_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    if config.api_key.is_none() && config.provider != "ollama" {
        eprintln!();
        eprintln!("  WARNING: no API key configured — model calls will fail.");
        eprintln!("  Set SOLACE_API_KEY (or GROQ_API_KEY / OPENAI_API_KEY),");
        eprintln!(
            "  or add api_key to {}",
            AppConfig::config_dir().join("config.toml").display()
        );
        eprintln!();
    }

    println!("Solace gateway");
    println!("  Listening:  {}:{}", config.gateway.host, config.gateway.port);
    println!("  Provider:   {} ({})", config.provider, config.model);
    println!("  Documents:  {}", config.retrieval.data_dir);

    solace_gateway::start(config).await?;

    Ok(())
}
