//! `solace doctor` — Diagnose configuration and provider health.

use solace_config::AppConfig;
use solace_retrieval::DocumentIndex;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Solace Doctor — deployment diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ok   Config loaded");
            config
        }
        Err(e) => {
            println!("  FAIL Config invalid: {e}");
            println!("\n  1 issue found. See above for details.");
            return Ok(());
        }
    };

    // Check API key
    if config.api_key.is_some() || config.provider == "ollama" {
        println!("  ok   API key configured");
    } else {
        println!("  warn No API key — set SOLACE_API_KEY or GROQ_API_KEY");
        issues += 1;
    }

    // Check document corpus
    let index = DocumentIndex::load(&config.retrieval.data_dir);
    if index.is_empty() {
        println!(
            "  warn No grounding documents in {} — replies will be ungrounded",
            config.retrieval.data_dir
        );
        issues += 1;
    } else {
        println!("  ok   {} grounding document(s) loaded", index.len());
    }

    // Check provider reachability
    let provider = solace_providers::build_from_config(&config);
    match provider.health_check().await {
        Ok(true) => println!("  ok   Provider '{}' reachable", provider.name()),
        Ok(false) => {
            println!("  FAIL Provider '{}' returned an error", provider.name());
            issues += 1;
        }
        Err(e) => {
            println!("  FAIL Provider '{}' unreachable: {e}", provider.name());
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
