use clap::Parser;
use maps_info::utils::{logger, validation::Validate};
use maps_info::{CliConfig, EtlEngine, LocalStorage, MapsPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting maps-info update");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = MapsPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    tokio::select! {
        result = engine.run() => match result {
            Ok(outputs) => {
                tracing::info!("Update completed, {} collections dumped", outputs.len());
                println!("✅ Update completed successfully!");
            }
            Err(e) => {
                tracing::error!("Update failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        // Interactive interrupt is a clean exit, not a failure.
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, exiting");
        }
    }

    Ok(())
}
