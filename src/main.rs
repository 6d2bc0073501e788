use extensions_manifest::utils::logger;
use extensions_manifest::{ManifestConfig, ManifestGenerator};

fn main() {
    logger::init_cli_logger();

    let config = match ManifestConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Config: {:?}", config);

    let generator = ManifestGenerator::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = generator.run(&mut out) {
        tracing::error!("❌ Manifest generation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
