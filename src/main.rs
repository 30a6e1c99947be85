/// droplist entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use droplist::{ConfigError, DemoConfig};

    // Usage: droplist [CONFIG.json] | droplist --print-default
    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--print-default") {
        match DemoConfig::default().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize default configuration: {}", e),
        }
        return;
    }

    let config: Result<DemoConfig, ConfigError> = match arg {
        Some(path) => DemoConfig::load(std::path::Path::new(&path)),
        None => Ok(DemoConfig::load_from_default_path().unwrap_or_default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    match droplist::run(&config) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Session error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
