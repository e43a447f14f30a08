use log::LevelFilter;

/// Parses a level name, falling back to `Info` for anything unrecognised.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Reads `RUST_LOG` (a `.env` file is honoured), defaulting to `info`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    dotenv::dotenv().ok();
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Logger already initialised: {}", e);
    }
}

/// The browser has no environment, so the level is fixed at build time,
/// e.g. `PORTFOLIO_LOG=debug dx serve`.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    let level = parse_log_level(option_env!("PORTFOLIO_LOG")).to_level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Failed to initialise console logger: {}", e).into());
    }
}
