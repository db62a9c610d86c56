//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Munsell color picker");

    let config = munsell_app::AppConfig::from_env();
    if let Err(e) = pollster::block_on(munsell_app::App::run(config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
