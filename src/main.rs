#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> smart_kisan::backend::error::BackendResult<()> {
    use log::LevelFilter;
    use smart_kisan::backend::{config::KisanConfig, start};

    if std::env::args().collect::<Vec<_>>().get(1) == Some(&"--print-config".to_string()) {
        println!("{}", doku::to_toml::<KisanConfig>());
        std::process::exit(0);
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("smart_kisan", LevelFilter::Info)
        .init();

    let config = KisanConfig::read()?;
    start(config, None, None).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // hydration entry lives in frontend/mod.rs
}
