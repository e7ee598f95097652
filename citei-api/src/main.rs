use citei_api::settings::ServerSettings;
use citei_core::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    citei_core::init_tracing();

    let config = CiteiConfig::load("dev")?;
    let server: ServerSettings = config.section()?;
    let state = citei_api::bootstrap(&config).await?;

    citei_api::app(state)
        .with(Tracing)
        .serve(&server.addr())
        .await
}
