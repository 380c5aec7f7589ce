use rh_server::utils::logger;
use rh_server::{AppState, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    logger::init_logger_with_file(config.log_dir.as_deref());

    tracing::info!("Servidor RH iniciando...");

    // 3. Explicit initialization phase: the persistence gateway must be up
    //    before any request is accepted
    let state = AppState::initialize(&config).await?;

    // 4. HTTP server (runs until ctrl_c)
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
