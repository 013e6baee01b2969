use log::{error, info, LevelFilter};

use stats_service::{Config, Server};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
        futures::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

#[tokio::main]
async fn main() {
    init_logger();

    let result = match Config::from_env().and_then(Server::bind) {
        Ok(server) => server.run_until(shutdown_signal()).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}
