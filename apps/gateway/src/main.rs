use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use gateway::config::{load_env_files, AppConfig};
use gateway::middleware::cors::cors_middleware;
use gateway::middleware::request_trace::RequestTrace;
use gateway::middleware::structured_logger::StructuredLogger;
use gateway::routes;
use gateway::state::build_state;
use gateway::upstream::{FamilyRecords, GasClient};
use tracing::{info, warn};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Variables already in the process environment win over env files
    let runtime = load_env_files();
    telemetry::init_tracing(runtime);

    let config = match AppConfig::from_env(runtime) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let gas = match GasClient::new(&config.upstream) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Failed to build upstream client: {e}");
            std::process::exit(1);
        }
    };

    match gas.ping().await {
        Ok(()) => info!("upstream family record service reachable"),
        Err(e) => warn!(error = %e, "upstream family record service not reachable, continuing"),
    }

    let app_state = build_state()
        .with_runtime(runtime)
        .with_family_records(gas)
        .build();

    info!(
        host = %config.host,
        port = config.port,
        environment = runtime.as_str(),
        "starting gateway"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
