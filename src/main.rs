use astra::Server;
use property_explorer::config::AppConfig;
use property_explorer::db::connection::{init_db, Database};
use property_explorer::router::handle;
use property_explorer::templates;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_explorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Read configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Create the database handle and apply the schema
    let db = Database::new(&config.database_path);
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing db handle into closure
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
