/**
 * Mock Auth Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves the
 * mock authentication API.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Tracing initialized with RUST_LOG={}", env_filter);

    let config = mock_auth::backend::server::config::load_config()?;
    let port = config.port;

    let app = mock_auth::backend::server::create_app(config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mock Auth API listening on http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin mock-auth-server --features ssr");
    std::process::exit(1);
}
