use cafe_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv + logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(environment = %config.environment, "Cafe server starting...");

    // 2. open database, apply migrations
    let state = ServerState::initialize(&config).await?;

    // 3. serve until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
