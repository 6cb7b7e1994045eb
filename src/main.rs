use fake_auth::frameworks::server;

#[tokio::main]
async fn main() {
    // Delegate to the framework entry point; failures are logged there.
    if let Err(error) = server::run_with_config().await {
        tracing::error!(%error, "fake auth service exited");
    }
}
