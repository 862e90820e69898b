use tiny_redirect::lifecycle;
use tiny_redirect::observability::init_logging;

#[tokio::main]
async fn main() {
    init_logging();

    tracing::info!("tiny-redirect v{} starting", env!("CARGO_PKG_VERSION"));

    match lifecycle::start_from_env().await {
        Err(e) => {
            tracing::error!(error = %e, "tiny-redirect terminated");
            std::process::exit(1);
        }
        Ok(never) => match never {},
    }
}
