use tracing_subscriber::EnvFilter;
use vplan::commands::Cli;
use vplan::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Debug mode routes the msg_* macros to tracing, which needs a
    // subscriber to land anywhere. RUST_LOG still controls the filter;
    // VPLAN_DEBUG alone shows everything down to debug level.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }
    Cli::menu().await
}
