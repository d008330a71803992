use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deployment_dispatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = deployment_dispatch::run::run().await {
        // The `::error::` workflow command marks the step failed in the UI.
        println!("::error::{err}");
        tracing::error!(error = %err, "run failed");
        std::process::exit(1);
    }
}
