use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_directive.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
