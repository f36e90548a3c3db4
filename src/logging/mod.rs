use crate::logging::consts::DEFAULT_LOG_DIRECTIVE;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;

/// `RUST_LOG` overrides the default directive.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            DEFAULT_LOG_DIRECTIVE
                .parse()
                .expect("Invalid default log directive."),
        )
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_timer(UtcTime::rfc_3339()))
        .init();
}
