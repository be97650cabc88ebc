//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::{config, Level};

/// Keeps the non-blocking writers alive; logs stop being flushed once it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A global subscriber was already installed in this process.
    #[error("Failed to install the global tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

///
/// Install the global tracing subscriber.
/// Expects config and list of names of crates to watch.
///
/// Events of the watched crates pass at the configured console level, everything else
/// at `WARN`. `RUST_LOG` narrows the result further.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: Vec<Str>,
) -> Result<TelemetryGuard, SetupError> {
    let mut guards = Vec::new();

    let subscriber = tracing_subscriber::registry().with(
        EnvFilter::builder()
            .with_default_directive(Level::TRACE.into())
            .from_env_lossy(),
    );

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let level = conf.console.level.into_level();
        let mut console_filter = filter::Targets::new().with_default(Level::WARN);
        for acrate in crates_to_watch {
            console_filter = console_filter.with_target(acrate.as_ref(), level);
        }

        match conf.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .with_span_events(fmt::format::FmtSpan::ACTIVE)
                    .pretty()
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
        }
    } else {
        subscriber.try_init()?;
    };

    tracing::debug!(service = service_name, "logger initialized");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}
