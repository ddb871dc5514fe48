//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config;

/// Keeps the non-blocking writers flushing until it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// Crates outside `crates_to_watch` log at `WARN` and above unless
/// `filtering_directive` is given, in which case the directive alone decides.
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> TelemetryGuard {
    let mut guards = Vec::new();
    let subscriber = tracing_subscriber::registry();

    let init_result = if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = get_envfilter(
            conf.console.filtering_directive.as_deref(),
            tracing::Level::WARN,
            conf.console.level.into_level(),
            crates_to_watch,
        );

        match conf.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .pretty()
                    .with_writer(console_writer)
                    .with_filter(console_filter);
                subscriber.with(logging_layer).try_init()
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(console_writer)
                    .with_filter(console_filter);
                subscriber.with(logging_layer).try_init()
            }
        }
    } else {
        subscriber.try_init()
    };

    match init_result {
        Ok(()) => tracing::info!(service = service_name, "logger initialised"),
        Err(error) => tracing::warn!(%error, "global subscriber was already set"),
    }

    // Returning the WorkerGuard for logs to be printed until it is dropped
    TelemetryGuard {
        _log_guards: guards,
    }
}

fn get_envfilter<Str: AsRef<str>>(
    filtering_directive: Option<&str>,
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: impl IntoIterator<Item = Str>,
) -> EnvFilter {
    filtering_directive
        .map(|filter| {
            // Invalid directives are skipped rather than failing start-up
            EnvFilter::builder()
                .with_default_directive(default_log_level.into())
                .parse_lossy(filter)
        })
        .unwrap_or_else(|| {
            // Construct a default target filter otherwise
            let filter_directive = crates_to_filter
                .into_iter()
                .map(|crate_name| format!("{}={filter_log_level}", crate_name.as_ref()))
                .collect::<Vec<_>>()
                .join(",");

            EnvFilter::builder()
                .with_default_directive(default_log_level.into())
                .parse_lossy(filter_directive)
        })
}
