use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate targets that a bare level such as `debug` applies to.
const TARGETS: [&str; 2] = ["graphwalk", "graphwalk_core"];

/// Helper macro for logging elapsed time at debug level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_graph");
/// // Or with additional fields:
/// trace_time!(start, "load_graph", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Build the filter directive for a level, e.g. `debug` becomes
/// `graphwalk=debug,graphwalk_core=debug`. Full directives pass through.
pub fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Environment variable read when `RUST_LOG` is unset
pub const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

/// Level implied by the CLI flags: an explicit `--log-level` wins over
/// `--verbose`, otherwise `warn`
pub fn cli_level(verbose: bool, log_level: Option<&str>) -> &str {
    match log_level {
        Some(level) => level,
        None if verbose => "debug",
        None => "warn",
    }
}

/// Filter for a run: `RUST_LOG`, then `GRAPHWALK_LOG`, then the CLI flags
fn env_filter(verbose: bool, log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(level_directive(cli_level(verbose, log_level))))
}

/// Initialize structured logging on stderr, compact or JSON lines
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
    });
    let compact_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(verbose, log_level))
        .with(json_layer)
        .with(compact_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_expands_bare_level() {
        assert_eq!(
            level_directive("debug"),
            "graphwalk=debug,graphwalk_core=debug"
        );
    }

    #[test]
    fn test_cli_level_precedence() {
        assert_eq!(cli_level(false, None), "warn");
        assert_eq!(cli_level(true, None), "debug");
        assert_eq!(cli_level(true, Some("trace")), "trace");
        assert_eq!(cli_level(false, Some("info")), "info");
    }

    #[test]
    fn test_level_directive_keeps_full_directive() {
        assert_eq!(level_directive("graphwalk_core=trace"), "graphwalk_core=trace");
    }
}
