use tracing_subscriber::EnvFilter;

/// Our own targets; dependencies stay quiet unless `RUST_LOG` asks for them.
const TARGETS: &[&str] = &["weekwise", "week_engine"];

fn level_for(verbosity: u8) -> &'static str {
    ["warn", "info", "debug"]
        .get(usize::from(verbosity))
        .copied()
        .unwrap_or("trace")
}

fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. Each `-v` raises our targets one level
/// above `warn`; a set `RUST_LOG` wins outright.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    #[test]
    fn test_default_directives_cover_both_crates() {
        assert_eq!(default_directives(1), "weekwise=info,week_engine=info");
    }
}
