//! Tracing subscriber setup
//!
//! Logs always go to stderr so stdout carries nothing but the report.

use tracing_subscriber::EnvFilter;

const DEBUG_FILTER: &str = "info,validate_contentstore=debug,cstore_guard=debug,cstore_state=debug";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
pub fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let filter = EnvFilter::new(if debug_enabled {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    });

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(debug_enabled)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_filter_covers_binary_target() {
        let crate_target = module_path!().split("::").next().unwrap();
        assert!(DEBUG_FILTER
            .split(',')
            .any(|directive| directive == format!("{crate_target}=debug")));
    }
}
