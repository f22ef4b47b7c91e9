//! Standardized process initialization, used to provide consistent
//! tracing configuration across environments.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Install the global tracing subscriber for the given environment:
/// human-readable output locally, flattened JSON everywhere else.
pub fn init_tracing(env: Environment) {
    match env {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
