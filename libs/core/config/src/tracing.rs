use crate::Environment;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, Subscriber};
use tracing_subscriber::{prelude::*, registry::LookupSpan, EnvFilter, Layer};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize console tracing for the given environment.
///
/// - **Production** (`APP_ENV=production`): flattened JSON, default level `info`
/// - **Development**: pretty output, default level `debug`
///
/// `RUST_LOG` overrides the default filter. Calling this more than once is a
/// no-op after the first successful initialization.
pub fn init_tracing(environment: &Environment) {
    // Without a log file there is nothing to open, so this cannot fail.
    let _ = init_tracing_with_log_file(environment, None);
}

/// Like [`init_tracing`], additionally appending JSON lines to `log_file`.
///
/// The file is created if missing and always written as JSON regardless of
/// the console format, so it can be shipped or grepped the same way in every
/// environment.
///
/// # Errors
/// Returns an error if the log file cannot be opened for appending.
pub fn init_tracing_with_log_file(
    environment: &Environment,
    log_file: Option<&Path>,
) -> io::Result<()> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug,hyper=info,mongodb=info")
        }
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(file.map(json_file_layer))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(file.map(json_file_layer))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(
                log_file = ?log_file,
                "Tracing initialized with ErrorLayer. Environment: {:?}",
                environment
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }

    Ok(())
}

fn json_file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(false)
        .flatten_event(true)
        .with_writer(Mutex::new(file))
}
