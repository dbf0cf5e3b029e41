use std::env;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod settings;
mod terminal;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "passgen=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Keep generated passwords out of core dumps.
    #[cfg(target_os = "linux")]
    let _ = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    let result = cli::run(&args);
    if let Err(e) = &result {
        cli::prompts::error(&e.to_string());
    }
    ExitCode::from(cli::exit_code(&result))
}
