use clap::Parser;
use pass2keepass::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so they never mix with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = pass2keepass::cli::commands::export::execute(&cli) {
        pass2keepass::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
