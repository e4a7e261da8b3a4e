use std::io;
use std::process::ExitCode;

use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    match backtrack_regex_rs::repl::run(stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            tracing::debug!(
                evaluated = summary.evaluated,
                rejected = summary.rejected,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
