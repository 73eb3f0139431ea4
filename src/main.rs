use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::process::ExitCode;

use tavily_cli::CliError;
use tavily_cli::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report(CliError::Usage(err)),
    };

    // Diagnostics go to stderr so stdout stays pipeable.
    let level = if cli.global.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    match tavily_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn report(err: CliError) -> ExitCode {
    let code = ExitCode::from(err.exit_code());
    if let CliError::Usage(usage) = &err {
        // clap formats its own usage, help and version output.
        let _ = usage.print();
        return code;
    }

    tracing::debug!(error = ?err, "command failed");
    let message = format!("Error: {err}");
    if std::io::stderr().is_terminal() {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{message}");
    }
    for hint in err.hints() {
        eprintln!("{hint}");
    }
    code
}
