use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use two_pointer_patterns::{run_all, DrillFile, Report, Summary, Verdict};

fn init_logging(fallback: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_env("DRILLS_LOG")
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn print_report(report: &Report) {
    let label = format!("{} ({})", report.label, report.op);
    match &report.verdict {
        Verdict::Passed(outcome) => println!("{} {} => {}", "PASS".green().bold(), label, outcome),
        Verdict::Unchecked(outcome) => println!("{} {} => {}", " RAN".cyan(), label, outcome),
        Verdict::Failed { expected, actual } => {
            println!("{} {}", "FAIL".red().bold(), label);
            println!("     expected: {}", expected.to_string().green());
            println!("     actual:   {}", actual.to_string().red());
        }
        Verdict::Rejected(reason) => {
            println!("{} {}: {}", "SKIP".yellow().bold(), label, reason)
        }
    }
}

fn print_summary(summary: &Summary) {
    let line = format!(
        "{} passed, {} failed, {} unchecked, {} rejected",
        summary.passed(),
        summary.failed(),
        summary.unchecked(),
        summary.rejected()
    );
    if summary.is_success() {
        println!("\n{}", line.green());
    } else {
        println!("\n{}", line.red());
    }
}

fn main() -> ExitCode {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("drills.toml"));

    let file = match DrillFile::load(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::from(2);
        }
    };

    init_logging(&file.settings.log_level);
    tracing::info!(path = %path.display(), drills = file.drills.len(), "loaded drill file");

    let summary = run_all(&file);
    for report in &summary.reports {
        print_report(report);
    }
    print_summary(&summary);

    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
