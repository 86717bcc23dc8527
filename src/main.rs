use clap::Parser;
use seqassert::app::run::{exit_code, run};
use seqassert::CliConfig;

fn main() {
    let cli = CliConfig::parse();
    let outcome = run(&cli);

    match &outcome {
        Ok(report) if report.passed() => {
            println!("ok: {:?} check passed", report.mode);
        }
        Ok(report) => {
            for (i, failure) in report.failures.iter().enumerate() {
                println!("failure {} ({}):\n{}\n", i + 1, failure.kind, failure);
            }
        }
        Err(e) => {
            tracing::error!("seqassert failed: {:#}", e);
            eprintln!("error: {:#}", e);
        }
    }

    std::process::exit(exit_code(&outcome));
}
