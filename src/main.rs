use clap::Parser;
use desktop_e2e::cli::commands::{cmd_locators, cmd_run, select_scenarios, RunOptions};
use desktop_e2e::cli::config::{log_filter, load_config, resolve_wait, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Run {
            scenario,
            driver,
            format,
            output,
            timeout_ms,
            poll_interval_ms,
            trace,
        } => {
            // CLI > config > defaults
            let options = RunOptions {
                scenarios: select_scenarios(&scenario)?,
                driver,
                wait: resolve_wait(&config.wait, timeout_ms, poll_interval_ms),
                format: format.unwrap_or_else(|| config.run.format.clone()),
                output: output.or_else(|| config.run.output.clone()),
                trace_file: trace.or_else(|| config.run.trace_file.clone()),
            };

            let all_passed = cmd_run(&options, &config)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Locators => {
            print!("{}", cmd_locators());
        }
    }

    Ok(())
}
