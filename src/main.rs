use basketry::adapter::inbound::cli::command::Cli;
use basketry::adapter::inbound::cli::output::{self, OutputConfig};
use basketry::adapter::inbound::cli::run::{self, EXIT_FAILURE, EXIT_FORBIDDEN};
use basketry::adapter::inbound::controller::FORBIDDEN_MESSAGE;
use basketry::infrastructure::config::settings::Config;
use clap::Parser;
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json));

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(EXIT_FAILURE);
        }
    };

    config.init_logging();

    match run::execute(&cli, &config) {
        Ok(response) if response.is_forbidden() => {
            if cli.json {
                println!("{}", response.body);
            } else {
                output::error(FORBIDDEN_MESSAGE);
            }
            std::process::exit(EXIT_FORBIDDEN);
        }
        Ok(response) => output::response(&response),
        Err(e) => {
            error!(error = %e, "Basket command failed");
            output::error(&e.to_string());
            std::process::exit(EXIT_FAILURE);
        }
    }
}
