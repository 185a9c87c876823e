//! energy-setup - bootstrap the Energy Consumption Analysis notebook environment

use clap::Parser;

use energy_setup::cli::{Cli, init_tracing};
use energy_setup::domain::error_code;
use energy_setup::output::{OutputContext, json};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (as_json, no_color) = (cli.json, cli.no_color);
    if let Err(e) = cli.run().await {
        match json::format_error(&e.to_string(), error_code(&e)) {
            Ok(obj) if as_json => println!("{obj}"),
            _ => OutputContext::new(no_color, false).error(&format!("Error: {e}")),
        }
        std::process::exit(1);
    }
}
