//! Operator CLI for the gateway route table.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use gateway_core::config::loader;
use gateway_core::config::schema::AppSettings;
use gateway_core::routing::{compile, CompileError, RouteDefaults, RouteTable};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Compile, check and inspect the fleet gateway route table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a settings file and print the route table as JSON
    Compile {
        /// Path to the TOML settings file
        config: PathBuf,
    },
    /// Load, validate and compile a settings file without printing the table
    Check {
        /// Path to the TOML settings file
        config: PathBuf,
    },
    /// Fetch the installed route table from a running gateway
    Show {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { config } => {
            let settings = loader::load_settings(&config)?;
            let table = compile_from(&settings)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Check { config } => check(&config),
        Commands::Show { url } => {
            let res = reqwest::Client::new()
                .get(format!("{url}/routes"))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn compile_from(settings: &AppSettings) -> Result<RouteTable, CompileError> {
    compile(
        &settings.gateway.static_routes,
        &settings.gateway.routes,
        &RouteDefaults::new(&settings.gateway.default_downstream_scheme),
    )
}

/// Report every configuration problem on stderr, exit non-zero on any.
fn check(config: &Path) {
    let settings = match loader::load_settings(config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match compile_from(&settings) {
        Ok(table) => println!(
            "ok: {} routes ({} static, {} declared)",
            table.len(),
            settings.gateway.static_routes.len(),
            settings.gateway.routes.len()
        ),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("error: gateway returned status {status}");
        if let Ok(text) = res.text().await {
            eprintln!("response: {text}");
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
