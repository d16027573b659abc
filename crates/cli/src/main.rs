use crate::{error::CliError, params::ParamLoader};
use clap::Parser;
use commands::Commands;
use query::{FilterQuery, filter};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod params;

#[derive(Parser)]
#[command(name = "pbq", version = "0.1.0", about = "Filter query builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr, stdout carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            params,
            param,
        } => {
            let mut loader = ParamLoader::new();
            if let Some(path) = params {
                info!("Loading params from {}", path.display());
                loader.load_from_file(&path)?;
            }
            loader.apply_pairs(&param)?;

            let params = loader.into_params();
            info!("Rendering template with {} params", params.len());
            println!("{}", filter(&template, Some(&params)));
        }
        Commands::Search { fields, value, raw } => {
            let mut query = FilterQuery::new();
            let chain = query.builder().search(&fields, value);

            if raw {
                let built = chain.build()?;
                println!("{}", output::raw_query_json(&built)?);
            } else {
                println!("{}", chain.build_with(&filter)?);
            }
        }
        Commands::Operators { json } => output::print_operators(json)?,
    }

    Ok(())
}
