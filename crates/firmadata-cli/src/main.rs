use std::sync::Arc;

use clap::{Parser, Subcommand};
use firmadata_core::{AggregateResponse, LookupRequest};
use firmadata_sources::{Aggregator, SourceEndpoints};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "firmadata-cli")]
#[command(about = "Company lookup from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one company lookup and print the merged result as JSON.
    Lookup {
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        organization_number: String,
        /// Ads-transparency API token; the ads lookup is skipped when empty.
        #[arg(long, env = "FIRMADATA_ADS_TOKEN", default_value = "", hide_env_values = true)]
        ads_token: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = firmadata_core::load_app_config()?;
    // Logs go to stderr so stdout stays valid JSON.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lookup {
            company_name,
            organization_number,
            ads_token,
        } => {
            let aggregator = Arc::new(Aggregator::new(&SourceEndpoints::from_app_config(
                &config,
            ))?);
            let response = aggregator
                .lookup(LookupRequest::new(company_name, organization_number, ads_token))
                .await;
            println!("{}", render(&response)?);
        }
    }

    Ok(())
}

fn render(response: &AggregateResponse) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use firmadata_core::CompanyProfile;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_args_parse() {
        let cli = Cli::try_parse_from([
            "firmadata-cli",
            "lookup",
            "--company-name",
            "Acme AS",
            "--organization-number",
            "923609016",
            "--ads-token",
            "tok",
        ])
        .expect("parse");
        let Commands::Lookup {
            company_name,
            organization_number,
            ads_token,
        } = cli.command;
        assert_eq!(company_name, "Acme AS");
        assert_eq!(organization_number, "923609016");
        assert_eq!(ads_token, "tok");
    }

    #[test]
    fn lookup_requires_organization_number() {
        let result = Cli::try_parse_from(["firmadata-cli", "lookup", "--company-name", "Acme AS"]);
        assert!(result.is_err());
    }

    #[test]
    fn render_prints_error_shape() {
        let out = render(&AggregateResponse::failure("boom")).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn render_prints_profile_shape() {
        let out = render(&AggregateResponse::Profile(CompanyProfile {
            registry: None,
            directory: None,
            ads: vec![],
            search: vec![],
        }))
        .expect("render");
        assert!(out.contains("\"registry\": null"));
    }
}
