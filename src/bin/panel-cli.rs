use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

use panel_utils::config::{load_config, validate_config, ConfigError, ConnectionConfig};
use panel_utils::currency::UnitType;
use panel_utils::factory::FactoryOptions;
use panel_utils::observability::logging::init_logging;
use panel_utils::txn::{RawTransaction, TransactionParseCache, TxnCacheOptions};
use panel_utils::{BlockExplorerResolver, ClientFactory, CurrencyConverter, PanelConfig};

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(about = "Query a wallet dashboard server and its backends", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard origin, e.g. https://panel.example.com
    #[arg(long)]
    origin: Option<String>,

    /// Dashboard client id
    #[arg(short, long)]
    id: Option<String>,

    /// bitcoin, bitcoincash or handshake
    #[arg(long)]
    chain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List clients registered on the dashboard server
    Clients,
    /// Show dashboard info for the selected client
    Info,
    /// Query node status for the selected client
    NodeInfo,
    /// List wallets for the selected client
    Wallets,
    /// Parse a wallet's transaction history
    History {
        wallet: String,
        #[arg(long)]
        account: Option<String>,
    },
    /// Print explorer links for a transaction hash
    Links {
        hash: String,
        #[arg(long)]
        protocol: Option<String>,
        #[arg(long)]
        network: Option<String>,
    },
    /// Convert an amount between units
    Convert {
        value: String,
        #[arg(long, default_value = "unit")]
        from: String,
        #[arg(long, default_value = "base")]
        to: String,
    },
    /// Show unit names for the selected chain
    Units,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PanelConfig::default(),
    };
    if let Some(origin) = &cli.origin {
        config.connection = ConnectionConfig {
            api_key: config.connection.api_key.take(),
            timeout_secs: config.connection.timeout_secs,
            ..ConnectionConfig::from_origin(origin)?
        };
    }
    if let Some(id) = cli.id {
        config.client.id = Some(id);
    }
    if let Some(chain) = cli.chain {
        config.client.chain = chain;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability)?;

    let mut factory = ClientFactory::new(FactoryOptions::from_config(&config))?;

    match cli.command {
        Commands::Clients => {
            print_json(&factory.get_clients().await?)?;
        }
        Commands::Info => {
            print_json(&factory.get_client_info().await?)?;
        }
        Commands::NodeInfo => {
            let info = factory.node_client()?.get_info().await?;
            print_json(&info)?;
        }
        Commands::Wallets => {
            let wallets = factory.wallet_client()?.get_wallets().await?;
            print_json(&wallets)?;
        }
        Commands::History { wallet, account } => {
            let history = factory
                .wallet_client()?
                .get_history(&wallet, account.as_deref())
                .await?;
            let records: Vec<RawTransaction> = serde_json::from_value(history)?;

            let cache = TransactionParseCache::new(TxnCacheOptions {
                constants: Some(config.transactions.clone()),
                ..TxnCacheOptions::default()
            })?;
            let views = cache.parse(&records, Some(&wallet), false)?;
            let views: Vec<&Value> = views.iter().map(|view| view.as_ref()).collect();
            print_json(&json!(views))?;
        }
        Commands::Links {
            hash,
            protocol,
            network,
        } => {
            let resolver = BlockExplorerResolver::new(
                protocol.as_deref().unwrap_or(&config.explorer.protocol),
                network.as_deref().unwrap_or(&config.explorer.network),
            )?;
            for link in resolver.transaction_links(&hash)? {
                println!("{}", link);
            }
        }
        Commands::Convert { value, from, to } => {
            let converter =
                CurrencyConverter::from_chain_unit(&config.client.chain, &from, &value)?;
            println!("{}", converter.to_string_in(&to)?);
        }
        Commands::Units => {
            let converter = CurrencyConverter::new(&config.client.chain)?;
            let mut units = serde_json::Map::new();
            for unit in UnitType::ALL {
                units.insert(
                    unit.as_str().to_string(),
                    json!(converter.unit_name(unit.as_str())?),
                );
            }
            print_json(&Value::Object(units))?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
