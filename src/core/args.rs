use clap::Parser;
use log::kv::{ToValue, Value};

/// Ask questions about the vehicle resale dataset in plain language.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Query service base URL, overrides the config file
    #[arg(short, long)]
    pub endpoint: Option<String>,
    /// Submit a single query, print the response and exit
    #[arg(short, long)]
    pub query: Option<String>,
    /// Print the column mapping reference and exit
    #[arg(long)]
    pub reference: bool,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
