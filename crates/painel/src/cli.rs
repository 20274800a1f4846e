use clap::Parser;
use rede_core::{DistrictFilter, ProtectionFilter, QueryError, TableQuery};

/// Painel da Rede de Proteção de Direitos Humanos.
///
/// Loads the institution registry once and prints the executive summary,
/// charts and the filtered institution table.
#[derive(Parser, Debug)]
#[command(name = "painel", version, about)]
pub struct Cli {
    /// Dataset location (path, file:// or http(s):// URL); defaults to
    /// REDE_DH_DATA_SOURCE
    #[arg(long)]
    pub source: Option<String>,

    /// Case-insensitive text matched against name, neighborhood and services
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Protection level: all, basica, especial, or the exact label
    #[arg(long, short, default_value = "all")]
    pub protection: String,

    /// District name (exact match), or all in any case
    #[arg(long, short, default_value = "all")]
    pub district: String,

    /// Print the full record at this position instead of the dashboard
    #[arg(long)]
    pub detail: Option<usize>,

    /// Emit the dashboard as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn query(&self) -> Result<TableQuery, QueryError> {
        Ok(TableQuery::new()
            .with_search(self.search.clone())
            .with_protection_level(self.protection.parse::<ProtectionFilter>()?)
            .with_district(self.district.parse::<DistrictFilter>()?))
    }
}
