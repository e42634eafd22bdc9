use clap::{Parser, Subcommand};

/// CLI arguments for geoindex
#[derive(Debug, Parser)]
#[command(
    name = "geoindex",
    version,
    about = "CLI for building and querying the geoindex-core spatial and lexical city indexes"
)]
pub struct CliArgs {
    /// Path to a gazetteer dump (tab-separated), or "-"/omitted for stdin.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Grid resolution per axis; `division x division` cells cover the globe.
    #[arg(long = "division", default_value_t = 90, global = true)]
    pub division: u32,

    /// Emit JSON instead of a human-readable table.
    #[cfg(feature = "json")]
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show corpus size and index statistics.
    Stats,

    /// Lexical search over place names, alternate names, and metadata.
    Search {
        /// Whitespace-separated query words.
        query: String,

        /// Maximum number of results.
        #[arg(short = 'k', long = "k", default_value_t = 30)]
        k: usize,
    },

    /// k-nearest neighbors of a loaded place, by its gazetteer id.
    Nearest {
        /// Id of the reference place, as loaded from the gazetteer.
        id: i64,

        /// Maximum number of neighbors.
        #[arg(short = 'k', long = "k", default_value_t = 10)]
        k: usize,

        /// Restrict neighbors to the reference place's country.
        #[arg(long = "same-country")]
        same_country: bool,
    },
}
