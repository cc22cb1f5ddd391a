use clap::{Parser, Subcommand};

/// CLI arguments for country-picker-cli
#[derive(Debug, Parser)]
#[command(
    name = "country-picker",
    version,
    about = "CLI for querying the country-picker-core country directory"
)]
pub struct CliArgs {
    /// Locale tag for display names (e.g. de, fr, zh-hans); defaults to
    /// the system locale, falling back to en
    #[arg(short = 'l', long = "locale", global = true)]
    pub locale: Option<String>,

    /// Optional comma-separated list of ISO2 codes to include (e.g. DE,CH,AT)
    #[arg(long = "include", global = true)]
    pub include: Option<String>,

    /// Optional comma-separated list of ISO2 codes to exclude
    #[arg(long = "exclude", global = true)]
    pub exclude: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the country directory in dataset order
    Countries,

    /// Lookup a country by ISO2 code
    Country {
        /// ISO2 code (e.g. DE, us)
        code: String,
    },

    /// Search the directory by name, code or calling code
    Search {
        /// Query substring (accent- and case-insensitive)
        query: String,

        /// Comma-separated preferred codes pinned to the top when the
        /// query is empty
        #[arg(long = "preferred")]
        preferred: Option<String>,
    },

    /// List the supported UI locales
    Locales,

    /// Run the auto-selection flow and print the outcome
    Auto {
        /// Simulated device locale identifier (e.g. en_IN); defaults to
        /// the system locale
        #[arg(long = "device")]
        device: Option<String>,

        /// Also attempt the IP geolocation lookup (requires the
        /// `ip-lookup` feature)
        #[arg(long = "ip")]
        ip: bool,
    },
}
