use clap::Parser;

/// Command line surface. Everything has a default so `tunetable` with no
/// arguments starts on a sensible catalog view.
#[derive(Parser, Debug)]
#[command(name = "tunetable", version, about = "Browse the iTunes track catalog from the terminal")]
pub struct Args {
    /// Search term used for the catalog fetch at startup.
    pub query: Option<String>,

    /// Two-letter storefront country code.
    #[arg(long, default_value = "US")]
    pub country: String,

    /// Maximum number of tracks per catalog request. The API caps this at 200.
    #[arg(long, default_value_t = 50)]
    pub limit: u32,

    /// Catalog endpoint, overridable for a local stub.
    #[arg(long, default_value = "https://itunes.apple.com")]
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub country: String,
    pub limit: u32,
    pub initial_query: String,
}

impl Config {
    pub fn new(args: Args) -> Self {
        Config {
            base_url: args.api_base.trim_end_matches('/').to_string(),
            country: args.country,
            limit: args.limit.clamp(1, 200),
            initial_query: args
                .query
                .unwrap_or_else(|| String::from("greatest hits")),
        }
    }
}
