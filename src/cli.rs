// Command-line surface: the four commands and their flags, parsed by clap.
// Doc comments double as the `--help` text.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "food", version)]
#[command(
    about = "Food logging and calorie tracking using the USDA FoodData Central API",
    after_help = "Requires the USDA_API_KEY environment variable or an API key in ~/pa/usda"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for foods in the USDA database
    Search(SearchArgs),

    /// Log a food item by its FDC ID
    Log(LogArgs),

    /// Search and log the first result in one command
    Quick(QuickArgs),

    /// Show today's logged foods and totals
    Today(TodayArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Food to search for (e.g. "banana" or "cheddar cheese")
    pub query: String,

    /// Number of results to show (the API returns at most 200 per page)
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub count: u32,
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// FDC ID from search results
    pub fdc_id: u64,

    /// Number of servings
    #[arg(short, long, default_value_t = 1.0)]
    pub servings: f64,
}

#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Food description (e.g. "scrambled eggs")
    pub query: String,

    /// Number of servings
    #[arg(short, long, default_value_t = 1.0)]
    pub servings: f64,
}

#[derive(Args, Debug)]
pub struct TodayArgs {
    /// Report on another day instead (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
