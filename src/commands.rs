// Command flows. Each one is a straight line: validate input, talk to the
// API or read the log, print the result.

use crate::api::ApiClient;
use crate::cli::{Commands, LogArgs, QuickArgs, SearchArgs, TodayArgs};
use crate::config::Config;
use crate::error::{FoodError, Result};
use crate::journal::{DayTotals, Journal};
use crate::nutrition::{entry_for, validate_servings};
use crate::ui;
use chrono::Local;
use crossterm::tty::IsTty;
use tracing::info;

pub struct Context {
    pub config: Config,
    /// Colour stdout output; off when stdout is piped.
    pub color: bool,
}

impl Context {
    pub fn new(config: Config) -> Self {
        Context {
            config,
            color: std::io::stdout().is_tty(),
        }
    }

    fn client(&self) -> Result<ApiClient> {
        let key = self.config.api_key()?;
        ApiClient::new(&self.config.api_url, &key)
    }

    fn journal(&self) -> Journal {
        Journal::open(self.config.log_path())
    }
}

pub fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search(ctx, args),
        Commands::Log(args) => log(ctx, args),
        Commands::Quick(args) => quick(ctx, args),
        Commands::Today(args) => today(ctx, args),
    }
}

pub fn search(ctx: &Context, args: SearchArgs) -> Result<()> {
    let client = ctx.client()?;
    let spinner = ui::spinner("Searching...");
    let results = client.search(&args.query, args.count);
    spinner.finish_and_clear();
    let results = results?;

    if results.foods.is_empty() {
        return Err(FoodError::NoResults(args.query));
    }
    print!("{}", ui::search_results(&args.query, &results.foods, ctx.color));
    Ok(())
}

pub fn log(ctx: &Context, args: LogArgs) -> Result<()> {
    let servings = validate_servings(args.servings)?;
    let client = ctx.client()?;
    log_food(ctx, &client, args.fdc_id, servings)
}

pub fn quick(ctx: &Context, args: QuickArgs) -> Result<()> {
    let servings = validate_servings(args.servings)?;
    let client = ctx.client()?;

    let spinner = ui::spinner("Searching...");
    let results = client.search(&args.query, 1);
    spinner.finish_and_clear();

    let first = match results?.foods.into_iter().next() {
        Some(food) => food,
        None => return Err(FoodError::NoResults(args.query)),
    };
    println!("{}", ui::found(first.name(), ctx.color));
    log_food(ctx, &client, first.fdc_id, servings)
}

fn log_food(ctx: &Context, client: &ApiClient, fdc_id: u64, servings: f64) -> Result<()> {
    let spinner = ui::spinner("Fetching nutrition details...");
    let details = client.food(fdc_id);
    spinner.finish_and_clear();

    let entry = entry_for(&details?, servings, Local::now().naive_local())?;
    ctx.journal().append(&entry)?;
    info!(fdc_id, servings, food = %entry.food, "logged food");
    print!("{}", ui::logged(&entry, ctx.color));
    Ok(())
}

pub fn today(ctx: &Context, args: TodayArgs) -> Result<()> {
    let journal = ctx.journal();
    if !journal.exists() {
        println!("{}", ui::notice("No foods logged yet", ctx.color));
        return Ok(());
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let entries = journal.entries_on(date)?;
    if entries.is_empty() {
        let msg = if args.date.is_some() {
            format!("No foods logged on {}", date)
        } else {
            "No foods logged today".to_string()
        };
        println!("{}", ui::notice(&msg, ctx.color));
        return Ok(());
    }

    let totals = DayTotals::from_entries(&entries);
    print!("{}", ui::day_log(date, &entries, &totals, ctx.color));
    Ok(())
}
