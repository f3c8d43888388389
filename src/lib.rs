// Library root
// -----------
// This crate exposes the pieces of the `food` CLI as a library. The binary
// (`main.rs`) parses arguments, sets up logging and hands off to `commands`.
//
// Module responsibilities:
// - `cli`: clap definitions of the commands and their flags.
// - `config`: API URL, API key and data directory, all from the environment.
// - `api`: HTTP interactions with USDA FoodData Central (search, details).
// - `nutrition`: pulls calories and macros out of a food and scales them
//   by the number of servings.
// - `journal`: the append-only JSONL food log and daily totals.
// - `ui`: terminal rendering (tables, confirmations, spinners).
// - `commands`: the flow of each command, tying the modules together.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod nutrition;
pub mod ui;

pub use error::{FoodError, Result};
