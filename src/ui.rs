// UI layer: plain-text tables, confirmations and spinners. Rendering returns
// Strings so the command layer decides where they go; colour is applied only
// when asked for (the caller checks whether stdout is a terminal).

use crate::api::SearchFood;
use crate::journal::{DayTotals, Entry};
use chrono::NaiveDate;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq)]
enum Tone {
    Plain,
    Cyan,
    Green,
    Dim,
}

struct Column {
    header: &'static str,
    align: Align,
    tone: Tone,
}

enum Row {
    Cells(Vec<String>),
    Total(Vec<String>),
}

struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

fn col(header: &'static str, align: Align, tone: Tone) -> Column {
    Column {
        header,
        align,
        tone,
    }
}

fn paint(text: String, tone: Tone, bold: bool, color: bool) -> String {
    if !color {
        return text;
    }
    let styled = match tone {
        Tone::Plain => text.stylize(),
        Tone::Cyan => text.cyan(),
        Tone::Green => text.green(),
        Tone::Dim => text.dim(),
    };
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text),
        Align::Right => format!("{:>width$}", text),
    }
}

impl Table {
    fn render(&self, color: bool) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.chars().count()).collect();
        for row in &self.rows {
            let (Row::Cells(cells) | Row::Total(cells)) = row;
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&paint(self.title.clone(), Tone::Plain, true, color));
        out.push('\n');

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| paint(pad(c.header, *w, c.align), Tone::Plain, true, color))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');
        out.push_str(&"─".repeat(rule_width));
        out.push('\n');

        for row in &self.rows {
            let (cells, total) = match row {
                Row::Cells(cells) => (cells, false),
                Row::Total(cells) => {
                    out.push_str(&"─".repeat(rule_width));
                    out.push('\n');
                    (cells, true)
                }
            };
            let line: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .zip(cells)
                .map(|((c, w), cell)| {
                    let tone = if total { Tone::Plain } else { c.tone };
                    paint(pad(cell, *w, c.align), tone, total, color)
                })
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        out
    }
}

pub fn search_results(query: &str, foods: &[SearchFood], color: bool) -> String {
    let table = Table {
        title: format!("Search Results for '{}'", query),
        columns: vec![
            col("ID", Align::Left, Tone::Cyan),
            col("Food", Align::Left, Tone::Green),
            col("Brand", Align::Left, Tone::Dim),
            col("Calories", Align::Right, Tone::Plain),
        ],
        rows: foods
            .iter()
            .map(|f| {
                Row::Cells(vec![
                    f.fdc_id.to_string(),
                    f.name().to_string(),
                    f.brand().to_string(),
                    f.calories()
                        .map(|c| format!("{:.0}", c.trunc()))
                        .unwrap_or_else(|| "N/A".into()),
                ])
            })
            .collect(),
    };
    let mut out = table.render(color);
    out.push('\n');
    out.push_str(&paint(
        "Use 'food log <id>' to log a food item".into(),
        Tone::Dim,
        false,
        color,
    ));
    out.push('\n');
    out
}

pub fn found(description: &str, color: bool) -> String {
    paint(format!("Found: {}", description), Tone::Dim, false, color)
}

pub fn logged(entry: &Entry, color: bool) -> String {
    let tick = paint("✓".into(), Tone::Green, false, color);
    let name = paint(entry.food.clone(), Tone::Plain, true, color);
    format!(
        "{tick} Logged: {name}\n  Serving: {}\n  Calories: {:.0} kcal\n  Protein: {:.1}g | Carbs: {:.1}g | Fat: {:.1}g\n",
        entry.serving, entry.calories, entry.protein, entry.carbs, entry.fat
    )
}

pub fn day_log(date: NaiveDate, entries: &[Entry], totals: &DayTotals, color: bool) -> String {
    let mut rows: Vec<Row> = entries
        .iter()
        .map(|e| {
            Row::Cells(vec![
                e.timestamp.format("%H:%M").to_string(),
                e.food.clone(),
                e.serving.clone(),
                format!("{:.0}", e.calories),
                format!("{:.1}g", e.protein),
                format!("{:.1}g", e.carbs),
                format!("{:.1}g", e.fat),
            ])
        })
        .collect();
    rows.push(Row::Total(vec![
        String::new(),
        "TOTAL".into(),
        String::new(),
        format!("{:.0}", totals.calories),
        format!("{:.1}g", totals.protein),
        format!("{:.1}g", totals.carbs),
        format!("{:.1}g", totals.fat),
    ]));
    Table {
        title: format!("Food Log - {}", date.format("%Y-%m-%d")),
        columns: vec![
            col("Time", Align::Left, Tone::Dim),
            col("Food", Align::Left, Tone::Green),
            col("Serving", Align::Left, Tone::Plain),
            col("Calories", Align::Right, Tone::Plain),
            col("Protein", Align::Right, Tone::Plain),
            col("Carbs", Align::Right, Tone::Plain),
            col("Fat", Align::Right, Tone::Plain),
        ],
        rows,
    }
    .render(color)
}

pub fn notice(msg: &str, color: bool) -> String {
    if color {
        msg.yellow().to_string()
    } else {
        msg.to_string()
    }
}

pub fn error(msg: &str, color: bool) -> String {
    if color {
        msg.red().to_string()
    } else {
        msg.to_string()
    }
}

/// Spinner shown on stderr while waiting for the API. indicatif hides it
/// when stderr is not a terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
