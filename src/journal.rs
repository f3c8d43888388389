// The food log: one JSON object per line, appended and never rewritten.

use crate::error::{FoodError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::ops::AddAssign;
use std::path::PathBuf;
use tracing::debug;

/// A logged food. Timestamps are local wall-clock time without a zone so
/// "today" means the user's day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub food: String,
    pub serving: String,
    pub calories: f64,
    #[serde(rename = "protein_g")]
    pub protein: f64,
    #[serde(rename = "carbs_g")]
    pub carbs: f64,
    #[serde(rename = "fat_g")]
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl AddAssign<&Entry> for DayTotals {
    fn add_assign(&mut self, entry: &Entry) {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fat += entry.fat;
    }
}

impl DayTotals {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut totals = DayTotals::default();
        for entry in entries {
            totals += entry;
        }
        totals
    }
}

pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Journal { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn append(&self, entry: &Entry) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let line = serde_json::to_string(entry)?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(f, "{}", line)?;
        debug!(path = %self.path.display(), food = %entry.food, "appended entry");
        Ok(())
    }

    /// Every entry in insertion order. A log that was never written is empty.
    pub fn read_all(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line)
                .map_err(|source| FoodError::MalformedEntry {
                    line: idx + 1,
                    source,
                })?;
            entries.push(entry);
        }
        debug!(path = %self.path.display(), count = entries.len(), "read food log");
        Ok(entries)
    }

    pub fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.timestamp.date() == date)
            .collect())
    }
}
