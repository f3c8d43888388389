// Macro extraction and serving scaling for a food fetched from the detail
// endpoint.

use crate::api::FoodDetails;
use crate::error::{FoodError, Result};
use crate::journal::Entry;
use chrono::NaiveDateTime;
use std::ops::Mul;

const DEFAULT_SERVING_SIZE: f64 = 100.0;
const DEFAULT_SERVING_UNIT: &str = "g";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn from_details(details: &FoodDetails) -> Self {
        let mut macros = Macros::default();
        for n in &details.food_nutrients {
            let value = n.amount.unwrap_or(0.0);
            let name = n.nutrient.name.as_str();
            if name.contains("Energy") && n.nutrient.unit_name.to_ascii_lowercase().contains("kcal") {
                macros.calories = value;
            } else if name == "Protein" {
                macros.protein = value;
            } else if name == "Carbohydrate, by difference" {
                macros.carbs = value;
            } else if name == "Total lipid (fat)" {
                macros.fat = value;
            }
        }
        macros
    }

    pub fn scale(self, servings: f64) -> Self {
        self * servings
    }
}

impl Mul<f64> for Macros {
    type Output = Macros;

    fn mul(self, k: f64) -> Macros {
        Macros {
            calories: self.calories * k,
            protein: self.protein * k,
            carbs: self.carbs * k,
            fat: self.fat * k,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Serving {
    pub size: f64,
    pub unit: String,
}

impl Serving {
    /// Foundation foods carry no serving size; their nutrients are per 100 g.
    pub fn from_details(details: &FoodDetails) -> Self {
        Serving {
            size: details.serving_size.unwrap_or(DEFAULT_SERVING_SIZE),
            unit: details
                .serving_unit
                .clone()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVING_UNIT.into()),
        }
    }

    pub fn describe(&self, servings: f64) -> String {
        format!("{:.1} {}", self.size * servings, self.unit)
    }
}

pub fn validate_servings(servings: f64) -> Result<f64> {
    if servings.is_finite() && servings > 0.0 {
        Ok(servings)
    } else {
        Err(FoodError::InvalidServings(servings))
    }
}

/// The log entry for `servings` of `details` eaten at `now`.
pub fn entry_for(details: &FoodDetails, servings: f64, now: NaiveDateTime) -> Result<Entry> {
    let servings = validate_servings(servings)?;
    let macros = Macros::from_details(details).scale(servings);
    let serving = Serving::from_details(details).describe(servings);
    Ok(Entry {
        timestamp: now,
        food: details
            .description
            .clone()
            .unwrap_or_else(|| "Unknown food".into()),
        serving,
        calories: macros.calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
    })
}
