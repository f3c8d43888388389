// API client module: a small blocking HTTP client for the USDA FoodData
// Central endpoints the CLI needs (search and food details).

use crate::error::{FoodError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Holds a reqwest blocking client, the base URL of the API and the key
/// sent with every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Response of `GET /foods/search`. Only the fields the CLI shows are kept.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<SearchFood>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchFood {
    pub fdc_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<SearchNutrient>,
}

/// Search results flatten nutrients: the name and unit sit next to the value.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchNutrient {
    #[serde(default)]
    pub nutrient_name: String,
    #[serde(default)]
    pub unit_name: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Response of `GET /food/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<DetailNutrient>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetailNutrient {
    #[serde(default)]
    pub nutrient: NutrientInfo,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit_name: String,
}

impl SearchFood {
    pub fn name(&self) -> &str {
        self.description.as_deref().unwrap_or("Unknown")
    }

    /// Brand name, falling back to the brand owner for branded foods that
    /// only carry the latter.
    pub fn brand(&self) -> &str {
        self.brand_name
            .as_deref()
            .or(self.brand_owner.as_deref())
            .unwrap_or("")
    }

    /// Energy per 100 g as reported by the search endpoint. Some foods list
    /// energy in both kJ and kcal; kcal wins.
    pub fn calories(&self) -> Option<f64> {
        let energy = || self.food_nutrients.iter().filter(|n| n.nutrient_name == "Energy");
        energy()
            .find(|n| n.unit_name.eq_ignore_ascii_case("kcal"))
            .or_else(|| energy().next())
            .and_then(|n| n.value)
    }
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("food-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Search foods matching `query`, returning at most `count` results.
    pub fn search(&self, query: &str, count: u32) -> Result<SearchResponse> {
        let url = format!("{}/foods/search", &self.base_url);
        debug!(%url, query, count, "searching foods");
        let page_size = count.to_string();
        let res = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .map_err(redact)?;
        let res = check_status(res)?;
        res.json().map_err(redact)
    }

    /// Fetch full nutrition details for a food by FDC ID.
    pub fn food(&self, fdc_id: u64) -> Result<FoodDetails> {
        let url = format!("{}/food/{}", &self.base_url, fdc_id);
        debug!(%url, "fetching food details");
        let res = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .map_err(redact)?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(FoodError::FoodNotFound(fdc_id));
        }
        let res = check_status(res)?;
        res.json().map_err(redact)
    }
}

/// reqwest errors carry the request URL, which includes the API key.
fn redact(e: reqwest::Error) -> FoodError {
    FoodError::Http(e.without_url())
}

fn check_status(res: Response) -> Result<Response> {
    let status = res.status();
    debug!(status = status.as_u16(), "API responded");
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(FoodError::InvalidApiKey(status.as_u16()));
    }
    let body = res.text().unwrap_or_default();
    Err(FoodError::Api {
        status: status.as_u16(),
        body,
    })
}
