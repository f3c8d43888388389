// Error type shared by the library modules. Every variant is something the
// user can see; the binary prints the message and exits with status 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodError {
    #[error(
        "USDA_API_KEY not found. Set the environment variable or put the key in ~/pa/usda. \
         Get one at https://fdc.nal.usda.gov/api-key-signup/"
    )]
    MissingApiKey,

    #[error("The API rejected the key (HTTP {0}). Check USDA_API_KEY")]
    InvalidApiKey(u16),

    #[error("Request failed")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Food {0} not found")]
    FoodNotFound(u64),

    #[error("No foods found matching '{0}'")]
    NoResults(String),

    #[error("Servings must be a positive number, got {0}")]
    InvalidServings(f64),

    #[error("Malformed entry on line {line} of the food log")]
    MalformedEntry {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FoodError>;
