// Fixture HTTP server standing in for FoodData Central. It answers a fixed
// set of routes with canned JSON and records every request line it sees.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const BANANA_ID: u64 = 173944;
pub const MISSING_ID: u64 = 999;
/// Any id without a route gets `500 boom`.
pub const BROKEN_ID: u64 = 12345;

pub const SEARCH_BANANA: &str = r#"{
    "totalHits": 2,
    "foods": [
        {
            "fdcId": 173944,
            "description": "Bananas, raw",
            "foodNutrients": [
                {"nutrientName": "Protein", "unitName": "G", "value": 1.09},
                {"nutrientName": "Energy", "unitName": "KCAL", "value": 89.0}
            ]
        },
        {
            "fdcId": 2000001,
            "description": "BANANA CHIPS",
            "brandOwner": "Snack Co.",
            "foodNutrients": []
        }
    ]
}"#;

pub const BANANA_DETAILS: &str = r#"{
    "fdcId": 173944,
    "description": "Bananas, raw",
    "servingSize": 118.0,
    "servingUnit": "g",
    "foodNutrients": [
        {"nutrient": {"name": "Energy", "unitName": "kcal"}, "amount": 89.0},
        {"nutrient": {"name": "Protein", "unitName": "g"}, "amount": 1.25},
        {"nutrient": {"name": "Carbohydrate, by difference", "unitName": "g"}, "amount": 22.75},
        {"nutrient": {"name": "Total lipid (fat)", "unitName": "g"}, "amount": 0.5}
    ]
}"#;

pub struct FixtureServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                handle(stream, &seen);
            }
        });
        FixtureServer {
            base_url: format!("http://{}/fdc/v1", addr),
            requests,
        }
    }

    /// Request targets (path and query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(target.clone());

    let (status, body) = route(&target);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn route(target: &str) -> (&'static str, String) {
    if target.contains("api_key=bad-key") {
        return ("403 Forbidden", r#"{"error": {"code": "API_KEY_INVALID"}}"#.into());
    }
    let path = target.split('?').next().unwrap_or("");
    if path.ends_with("/foods/search") {
        if target.contains("query=banana") {
            return ("200 OK", SEARCH_BANANA.into());
        }
        if target.contains("query=garbled") {
            return ("200 OK", "<html>maintenance</html>".into());
        }
        return ("200 OK", r#"{"totalHits": 0, "foods": []}"#.into());
    }
    if path.ends_with(&format!("/food/{}", BANANA_ID)) {
        return ("200 OK", BANANA_DETAILS.into());
    }
    if path.ends_with(&format!("/food/{}", MISSING_ID)) {
        return ("404 Not Found", String::new());
    }
    ("500 Internal Server Error", "boom".into())
}
