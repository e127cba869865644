//! In-process inspection backend for end-to-end tests.
//!
//! Serves the four routes the client uses from an in-memory fleet on an
//! ephemeral localhost port. Every request is recorded so tests can assert
//! on exactly what went over the wire.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};

/// One request as received by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/api/checks?vehicleId=V1`
    pub target: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Default)]
struct FleetState {
    vehicles: Vec<Value>,
    /// Newest first
    checks: Vec<Value>,
    requests: Vec<RecordedRequest>,
    next_id: u32,
    outage: Option<(u16, String)>,
}

/// Handle to a running stub. The server thread lives until the test process
/// exits.
#[derive(Clone)]
pub struct StubBackend {
    base_url: String,
    state: Arc<Mutex<FleetState>>,
}

impl StubBackend {
    /// Start with two vehicles (`V1`, `V2`) and no checks.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let state = Arc::new(Mutex::new(FleetState {
            vehicles: vec![
                vehicle("V1", "AB12 CDE", "Ford", "Transit", 2019),
                vehicle("V2", "XY34 ZZZ", "Iveco", "Daily", 2021),
            ],
            ..FleetState::default()
        }));

        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle_connection(stream, &shared);
            }
        });

        Self { base_url, state }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a check directly, bypassing validation.
    pub fn seed_check(&self, vehicle_id: &str, odometer_km: f64, failed: &[&str]) -> String {
        let mut state = self.state.lock().unwrap();
        let check = build_check(&mut state, vehicle_id, odometer_km, failed, None);
        let id = check["id"].as_str().unwrap().to_string();
        state.checks.insert(0, check);
        id
    }

    /// Answer every following request with `status` and `body`.
    pub fn fail_with(&self, status: u16, body: &str) {
        self.state.lock().unwrap().outage = Some((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn check_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .checks
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

fn vehicle(id: &str, registration: &str, make: &str, model: &str, year: i32) -> Value {
    json!({
        "id": id,
        "registration": registration,
        "make": make,
        "model": model,
        "year": year,
    })
}

fn build_check(
    state: &mut FleetState,
    vehicle_id: &str,
    odometer_km: f64,
    failed: &[&str],
    note: Option<String>,
) -> Value {
    state.next_id += 1;
    let n = state.next_id;
    let items: Vec<Value> = ["TYRES", "BRAKES", "LIGHTS", "OIL", "COOLANT"]
        .iter()
        .map(|key| {
            let status = if failed.contains(key) { "FAIL" } else { "OK" };
            json!({ "key": key, "status": status })
        })
        .collect();
    let mut check = json!({
        "id": format!("chk-{n}"),
        "vehicleId": vehicle_id,
        "odometerKm": odometer_km,
        "items": items,
        "hasIssue": !failed.is_empty(),
        "createdAt": format!("2026-03-07T14:{:02}:00Z", n % 60),
    });
    if let Some(note) = note {
        check["note"] = Value::String(note);
    }
    check
}

fn handle_connection(mut stream: TcpStream, state: &Arc<Mutex<FleetState>>) {
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    let (status, body) = {
        let mut state = state.lock().unwrap();
        state.requests.push(request.clone());
        match state.outage.clone() {
            Some(outage) => outage,
            None => route(&mut state, &request),
        }
    };

    let reason = match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut content_length = 0;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 || header.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    Some(RecordedRequest {
        method,
        target,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn route(state: &mut FleetState, request: &RecordedRequest) -> (u16, String) {
    let (path, query) = request
        .target
        .split_once('?')
        .unwrap_or((request.target.as_str(), ""));
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (request.method.as_str(), segments.as_slice()) {
        ("GET", ["api", "vehicles"]) => (200, Value::Array(state.vehicles.clone()).to_string()),
        ("GET", ["api", "checks"]) => {
            let params: Vec<(&str, &str)> = query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .collect();
            let param = |name: &str| params.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);
            let vehicle_id = param("vehicleId").unwrap_or_default();
            let has_issue = param("hasIssue").map(|v| v == "true");
            let checks: Vec<Value> = state
                .checks
                .iter()
                .filter(|c| c["vehicleId"] == vehicle_id)
                .filter(|c| has_issue.map_or(true, |h| c["hasIssue"] == h))
                .cloned()
                .collect();
            (200, Value::Array(checks).to_string())
        }
        ("POST", ["api", "checks"]) => create_check(state, &request.body),
        ("DELETE", ["api", "checks", id]) => {
            let before = state.checks.len();
            state.checks.retain(|c| c["id"] != *id);
            if state.checks.len() < before {
                (200, "{}".to_string())
            } else {
                (404, error_body("NOT_FOUND", "Check not found", &[]))
            }
        }
        _ => (404, error_body("NOT_FOUND", "No such route", &[])),
    }
}

fn create_check(state: &mut FleetState, body: &str) -> (u16, String) {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return (400, error_body("BAD_REQUEST", "Malformed JSON", &[]));
    };

    let vehicle_id = payload["vehicleId"].as_str().unwrap_or_default().to_string();
    let odometer_km = payload["odometerKm"].as_f64();
    let items = payload["items"].as_array().cloned().unwrap_or_default();

    let mut details = Vec::new();
    if !state.vehicles.iter().any(|v| v["id"] == vehicle_id.as_str()) {
        details.push(("vehicleId", "Unknown vehicle"));
    }
    if odometer_km.map_or(true, |km| km < 0.0) {
        details.push(("odometerKm", "Must be a non-negative number"));
    }
    if items.len() != 5 {
        details.push(("items", "Must contain exactly 5 items"));
    }
    if !details.is_empty() {
        return (400, error_body("VALIDATION_ERROR", "Invalid check", &details));
    }

    let failed: Vec<&str> = items
        .iter()
        .filter(|i| i["status"] == "FAIL")
        .filter_map(|i| i["key"].as_str())
        .collect();
    let note = payload["note"].as_str().map(str::to_string);
    let check = build_check(state, &vehicle_id, odometer_km.unwrap_or_default(), &failed, note);
    state.checks.insert(0, check.clone());
    (201, check.to_string())
}

/// An empty `details` slice leaves the key out; only validation errors carry it.
fn error_body(code: &str, message: &str, details: &[(&str, &str)]) -> String {
    if details.is_empty() {
        return json!({ "error": { "code": code, "message": message } }).to_string();
    }
    let details: Vec<Value> = details
        .iter()
        .map(|(field, reason)| json!({ "field": field, "reason": reason }))
        .collect();
    json!({ "error": { "code": code, "message": message, "details": details } }).to_string()
}
