use std::{env, time::Duration};

// Runtime/server constants.

pub fn http_port() -> u16 {
    env::var("FAKE_AUTH_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3002)
}

// Base URL handed to clients of the served fake.
pub fn service_url() -> String {
    env::var("FAKE_AUTH_URL").unwrap_or_else(|_| "http://127.0.0.1:3002".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("FAKE_AUTH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}
