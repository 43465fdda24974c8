//! Shared fixtures for the carbon-http-message integration tests

use std::sync::Once;

use carbon_http_message::{Request, Stream};

/// Installs an `env_logger` in test mode, honouring `RUST_LOG`
pub fn init_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        log::debug!("test logger installed");
    });
}

/// Uris exercised across the suite, paired with the request target they derive
pub const TARGETS: &[(&str, &str)] = &[
    ("https://terryl.in/zh/?test=test", "/zh/?test=test"),
    ("https://terryl.in", "/"),
    ("http://127.0.0.1:8080/status", "/status"),
    ("http://[::1]/health?verbose=1", "/health?verbose=1"),
    ("/relative/only", "/relative/only"),
];

pub const METHODS: &[&str] = &[
    "HEAD", "GET", "POST", "PUT", "DELETE", "PATCH", "CONNECT", "OPTIONS", "TRACE",
];

/// A request for `https://{host}/` carrying a matching Host header
pub fn request_with_host(host: &str) -> Request {
    Request::builder()
        .uri(format!("https://{host}/"))
        .header("Host", host)
        .build()
        .unwrap_or_else(|err| panic!("fixture uri for {host} is invalid: {err}"))
}

/// An in-memory body holding `content`
pub fn body(content: &str) -> Stream {
    Stream::from_bytes(content)
}

/// Alternates the letter case of `s`, e.g. `GET` becomes `gEt`
pub fn mixed_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
