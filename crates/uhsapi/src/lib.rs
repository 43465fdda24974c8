//! UHS API (Universal Http Server API)
//! is a project which aims to create a universal facade API for http messages,
//! allowing developers to write code against immutable request, uri and stream contracts
//! which will work for many backends, such as carbon_http_message, ...

pub mod http;
