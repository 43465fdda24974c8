use uhsapi::http::IntoHeaderValues;

use crate::http::{
    InvalidArgument,
    header::HeaderMap,
    request::{
        Request,
        arg::{BodyArg, UriArg},
    },
};

/// Collects the parts of a [`Request`], validating them on [`RequestBuilder::build`]
///
/// Defaults to a `GET` of the empty uri with an empty body, no headers and version `1.1`.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: String,
    uri: UriArg,
    body: BodyArg,
    headers: HeaderMap,
    version: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: "GET".to_owned(),
            uri: UriArg::default(),
            body: BodyArg::default(),
            headers: HeaderMap::new(),
            version: "1.1".to_owned(),
        }
    }

    pub fn build(self) -> Result<Request, InvalidArgument> {
        let RequestBuilder {
            method,
            uri,
            body,
            headers,
            version,
        } = self;

        Request::from_parts(&method, uri, body, headers, &version)
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_owned();
        self
    }

    pub fn uri(mut self, uri: impl Into<UriArg>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn body(mut self, body: impl Into<BodyArg>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds values to a header, repeated names are combined
    pub fn header<V: IntoHeaderValues>(mut self, name: &str, values: V) -> Self {
        self.headers.append(name, values.into_header_values());
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        for (name, values) in headers.iter() {
            self.headers.append(name.clone(), values.iter().cloned());
        }
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_owned();
        self
    }
}
