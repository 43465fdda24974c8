use std::any::Any;

mod arg;
mod builder;
mod target;

pub use arg::{BodyArg, UriArg};
pub use builder::RequestBuilder;
pub use target::RequestTargetForm;
use uhsapi::http::{HttpMessage, HttpRequest, IntoHeaderValues};

use crate::http::{
    HttpVersion, InvalidArgument,
    header::{HeaderMap, HeaderName},
    message::Message,
    method::Method,
    stream::Stream,
    uri::Uri,
};

/// An outgoing HTTP request
///
/// A [`Request`] never changes after construction: every `with_*` method returns a new request
/// and leaves the receiver as it was. The body is shared with derived requests, see [`Stream`].
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    target: Option<String>,
    message: Message,
}

impl Request {
    /// A request with an empty body, no headers and version `1.1`
    pub fn new(method: &str, uri: impl Into<UriArg>) -> Result<Self, InvalidArgument> {
        RequestBuilder::new().method(method).uri(uri).build()
    }

    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Validates and assembles a request, `headers` are stored as given
    pub fn from_parts(
        method: &str,
        uri: UriArg,
        body: BodyArg,
        headers: HeaderMap,
        version: &str,
    ) -> Result<Self, InvalidArgument> {
        let method: Method = method.parse()?;
        let version: HttpVersion = version.parse()?;
        let uri = uri.into_uri()?;

        Ok(Self {
            method,
            uri,
            target: None,
            message: Message::new(version, headers, body.into_stream()),
        })
    }

    /// The explicit target when one was set, otherwise the origin-form of the uri
    pub fn request_target(&self) -> String {
        match &self.target {
            Some(target) if !target.is_empty() => target.clone(),
            _ => target::from_uri(&self.uri),
        }
    }

    pub fn request_target_form(&self) -> RequestTargetForm {
        RequestTargetForm::of(&self.request_target())
    }

    pub fn with_request_target(&self, target: impl Into<String>) -> Result<Self, InvalidArgument> {
        let target = target.into();
        target::validate(&target)?;
        log::trace!("request target set to {}", target);
        Ok(Self {
            target: Some(target),
            ..self.clone()
        })
    }

    /// Like [`Request::with_request_target`] for a value whose type is only known at runtime,
    /// anything but text is rejected
    pub fn with_request_target_any<T: Any>(&self, target: T) -> Result<Self, InvalidArgument> {
        self.with_request_target(arg::target_from_any(target)?)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn with_method(&self, method: &str) -> Result<Self, InvalidArgument> {
        let method: Method = method.parse()?;
        Ok(Self {
            method,
            ..self.clone()
        })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Replaces the uri and synchronises the Host header with it
    ///
    /// The swap only happens when the new uri has a host, and, with `preserve_host`, only when
    /// this request has no Host header yet. Otherwise an identical copy of this request is
    /// returned, with the old uri.
    pub fn with_uri(&self, uri: Uri, preserve_host: bool) -> Self {
        let host = uri.host();
        let swap = !host.is_empty() && (!preserve_host || !self.has_header(HeaderName::HOST));
        if !swap {
            log::debug!(
                "keeping uri {} (new host `{}`, preserve host: {})",
                self.uri,
                host,
                preserve_host
            );
            return self.clone();
        }

        Self {
            message: self.message.with_host_header(host),
            uri,
            ..self.clone()
        }
    }

    pub fn version(&self) -> HttpVersion {
        self.message.version()
    }

    pub fn protocol_version(&self) -> &'static str {
        self.message.version().as_str()
    }

    pub fn with_protocol_version(&self, version: &str) -> Result<Self, InvalidArgument> {
        Ok(Self {
            message: self.message.with_version(version)?,
            ..self.clone()
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        self.message.headers()
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.message.has_header(name)
    }

    pub fn header(&self, name: &str) -> Vec<String> {
        self.message.header(name)
    }

    pub fn header_line(&self, name: &str) -> String {
        self.message.header_line(name)
    }

    pub fn with_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        Self {
            message: self.message.with_header(name, values),
            ..self.clone()
        }
    }

    pub fn with_added_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        Self {
            message: self.message.with_added_header(name, values),
            ..self.clone()
        }
    }

    pub fn without_header(&self, name: &str) -> Self {
        Self {
            message: self.message.without_header(name),
            ..self.clone()
        }
    }

    pub fn body(&self) -> &Stream {
        self.message.body()
    }

    pub fn with_body(&self, body: Stream) -> Self {
        Self {
            message: self.message.with_body(body),
            ..self.clone()
        }
    }
}

impl HttpMessage for Request {
    type Body = Stream;
    type Error = InvalidArgument;

    fn protocol_version(&self) -> &str {
        Request::protocol_version(self)
    }

    fn with_protocol_version(&self, version: &str) -> Result<Self, Self::Error> {
        Request::with_protocol_version(self, version)
    }

    fn headers(&self) -> Vec<(String, Vec<String>)> {
        Request::headers(self)
            .iter()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
            .collect()
    }

    fn has_header(&self, name: &str) -> bool {
        Request::has_header(self, name)
    }

    fn header(&self, name: &str) -> Vec<String> {
        Request::header(self, name)
    }

    fn with_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        Request::with_header(self, name, values)
    }

    fn with_added_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        Request::with_added_header(self, name, values)
    }

    fn without_header(&self, name: &str) -> Self {
        Request::without_header(self, name)
    }

    fn body(&self) -> &Stream {
        Request::body(self)
    }

    fn with_body(&self, body: Stream) -> Self {
        Request::with_body(self, body)
    }
}

impl HttpRequest for Request {
    type Uri = Uri;

    fn request_target(&self) -> String {
        Request::request_target(self)
    }

    fn with_request_target(&self, target: &str) -> Result<Self, Self::Error> {
        Request::with_request_target(self, target)
    }

    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn with_method(&self, method: &str) -> Result<Self, Self::Error> {
        Request::with_method(self, method)
    }

    fn uri(&self) -> &Uri {
        Request::uri(self)
    }

    fn with_uri(&self, uri: Uri, preserve_host: bool) -> Self {
        Request::with_uri(self, uri, preserve_host)
    }
}
