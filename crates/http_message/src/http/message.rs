use uhsapi::http::IntoHeaderValues;

use crate::http::{
    HttpVersion, InvalidArgument,
    header::{HeaderMap, HeaderName, HeaderValue},
    stream::Stream,
};

/// The parts shared by every HTTP message: protocol version, headers and body
///
/// All `with_*` methods return a modified copy. The body [`Stream`] is a shared handle, so a
/// copy refers to the same body unless [`Message::with_body`] replaces it.
#[derive(Debug, Clone, Default)]
pub struct Message {
    version: HttpVersion,
    headers: HeaderMap,
    body: Stream,
}

impl Message {
    pub fn new(version: HttpVersion, headers: HeaderMap, body: Stream) -> Self {
        Self {
            version,
            headers,
            body,
        }
    }

    pub fn version(&self) -> HttpVersion {
        self.version
    }

    pub fn with_version(&self, version: &str) -> Result<Self, InvalidArgument> {
        Ok(Self {
            version: version.parse()?,
            ..self.clone()
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// The values of `name`, empty when the header is absent
    pub fn header(&self, name: &str) -> Vec<String> {
        self.headers
            .get(name)
            .map(HeaderValue::to_vec)
            .unwrap_or_default()
    }

    pub fn header_line(&self, name: &str) -> String {
        self.headers
            .get(name)
            .map(HeaderValue::to_line)
            .unwrap_or_default()
    }

    pub fn with_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        let mut message = self.clone();
        message
            .headers
            .insert(name, values.into_header_values().into_iter().collect());
        message
    }

    /// Replaces the Host header, a new Host header goes first
    pub(crate) fn with_host_header(&self, host: &str) -> Self {
        let mut message = self.clone();
        message.headers.insert_first(
            HeaderName::HOST,
            std::iter::once(host.to_owned()).collect(),
        );
        message
    }

    pub fn with_added_header<V: IntoHeaderValues>(&self, name: &str, values: V) -> Self {
        let mut message = self.clone();
        message.headers.append(name, values.into_header_values());
        message
    }

    pub fn without_header(&self, name: &str) -> Self {
        let mut message = self.clone();
        message.headers.remove(name);
        message
    }

    pub fn body(&self) -> &Stream {
        &self.body
    }

    pub fn with_body(&self, body: Stream) -> Self {
        Self {
            body,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_header_keeps_source() {
        let message = Message::default().with_header("Accept", "text/html");
        let derived = message.with_header("accept", ["application/json", "text/plain"]);

        assert_eq!(message.header("ACCEPT"), ["text/html"]);
        assert_eq!(derived.header("Accept"), ["application/json", "text/plain"]);
        assert_eq!(derived.header_line("accept"), "application/json, text/plain");
        assert_eq!(derived.headers().iter().next().unwrap().0.as_str(), "accept");

        let added = message.with_added_header("ACCEPT", "text/plain");
        assert_eq!(added.headers().iter().next().unwrap().0.as_str(), "Accept");
    }

    #[test]
    fn test_message_added_and_removed_headers() {
        let message = Message::default()
            .with_added_header("X-Trace", "a")
            .with_added_header("x-trace", vec!["b".to_owned()]);
        assert_eq!(message.header_line("X-TRACE"), "a, b");

        let removed = message.without_header("x-Trace");
        assert!(!removed.has_header("X-Trace"));
        assert!(message.has_header("X-Trace"));
        assert!(removed.header("X-Trace").is_empty());
        assert_eq!(removed.header_line("X-Trace"), "");
    }

    #[test]
    fn test_message_version() {
        let message = Message::default();
        assert_eq!(message.version(), HttpVersion::HTTP_1_1);
        assert_eq!(
            message.with_version("2.0").unwrap().version(),
            HttpVersion::HTTP_2_0
        );
        assert_eq!(
            message.with_version("1.5").unwrap_err(),
            InvalidArgument::UnsupportedVersion("1.5".to_owned())
        );
    }

    #[test]
    fn test_message_body_is_shared_until_replaced() {
        let message = Message::default();
        let copy = message.with_header("Accept", "*/*");
        assert!(message.body().ptr_eq(copy.body()));

        let body = Stream::from_bytes("payload");
        let replaced = message.with_body(body.clone());
        assert!(replaced.body().ptr_eq(&body));
        assert!(!message.body().ptr_eq(&body));
    }

    #[test]
    fn test_message_host_header_goes_first() {
        let message = Message::default()
            .with_header("Accept", "*/*")
            .with_host_header("example.com");
        let first = message.headers().iter().next().unwrap();
        assert_eq!(first.0.as_str(), "Host");
        assert_eq!(message.header_line("host"), "example.com");
    }
}
