//! Factory functions for the message value objects

use std::path::Path;

use crate::http::{
    InvalidArgument, StreamError,
    request::{Request, UriArg},
    stream::{Resource, Stream, StreamMode},
    uri::Uri,
};

pub fn create_request(method: &str, uri: impl Into<UriArg>) -> Result<Request, InvalidArgument> {
    Request::new(method, uri)
}

pub fn create_uri(uri: &str) -> Result<Uri, InvalidArgument> {
    Uri::parse(uri)
}

/// An in-memory stream holding `content`, positioned at offset 0
pub fn create_stream(content: &str) -> Stream {
    Stream::from_bytes(content)
}

pub fn create_stream_from_file(path: impl AsRef<Path>, mode: &str) -> Result<Stream, StreamError> {
    Stream::open(path, mode)
}

pub fn create_stream_from_resource<R: Resource + 'static>(
    resource: R,
    mode: &str,
) -> Result<Stream, StreamError> {
    let mode: StreamMode = mode.parse()?;
    Ok(Stream::from_resource(resource, mode))
}
