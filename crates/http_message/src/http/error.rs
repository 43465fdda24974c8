/// A value handed to a message, request or uri was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("unsupported HTTP method `{0}`")]
    UnsupportedMethod(String),
    #[error("unsupported HTTP protocol version `{0}`, expected one of 1.1, 2.0, 3.0")]
    UnsupportedVersion(String),
    #[error("uri should be a string or a Uri, got `{0}`")]
    UriType(&'static str),
    #[error("request target should be a string, got `{0}`")]
    TargetType(&'static str),
    #[error("request target `{0}` must not contain whitespace")]
    TargetWhitespace(String),
    #[error("unsupported uri scheme `{0}`, expected http, https or none")]
    UnsupportedScheme(String),
    #[error("invalid port `{0}`, expected a number between 1 and 65535")]
    InvalidPort(String),
    #[error("invalid IP literal `{0}`")]
    InvalidIpLiteral(String),
    #[error("invalid host `{0}`")]
    InvalidHost(String),
}

/// Failure of an operation on a body stream
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("stream is detached")]
    Detached,
    #[error("stream is not readable")]
    NotReadable,
    #[error("stream is not writable")]
    NotWritable,
    #[error("stream is not seekable")]
    NotSeekable,
    #[error("invalid stream mode `{0}`")]
    InvalidMode(String),
}
