pub mod header;
pub mod message;
pub mod method;
pub mod request;
pub mod stream;
pub mod uri;

mod error;
pub use error::{InvalidArgument, StreamError};

mod version;
pub use version::HttpVersion;
