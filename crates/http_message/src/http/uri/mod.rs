//! URI references
//! SPEC: RFC 3986 - 3. Syntax Components
//! ABNF: URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]

use std::{fmt, str::FromStr};

use memchr::{memchr, memrchr};
use uhsapi::http::UriInterface;

use crate::http::InvalidArgument;

mod encode;
mod host;

use encode::{encode_component, is_path_char, is_query_char, is_user_info_char};
pub use host::{IpLiteral, IpvFuture, UriHost};

pub type UriPort = u16;

/// An immutable URI reference
///
/// Every component is stored percent-encoded. Derivations through the `with_*` methods return
/// a new [`Uri`] and leave the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    user_info: String,
    host: String,
    port: Option<UriPort>,
    path: String,
    query: String,
    fragment: String,
}

impl Uri {
    pub fn parse(input: &str) -> Result<Self, InvalidArgument> {
        let (rest, fragment) = split_at_byte(input, b'#');
        let (rest, query) = split_at_byte(rest, b'?');
        let (scheme, rest) = split_scheme(rest);

        let mut uri = Uri {
            scheme: filter_scheme(scheme.unwrap_or_default())?,
            path: encode_component(rest, is_path_char),
            query: encode_component(query.unwrap_or_default(), is_query_char),
            fragment: encode_component(fragment.unwrap_or_default(), is_query_char),
            ..Default::default()
        };

        if let Some(rest) = rest.strip_prefix("//") {
            let end = memchr(b'/', rest.as_bytes()).unwrap_or(rest.len());
            let (authority, path) = rest.split_at(end);
            uri.path = encode_component(path, is_path_char);

            let host_port = match memrchr(b'@', authority.as_bytes()) {
                Some(at) => {
                    uri.user_info = encode_component(&authority[..at], is_user_info_char);
                    &authority[at + 1..]
                }
                None => authority,
            };
            let (host, port) = split_port(host_port)?;
            uri.host = filter_host(host)?;
            uri.port = port.map(filter_port).transpose()?.flatten();
        }

        Ok(uri)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// ABNF: authority = [ userinfo "@" ] host [ ":" port ]
    ///
    /// Empty when there is no host, the port is omitted when it is the scheme default.
    pub fn authority(&self) -> String {
        if self.host.is_empty() {
            return String::new();
        }
        let mut authority = String::with_capacity(self.user_info.len() + self.host.len() + 7);
        if !self.user_info.is_empty() {
            authority.push_str(&self.user_info);
            authority.push('@');
        }
        authority.push_str(&self.host);
        if let Some(port) = self.port() {
            authority.push(':');
            authority.push_str(&port.to_string());
        }
        authority
    }

    pub fn user_info(&self) -> &str {
        &self.user_info
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Classifies the host, `None` when the uri has no host
    pub fn host_kind(&self) -> Option<UriHost> {
        if self.host.is_empty() {
            return None;
        }
        // Hosts are validated on the way in
        self.host.parse().ok()
    }

    /// The port, `None` when it is absent or the default port of the scheme
    pub fn port(&self) -> Option<UriPort> {
        self.port.filter(|port| Some(*port) != default_port(&self.scheme))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn with_scheme(&self, scheme: &str) -> Result<Self, InvalidArgument> {
        Ok(Self {
            scheme: filter_scheme(scheme)?,
            ..self.clone()
        })
    }

    /// An empty user clears the user info, the password is only kept alongside a user
    pub fn with_user_info(&self, user: &str, password: Option<&str>) -> Self {
        let mut user_info = encode_component(user, is_user_info_char);
        if let Some(password) = password.filter(|p| !user.is_empty() && !p.is_empty()) {
            user_info.push(':');
            user_info.push_str(&encode_component(password, is_user_info_char));
        }
        Self {
            user_info,
            ..self.clone()
        }
    }

    pub fn with_host(&self, host: &str) -> Result<Self, InvalidArgument> {
        Ok(Self {
            host: filter_host(host)?,
            ..self.clone()
        })
    }

    pub fn with_port(&self, port: Option<UriPort>) -> Result<Self, InvalidArgument> {
        if port == Some(0) {
            return Err(InvalidArgument::InvalidPort("0".to_owned()));
        }
        Ok(Self {
            port,
            ..self.clone()
        })
    }

    pub fn with_path(&self, path: &str) -> Self {
        Self {
            path: encode_component(path, is_path_char),
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            query: encode_component(query, is_query_char),
            ..self.clone()
        }
    }

    pub fn with_fragment(&self, fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Self {
            fragment: encode_component(fragment, is_query_char),
            ..self.clone()
        }
    }
}

impl FromStr for Uri {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = InvalidArgument;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        let authority = self.authority();
        if !authority.is_empty() {
            write!(f, "//{}", authority)?;
        }

        if !authority.is_empty() && !self.path.is_empty() && !self.path.starts_with('/') {
            // A rootless path cannot follow an authority
            write!(f, "/{}", self.path)?;
        } else if authority.is_empty() && self.path.starts_with("//") {
            // Otherwise the path would be read back as an authority
            write!(f, "/{}", self.path.trim_start_matches('/'))?;
        } else {
            f.write_str(&self.path)?;
        }

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl UriInterface for Uri {
    type Error = InvalidArgument;

    fn scheme(&self) -> &str {
        Uri::scheme(self)
    }

    fn authority(&self) -> String {
        Uri::authority(self)
    }

    fn user_info(&self) -> &str {
        Uri::user_info(self)
    }

    fn host(&self) -> &str {
        Uri::host(self)
    }

    fn port(&self) -> Option<u16> {
        Uri::port(self)
    }

    fn path(&self) -> &str {
        Uri::path(self)
    }

    fn query(&self) -> &str {
        Uri::query(self)
    }

    fn fragment(&self) -> &str {
        Uri::fragment(self)
    }

    fn with_scheme(&self, scheme: &str) -> Result<Self, Self::Error> {
        Uri::with_scheme(self, scheme)
    }

    fn with_user_info(&self, user: &str, password: Option<&str>) -> Self {
        Uri::with_user_info(self, user, password)
    }

    fn with_host(&self, host: &str) -> Result<Self, Self::Error> {
        Uri::with_host(self, host)
    }

    fn with_port(&self, port: Option<u16>) -> Result<Self, Self::Error> {
        Uri::with_port(self, port)
    }

    fn with_path(&self, path: &str) -> Self {
        Uri::with_path(self, path)
    }

    fn with_query(&self, query: &str) -> Self {
        Uri::with_query(self, query)
    }

    fn with_fragment(&self, fragment: &str) -> Self {
        Uri::with_fragment(self, fragment)
    }
}

fn default_port(scheme: &str) -> Option<UriPort> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

fn split_at_byte(s: &str, delim: u8) -> (&str, Option<&str>) {
    match memchr(delim, s.as_bytes()) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    }
}

/// ABNF: scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn split_scheme(s: &str) -> (Option<&str>, &str) {
    let Some(colon) = memchr(b':', s.as_bytes()) else {
        return (None, s);
    };
    let candidate = &s.as_bytes()[..colon];
    let is_scheme = candidate.first().is_some_and(u8::is_ascii_alphabetic)
        && candidate
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
    if is_scheme {
        (Some(&s[..colon]), &s[colon + 1..])
    } else {
        (None, s)
    }
}

/// Splits `host[:port]`, bracketed IP literals may contain colons themselves
/// Only a `:` may follow a bracketed host
fn split_port(s: &str) -> Result<(&str, Option<&str>), InvalidArgument> {
    let host_end = match s.strip_prefix('[') {
        Some(rest) => memchr(b']', rest.as_bytes()).map_or(s.len(), |idx| idx + 2),
        None => memchr(b':', s.as_bytes()).unwrap_or(s.len()),
    };
    let (host, rest) = s.split_at(host_end);
    match rest.strip_prefix(':') {
        Some(port) => Ok((host, Some(port))),
        None if rest.is_empty() => Ok((host, None)),
        None => Err(InvalidArgument::InvalidIpLiteral(s.to_owned())),
    }
}

fn filter_scheme(scheme: &str) -> Result<String, InvalidArgument> {
    let scheme = scheme.to_ascii_lowercase();
    match scheme.as_str() {
        "" | "http" | "https" => Ok(scheme),
        _ => Err(InvalidArgument::UnsupportedScheme(scheme)),
    }
}

fn filter_host(host: &str) -> Result<String, InvalidArgument> {
    let host = host.to_ascii_lowercase();
    host.parse::<UriHost>()?;
    Ok(host)
}

/// An empty port is allowed by the grammar and means no port
fn filter_port(port: &str) -> Result<Option<UriPort>, InvalidArgument> {
    if port.is_empty() {
        return Ok(None);
    }
    let err = || InvalidArgument::InvalidPort(port.to_owned());
    if !port.bytes().all(|c| c.is_ascii_digit()) {
        return Err(err());
    }
    match port.parse::<u32>().map_err(|_| err())? {
        0 | 65536.. => Err(err()),
        port => Ok(Some(port as UriPort)),
    }
}
