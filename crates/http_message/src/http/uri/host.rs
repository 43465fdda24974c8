use std::{
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use crate::http::{
    InvalidArgument,
    uri::encode::{is_hex, is_sub_delim, is_unreserved},
};

/// SPEC: RFC 3986 - 3.2.2. Host
/// ABNF: IP-literal = "[" ( IPv6address / IPvFuture  ) "]"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpLiteral {
    Ipv6(Ipv6Addr),
    IpvFuture(IpvFuture),
}

impl IpLiteral {
    /// Returns `None` when the host is not bracketed
    fn parse(s: &str) -> Result<Option<Self>, InvalidArgument> {
        let Some(inner) = s.strip_prefix('[') else {
            return Ok(None);
        };
        let err = || InvalidArgument::InvalidIpLiteral(s.to_owned());
        let inner = inner.strip_suffix(']').ok_or_else(err)?;
        Ok(Some(match inner.strip_prefix(['v', 'V']) {
            Some(future) => Self::IpvFuture(IpvFuture::parse(future).ok_or_else(err)?),
            None => Self::Ipv6(inner.parse().map_err(|_| err())?),
        }))
    }
}

/// ABNF: IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpvFuture {
    pub version: u32,
    pub content: String,
}

impl IpvFuture {
    fn parse(s: &str) -> Option<Self> {
        let (version, content) = s.split_once('.')?;
        if content.is_empty()
            || !content
                .bytes()
                .all(|b| is_unreserved(b) || is_sub_delim(b) || b == b':')
        {
            return None;
        }
        Some(Self {
            version: u32::from_str_radix(version, 16).ok()?,
            content: content.to_owned(),
        })
    }
}

/// The host component of an authority, see [`super::Uri::host_kind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriHost {
    IpLiteral(IpLiteral),
    Ipv4(Ipv4Addr),
    RegName(String),
}

impl FromStr for UriHost {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(addr) = IpLiteral::parse(s)? {
            return Ok(Self::IpLiteral(addr));
        }

        match Ipv4Addr::from_str(s) {
            Ok(ipv4) => Ok(Self::Ipv4(ipv4)),
            Err(_) if is_reg_name(s) => Ok(Self::RegName(s.to_owned())),
            Err(_) => Err(InvalidArgument::InvalidHost(s.to_owned())),
        }
    }
}

/// ABNF: reg-name = *( unreserved / pct-encoded / sub-delims )
fn is_reg_name(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'%' if idx + 2 < bytes.len() && is_hex(bytes[idx + 1]) && is_hex(bytes[idx + 2]) => {
                idx += 3
            }
            b if is_unreserved(b) || is_sub_delim(b) => idx += 1,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_host_valid_ipv6() {
        let host: UriHost = "[::1]".parse().unwrap();
        assert!(matches!(
            host,
            UriHost::IpLiteral(IpLiteral::Ipv6(Ipv6Addr::LOCALHOST))
        ))
    }

    #[test]
    fn test_uri_host_valid_ipvfuture() {
        let host: UriHost = "[v5.123]".parse().unwrap();
        assert_eq!(
            host,
            UriHost::IpLiteral(IpLiteral::IpvFuture(IpvFuture {
                version: 5,
                content: "123".to_owned(),
            }))
        );
    }

    #[test]
    fn test_uri_host_invalid_ipv6() {
        let host: Result<UriHost, _> = "[1234::gggg]".parse();
        assert_eq!(
            host,
            Err(InvalidArgument::InvalidIpLiteral("[1234::gggg]".to_owned()))
        );
        assert!("[vz.1]".parse::<UriHost>().is_err());
        assert!("[v1.]".parse::<UriHost>().is_err());
        assert!("[::1".parse::<UriHost>().is_err());
    }

    #[test]
    fn test_uri_host_ipv4_and_name() {
        assert_eq!(
            "127.0.0.1".parse::<UriHost>().unwrap(),
            UriHost::Ipv4(Ipv4Addr::LOCALHOST)
        );
        assert_eq!(
            "terryl.in".parse::<UriHost>().unwrap(),
            UriHost::RegName("terryl.in".to_owned())
        );
        assert_eq!(
            "caf%C3%A9.example".parse::<UriHost>().unwrap(),
            UriHost::RegName("caf%C3%A9.example".to_owned())
        );
    }

    #[test]
    fn test_uri_host_invalid_reg_name() {
        assert_eq!(
            "exa mple.com".parse::<UriHost>(),
            Err(InvalidArgument::InvalidHost("exa mple.com".to_owned()))
        );
        assert!("a<b".parse::<UriHost>().is_err());
        assert!("bad%4".parse::<UriHost>().is_err());
        assert!("".parse::<UriHost>().is_ok());
    }
}
