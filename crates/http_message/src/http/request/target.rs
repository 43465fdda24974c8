use crate::http::{InvalidArgument, uri::Uri};

/// The form of a request target
/// SPEC: RFC 9112 - 3.2. Request Target
/// ABNF: request-target = origin-form / absolute-form / authority-form / asterisk-form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTargetForm {
    /// ABNF: origin-form = absolute-path [ "?" query ]
    Origin,
    /// ABNF: absolute-form = absolute-URI
    Absolute,
    /// ABNF: authority-form = uri-host ":" port
    Authority,
    /// ABNF: asterisk-form = "*"
    Asterisk,
}

impl RequestTargetForm {
    pub fn of(target: &str) -> Self {
        if target == "*" {
            Self::Asterisk
        } else if target.starts_with('/') {
            Self::Origin
        } else if target.contains("://") {
            Self::Absolute
        } else {
            Self::Authority
        }
    }
}

/// The origin-form target of `uri`, an empty path becomes `/`
pub(crate) fn from_uri(uri: &Uri) -> String {
    let path = match uri.path() {
        "" => "/",
        path => path,
    };
    match uri.query() {
        "" => path.to_owned(),
        query => format!("{path}?{query}"),
    }
}

/// Matches the `\s` class: space, tab, line feed, vertical tab, form feed and carriage return
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

pub(crate) fn validate(target: &str) -> Result<(), InvalidArgument> {
    if target.bytes().any(is_whitespace) {
        return Err(InvalidArgument::TargetWhitespace(target.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_uri() {
        let cases = [
            ("https://terryl.in/zh/?test=test", "/zh/?test=test"),
            ("https://terryl.in", "/"),
            ("https://terryl.in?a=1", "/?a=1"),
            ("/relative", "/relative"),
            ("", "/"),
        ];
        for (uri, target) in cases {
            assert_eq!(from_uri(&Uri::parse(uri).unwrap()), target, "{uri}");
        }
    }

    #[test]
    fn test_target_validate() {
        assert!(validate("/newTarget/test/?q=1234").is_ok());
        assert!(validate("*").is_ok());
        for bad in ["/newTarget/te st/?q=1234", "/a\tb", "/a\nb", "/a\x0Bb", "/a\x0Cb", "/a\r"] {
            assert_eq!(
                validate(bad),
                Err(InvalidArgument::TargetWhitespace(bad.to_owned()))
            );
        }
    }

    #[test]
    fn test_target_form() {
        assert_eq!(RequestTargetForm::of("/where?q=now"), RequestTargetForm::Origin);
        assert_eq!(
            RequestTargetForm::of("http://www.example.org/pub/WWW/TheProject.html"),
            RequestTargetForm::Absolute
        );
        assert_eq!(
            RequestTargetForm::of("www.example.com:80"),
            RequestTargetForm::Authority
        );
        assert_eq!(RequestTargetForm::of("*"), RequestTargetForm::Asterisk);
    }
}
