//! Address formats: e-mail, web and IP

use crate::resolver::FormatContext;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alpha:]]\w*([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$")
        .expect("valid email regex")
});

static HTTP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("valid http regex")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+(://)?\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("valid url regex")
});

/// Mailbox address; the local part must start with a letter.
pub fn email(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || EMAIL.is_match(text)
}

/// Host name with an optional `http://` or `https://` scheme.
pub fn http(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || HTTP.is_match(text)
}

/// Host name with an optional arbitrary scheme.
pub fn url(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || URL.is_match(text)
}

/// IPv4 or IPv6 address.
pub fn ip(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || text.parse::<IpAddr>().is_ok()
}

/// Dotted-quad IPv4 address.
pub fn ipv4(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || text.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address.
pub fn ipv6(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || text.parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;
    use rstest::rstest;

    fn check(f: fn(&str, &FormatContext<'_>) -> bool, text: &str) -> bool {
        let config = FormatConfig::default();
        f(
            text,
            &FormatContext {
                config: &config,
                separator: None,
            },
        )
    }

    #[rstest]
    #[case("", true)]
    #[case("john@example.com", true)]
    #[case("john.doe+tag@mail.example.co.uk", true)]
    #[case("o'hara@example.com", true)]
    #[case("1john@example.com", false)]
    #[case("john@example", false)]
    #[case("john@@example.com", false)]
    #[case("john example@example.com", false)]
    fn email_format(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(email, text), expected, "{text:?}");
    }

    #[rstest]
    #[case("example.com", true)]
    #[case("http://example.com", true)]
    #[case("https://www.example.com", true)]
    #[case("ftp://example.com", false)]
    #[case("example", false)]
    fn http_format(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(http, text), expected, "{text:?}");
    }

    #[test]
    fn url_accepts_any_scheme() {
        assert!(check(url, "ftp://files.example.com"));
        assert!(check(url, "https://example.com"));
        assert!(!check(url, "://example.com"));
    }

    #[rstest]
    #[case("192.168.0.1", true, true, false)]
    #[case("::1", true, false, true)]
    #[case("2001:db8::ff00:42:8329", true, false, true)]
    #[case("256.0.0.1", false, false, false)]
    #[case("10.0.0", false, false, false)]
    fn ip_formats(
        #[case] text: &str,
        #[case] any: bool,
        #[case] v4: bool,
        #[case] v6: bool,
    ) {
        assert_eq!(check(ip, text), any);
        assert_eq!(check(ipv4, text), v4);
        assert_eq!(check(ipv6, text), v6);
    }
}
