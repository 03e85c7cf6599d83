//! Domain classification using the Public Suffix List.
//!
//! This module splits the host of a URL into subdomain, registrable domain
//! label and effective TLD. Suffix matching itself is done by `psl`.
//!
//! Key functions:
//! - `classify()` - Parses a URL string into a [`ParsedUrl`]

use psl::{List, Psl, Type};
use url::{Host, Url};

use crate::error_handling::ClassifyError;

/// A URL with its host split along public-suffix boundaries.
///
/// For `https://mail.example.co.uk:8443/path` the fields are
/// `subdomain = "mail"`, `domain = "example"`, `tld = "co.uk"`, `port = "8443"`.
/// A URL without a host (e.g. `mailto:`) has all domain fields empty.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    /// Labels in front of the registrable domain, dot-joined
    pub subdomain: String,
    /// Leftmost label of the registrable domain
    pub domain: String,
    /// Effective TLD, everything after the domain label
    pub tld: String,
    /// Explicit non-default port, empty otherwise
    pub port: String,
    /// Whether the matched suffix comes from the ICANN section of the list
    pub icann: bool,
    /// The generic parse result
    pub url: Url,
}

impl ParsedUrl {
    fn hostless(url: Url) -> Self {
        ParsedUrl {
            subdomain: String::new(),
            domain: String::new(),
            tld: String::new(),
            port: String::new(),
            icann: false,
            url,
        }
    }

    /// Returns true if the URL had no host to classify.
    pub fn is_hostless(&self) -> bool {
        self.tld.is_empty()
    }

    /// The registrable domain (eTLD+1), e.g. `example.co.uk`.
    pub fn registrable_domain(&self) -> String {
        if self.is_hostless() {
            String::new()
        } else {
            format!("{}.{}", self.domain, self.tld)
        }
    }
}

/// Classifies a URL string into subdomain, domain and TLD.
///
/// # Arguments
///
/// * `list` - The Public Suffix List instance
/// * `raw` - The URL to classify, already cut off from any trailing metadata
///
/// # Errors
///
/// Returns an error if the string is not a URL, if the host is an IP address,
/// if the suffix list yields no registrable domain, or if the resolved eTLD+1
/// contains no dot (single-label hosts such as `localhost`).
///
/// A host that is not under any ICANN suffix and is itself the matched suffix
/// (e.g. `github.io`, or `foo.bar` under an unknown TLD) is taken as its own
/// registrable domain rather than rejected.
pub fn classify(list: &List, raw: &str) -> Result<ParsedUrl, ClassifyError> {
    let url = Url::parse(raw)?;

    let host = match url.host() {
        Some(Host::Domain(d)) if !d.is_empty() => d.to_ascii_lowercase(),
        Some(Host::Ipv4(ip)) => return Err(ClassifyError::IpAddress(ip.to_string())),
        Some(Host::Ipv6(ip)) => return Err(ClassifyError::IpAddress(ip.to_string())),
        _ => return Ok(ParsedUrl::hostless(url)),
    };
    // FQDN form; the suffix list matches without the root dot
    let host = host.strip_suffix('.').unwrap_or(&host).to_string();
    let port = url.port().map(|p| p.to_string()).unwrap_or_default();

    let (suffix, icann) = match list.suffix(host.as_bytes()) {
        Some(s) => (
            String::from_utf8_lossy(s.as_bytes()).into_owned(),
            s.typ() == Some(Type::Icann),
        ),
        None => (String::new(), false),
    };

    let etld1 = match list.domain(host.as_bytes()) {
        Some(d) => String::from_utf8_lossy(d.as_bytes()).into_owned(),
        None if !icann && suffix == host => host.clone(),
        None => return Err(ClassifyError::NotRegistrable(host)),
    };

    let (domain, tld) = etld1
        .split_once('.')
        .ok_or_else(|| ClassifyError::MissingDot(raw.to_string()))?;

    let subdomain = host
        .strip_suffix(etld1.as_str())
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or_default()
        .to_string();

    Ok(ParsedUrl {
        subdomain,
        domain: domain.to_string(),
        tld: tld.to_string(),
        port,
        icann,
        url,
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
