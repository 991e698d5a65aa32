//! URL origin extraction.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Errors surfaced by icon resolution.
///
/// Everything past URL parsing degrades silently, so the only failures a
/// caller ever sees are about the input itself.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input could not be parsed as an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The input parsed but has no host to fetch from (e.g. `file:` or
    /// `data:` URLs).
    #[error("invalid url {url:?}: missing host")]
    MissingHost { url: String },
}

/// The scheme + host + optional port of a URL, with path and query dropped.
///
/// The port survives whenever the source URL names one, scheme-default or
/// not; a URL without a port gets none inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl Origin {
    /// Parse the origin out of an arbitrary URL string.
    pub fn parse(url: &str) -> Result<Self, ResolveError> {
        let parsed = Url::parse(url).map_err(|source| ResolveError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let host = parsed.host_str().ok_or_else(|| ResolveError::MissingHost {
            url: url.to_string(),
        })?;

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
            port: parsed.port().or_else(|| raw_authority_port(url)),
        })
    }
}

/// Recover a written-out scheme-default port from the raw authority text.
///
/// `url::Url::port()` folds `:80` on http and `:443` on https into `None`,
/// but a port the URL spells out is part of the origin either way.
fn raw_authority_port(url: &str) -> Option<u16> {
    let after_scheme = url.split_once("//")?.1;
    let authority = after_scheme.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, rest)| rest);
    let (_, port) = host_port.rsplit_once(':')?;
    port.parse().ok()
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}
