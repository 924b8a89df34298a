//! Decomposition of a URL into the fields that get compared.

use std::collections::{BTreeMap, BTreeSet};
use url::Url;

/// The comparable fields of one absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    /// Scheme without the trailing `:`.
    pub protocol: String,
    /// Host plus `:port` when the port is not the scheme's default.
    pub host: String,
    /// Path exactly as serialized by the parser (leading `/` kept).
    pub pathname: String,
    /// Decoded query parameters; a repeated name keeps its last value.
    pub query: BTreeMap<String, String>,
}

impl UrlComponents {
    /// Parses `input` as an absolute URL.
    ///
    /// Inputs without a scheme fail with `ParseError::RelativeUrlWithoutBase`.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(input)?;
        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        // `port()` is None for the scheme's default port, so "a.com:443" over
        // https reads back as "a.com".
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => String::new(),
        };

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect::<BTreeMap<_, _>>();

        Self {
            protocol: url.scheme().to_string(),
            host,
            pathname: url.path().to_string(),
            query,
        }
    }

    /// Value of query parameter `name`, or `""` when absent.
    pub fn param(&self, name: &str) -> &str {
        self.query.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Union of both URLs' query parameter names, ascending by UTF-16 code units.
///
/// UTF-16 order matches browser string sorting; it differs from byte order when
/// names mix U+E000..=U+FFFF characters with characters outside the BMP.
pub fn param_names_union<'a>(a: &'a UrlComponents, b: &'a UrlComponents) -> Vec<&'a str> {
    let mut names: Vec<&str> = a
        .query
        .keys()
        .chain(b.query.keys())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    names.sort_by(|x, y| x.encode_utf16().cmp(y.encode_utf16()));
    names
}
