use std::borrow::Cow;
use std::collections::HashMap;
use std::mem;

use http::header::HeaderName;
use http::uri::Authority;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

use crate::{Error, Result};

/// Query parameters: every name maps to its values in the order they were given.
///
/// Input order carries no meaning; canonicalization sorts explicitly.
pub type QueryParams = HashMap<String, Vec<String>>;

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, still percent encoded as it appears in the uri.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// The uri is left untouched, signing never rewrites it.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;

        let mut query = QueryParams::new();
        if let Some(q) = uri.query() {
            for (k, v) in form_urlencoded::parse(q.as_bytes()) {
                query
                    .entry(k.into_owned())
                    .or_default()
                    .push(v.into_owned());
            }
        }

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority: uri
                .authority()
                .cloned()
                .ok_or_else(|| Error::request_invalid("request without authority is invalid for signing"))?,
            path: match uri.path() {
                "" => "/".to_string(),
                v => v.to_string(),
            },
            query,

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;

        Ok(())
    }

    /// Get the path percent decoded.
    pub fn path_percent_decoded(&self) -> Result<Cow<'_, str>> {
        percent_encoding::percent_decode_str(&self.path)
            .decode_utf8()
            .map_err(|e| Error::invalid_encoding("request path is not valid utf-8").with_source(e))
    }

    /// Host of the request without port.
    #[inline]
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Insert header if the request doesn't carry it yet.
    pub fn header_insert_if_absent(&mut self, name: HeaderName, value: &str) -> Result<()> {
        if !self.headers.contains_key(&name) {
            self.headers.insert(name, HeaderValue::from_str(value)?);
        }

        Ok(())
    }

    /// Get header names with given prefix.
    pub fn header_names_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.headers
            .keys()
            .map(|k| k.as_str())
            // Filter all header that starts with prefix
            .filter(|k| k.starts_with(prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::ACCEPT;
    use http::Request;

    fn parts(uri: &str) -> http::request::Parts {
        Request::post(uri)
            .header("X-Amz-Pay-Idempotency-Key", "abc")
            .header(ACCEPT, "application/json")
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[test]
    fn test_build_and_apply() -> anyhow::Result<()> {
        let mut p = parts("https://pay-api.amazon.eu:443/live/v2/charges?b=2&a=1&b=1&c=x+y");
        let mut req = SigningRequest::build(&mut p)?;

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.host(), "pay-api.amazon.eu");
        assert_eq!(req.path, "/live/v2/charges");
        assert_eq!(req.query["a"], vec!["1"]);
        assert_eq!(req.query["b"], vec!["2", "1"]);
        assert_eq!(req.query["c"], vec!["x y"]);
        assert!(p.headers.is_empty());

        req.header_insert_if_absent(ACCEPT, "text/plain")?;
        req.header_insert_if_absent(HeaderName::from_static("x-amz-pay-region"), "EU")?;
        assert_eq!(req.headers[ACCEPT], "application/json");

        let mut names = req.header_names_with_prefix("x-amz-pay-");
        names.sort_unstable();
        assert_eq!(names, vec!["x-amz-pay-idempotency-key", "x-amz-pay-region"]);

        req.apply(&mut p)?;
        assert_eq!(p.headers.len(), 3);
        assert_eq!(
            p.uri.to_string(),
            "https://pay-api.amazon.eu:443/live/v2/charges?b=2&a=1&b=1&c=x+y"
        );
        Ok(())
    }

    #[test]
    fn test_build_without_authority() {
        let mut p = parts("/live/v2/charges");
        let err = SigningRequest::build(&mut p).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_path_percent_decoded() -> anyhow::Result<()> {
        let mut p = parts("https://pay-api.amazon.eu/%E1%88%B4/a%20b");
        let req = SigningRequest::build(&mut p)?;
        assert_eq!(req.path_percent_decoded()?, "/\u{1234}/a b");

        let mut p = parts("https://pay-api.amazon.eu/%FF");
        let req = SigningRequest::build(&mut p)?;
        assert_eq!(
            req.path_percent_decoded().unwrap_err().kind(),
            crate::ErrorKind::InvalidEncoding
        );
        Ok(())
    }
}
