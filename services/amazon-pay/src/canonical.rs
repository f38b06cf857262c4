// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use http::HeaderMap;
use paysign_core::encode::percent_encode;
use paysign_core::hash::{hex_sha256, EMPTY_STRING_SHA256};
use paysign_core::{Error, QueryParams, Result};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Extract the path of a request target.
///
/// Only a leading `//` is special: it starts an authority that runs up to
/// the next `/`, so `//foo//` has authority `foo` and path `//`. Anything
/// else is a path already and is returned as is, including `?`, `#` and `:`.
pub fn uri_reference_path(uri: &str) -> &str {
    match uri.strip_prefix("//") {
        Some(rest) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => uri,
    }
}

/// Canonicalize a decoded request path.
///
/// Empty segments are dropped, every remaining segment is percent encoded
/// and the result always starts with `/`.
///
/// ```
/// use paysign_amazon_pay::canonical_path;
///
/// assert_eq!(canonical_path(""), "/");
/// assert_eq!(canonical_path("//live//v2/"), "/live/v2");
/// assert_eq!(canonical_path("/a b"), "/a%20b");
/// ```
pub fn canonical_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|v| !v.is_empty()) {
        out.push('/');
        out.push_str(&percent_encode(segment));
    }

    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Canonicalize query parameters.
///
/// Every value becomes its own `name=value` pair. Pairs are sorted by their
/// encoded name and then their encoded value, comparing bytes. Names without
/// any value are left out.
pub fn canonical_query_string(query: &QueryParams) -> String {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .flat_map(|(name, values)| {
            let name = percent_encode(name);
            values
                .iter()
                .map(move |value| (name.clone(), percent_encode(value)))
        })
        .collect();
    pairs.sort_unstable();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Headers selected for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaders {
    /// One `name:value\n` line per signed header, sorted by name.
    pub block: String,
    /// Signed header names joined by `;`.
    pub signed_headers: String,
}

/// Select and normalize the headers named in `required`.
///
/// Names are lowercased and values trimmed. A header that carries several
/// values is rendered with its values joined by `,`. Fails with
/// [`ErrorKind::MissingHeader`](paysign_core::ErrorKind::MissingHeader) if
/// any required header is absent.
pub fn canonical_headers(headers: &HeaderMap, required: &[&str]) -> Result<CanonicalHeaders> {
    let mut selected = BTreeMap::new();
    for name in required {
        let name = name.to_ascii_lowercase();

        let mut values = headers.get_all(name.as_str()).into_iter().peekable();
        if values.peek().is_none() {
            return Err(Error::missing_header(&name));
        }

        let mut joined = String::new();
        for (idx, value) in values.enumerate() {
            let value = value.to_str().map_err(|e| {
                Error::invalid_encoding(format!("value of header {name} is not visible ascii"))
                    .with_source(e)
            })?;
            if idx > 0 {
                joined.push(',');
            }
            joined.push_str(value.trim());
        }
        selected.insert(name, joined);
    }

    let mut block = String::new();
    for (name, value) in selected.iter() {
        writeln!(block, "{name}:{value}")?;
    }
    let signed_headers = selected.keys().map(String::as_str).collect::<Vec<_>>().join(";");

    Ok(CanonicalHeaders {
        block,
        signed_headers,
    })
}

/// Build the canonical request of a call.
///
/// `uri` is a request path, see [`uri_reference_path`] for how a leading
/// `//` is treated. The result is the method, canonical path, canonical query, header
/// block, signed header names and hex SHA-256 of `payload` joined by `\n`.
pub fn canonical_request(
    method: &str,
    uri: &str,
    query: &QueryParams,
    headers: &HeaderMap,
    required: &[&str],
    payload: &[u8],
) -> Result<String> {
    // Headers go first so a missing one fails before any work is done.
    let headers = canonical_headers(headers, required)?;

    build_canonical_request(method, uri_reference_path(uri), query, &headers, payload)
}

/// Assemble a canonical request from a decoded path and already selected
/// headers.
pub(crate) fn build_canonical_request(
    method: &str,
    path: &str,
    query: &QueryParams,
    headers: &CanonicalHeaders,
    payload: &[u8],
) -> Result<String> {
    // 512 fits the header block of most requests.
    let mut f = String::with_capacity(512);
    writeln!(f, "{method}")?;
    writeln!(f, "{}", canonical_path(path))?;
    writeln!(f, "{}", canonical_query_string(query))?;
    writeln!(f, "{}", headers.block)?;
    writeln!(f, "{}", headers.signed_headers)?;
    if payload.is_empty() {
        f.push_str(EMPTY_STRING_SHA256);
    } else {
        f.push_str(&hex_sha256(payload));
    }

    Ok(f)
}

/// Build the string to sign from a canonical request.
///
/// `algorithm` is embedded verbatim.
pub fn string_to_sign(algorithm: &str, canonical_request: &str) -> String {
    format!("{algorithm}\n{}", hex_sha256(canonical_request.as_bytes()))
}
