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

use crate::{init, verify, PRIVATE_KEY, PUBLIC_KEY_ID};
use anyhow::Result;
use chrono::TimeZone;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use log::debug;
use paysign_amazon_pay::{
    canonical_request, string_to_sign, Credential, Region, RequestSigner, SignatureAlgorithm,
    SIGNED_HEADERS,
};
use paysign_core::encode::percent_encode;
use paysign_core::{Context, ErrorKind, QueryParams, SignRequest};
use pretty_assertions::assert_eq;
use serde::Deserialize;

const VECTORS: &str = include_str!("../testdata/canonical_requests.json");

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    uri: String,
    method: String,
    parameters: QueryParams,
    payload: String,
    canonical_request: String,
    string_to_sign: String,
}

fn vectors() -> Vec<Vector> {
    serde_json::from_str(VECTORS).expect("test vectors must be valid json")
}

fn headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Accept", HeaderValue::from_static("application/json"));
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    headers.insert("X-Amz-Pay-Date", HeaderValue::from_static("20180524T223710Z"));
    headers.insert("X-Amz-Pay-Host", HeaderValue::from_static("pay-api.amazon.eu"));
    headers.insert("X-Amz-Pay-Region", HeaderValue::from_static("EU"));
    headers
}

#[test]
fn test_canonical_request_vectors() -> Result<()> {
    init();

    let vectors = vectors();
    assert_eq!(vectors.len(), 17);

    for v in vectors {
        debug!("checking vector {}", v.name);

        let creq = canonical_request(
            &v.method,
            &v.uri,
            &v.parameters,
            &headers(),
            &SIGNED_HEADERS,
            v.payload.as_bytes(),
        )?;
        assert_eq!(creq, v.canonical_request, "canonical request of {}", v.name);

        let sts = string_to_sign(SignatureAlgorithm::Default.as_str(), &creq);
        assert_eq!(sts, v.string_to_sign, "string to sign of {}", v.name);
    }
    Ok(())
}

#[test]
fn test_canonical_request_ignores_input_order() -> Result<()> {
    let mut forward = QueryParams::new();
    let mut backward = QueryParams::new();
    let names = ["b", "A.10", "a", "A.2", "Zoo", "A.1"];
    for name in names {
        forward.insert(name.to_string(), vec!["2".to_string(), "1".to_string()]);
    }
    for name in names.iter().rev() {
        backward.insert(name.to_string(), vec!["1".to_string(), "2".to_string()]);
    }

    let headers = headers();
    let mut entries: Vec<_> = headers.iter().collect();
    entries.reverse();
    let mut reversed = HeaderMap::new();
    for (name, value) in entries {
        reversed.insert(name.clone(), value.clone());
    }

    let left = canonical_request("GET", "/", &forward, &headers, &SIGNED_HEADERS, b"")?;
    let right = canonical_request("GET", "/", &backward, &reversed, &SIGNED_HEADERS, b"")?;
    assert_eq!(left, right);
    Ok(())
}

#[test]
fn test_canonical_request_missing_header() {
    for name in SIGNED_HEADERS {
        let mut headers = headers();
        headers.remove(name);

        let err = canonical_request(
            "GET",
            "/",
            &QueryParams::new(),
            &headers,
            &SIGNED_HEADERS,
            b"",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader, "removed {name}");
    }
}

/// Signing a real request must sign exactly the string of the vector.
///
/// Network-path references are skipped: an `http::Uri` always has an
/// authority, so `//foo//` can only appear as a path there.
#[test]
fn test_request_signer_vectors() -> Result<()> {
    init();

    let time = chrono::Utc
        .with_ymd_and_hms(2018, 5, 24, 22, 37, 10)
        .single()
        .expect("valid time");
    let signer = RequestSigner::new(Region::Eu).with_time(time);
    let cred = Credential::from_pem(PUBLIC_KEY_ID, PRIVATE_KEY)?;

    for v in vectors().into_iter().filter(|v| !v.uri.starts_with("//")) {
        let path = v
            .uri
            .split('/')
            .map(percent_encode)
            .collect::<Vec<_>>()
            .join("/");
        let mut query = Vec::new();
        for (name, values) in &v.parameters {
            for value in values {
                query.push(format!("{}={}", percent_encode(name), percent_encode(value)));
            }
        }
        let uri = if query.is_empty() {
            format!("https://pay-api.amazon.eu{path}")
        } else {
            format!("https://pay-api.amazon.eu{path}?{}", query.join("&"))
        };

        let mut parts = http::Request::builder()
            .method(v.method.as_str())
            .uri(uri)
            .body(())?
            .into_parts()
            .0;
        signer.sign_request(&Context::new(), &mut parts, v.payload.as_bytes(), Some(&cred))?;

        let authorization = parts.headers[AUTHORIZATION].to_str()?;
        let (prefix, signature) = authorization
            .split_once(", Signature=")
            .expect("authorization must carry a signature");
        assert_eq!(
            prefix,
            format!(
                "AMZN-PAY-RSASSA-PSS PublicKeyId={PUBLIC_KEY_ID}, \
                 SignedHeaders=accept;content-type;x-amz-pay-date;x-amz-pay-host;x-amz-pay-region"
            )
        );
        assert!(
            verify(SignatureAlgorithm::Default, &v.string_to_sign, signature),
            "signature of {} must verify against the vector",
            v.name
        );
        assert!(parts.headers.contains_key(USER_AGENT));
    }
    Ok(())
}
