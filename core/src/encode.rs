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

//! Percent encoding used by request canonicalization.

use crate::Result;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// AsciiSet for [RFC 3986 unreserved characters](https://www.rfc-editor.org/rfc/rfc3986#section-2.3)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `/`, `?` and `#` are encoded as well, callers split paths before encoding.
pub static UNRESERVED_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode input with [`UNRESERVED_ENCODE_SET`].
///
/// Every byte of the UTF-8 representation is encoded on its own, so a three
/// byte code point yields three `%XX` triplets. Space always encodes to `%20`.
///
/// Input is encoded exactly once: `%41` becomes `%2541`. Use
/// [`percent_encode_idempotent`] to keep existing triplets.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &UNRESERVED_ENCODE_SET).to_string()
}

/// Percent encode input but keep the `%XX` triplets that are already there.
///
/// Running this function on its own output returns the same string.
pub fn percent_encode_idempotent(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());

    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%'
            && idx + 2 < bytes.len()
            && bytes[idx + 1].is_ascii_hexdigit()
            && bytes[idx + 2].is_ascii_hexdigit()
        {
            out.extend(utf8_percent_encode(&input[start..idx], &UNRESERVED_ENCODE_SET));
            out.push_str(&input[idx..idx + 3]);
            idx += 3;
            start = idx;
        } else {
            idx += 1;
        }
    }
    out.extend(utf8_percent_encode(&input[start..], &UNRESERVED_ENCODE_SET));

    out
}

/// Convert UTF-16 code units into a `String`.
///
/// Callers that hold UTF-16 text (for example from FFI) must go through here
/// before canonicalization. Unpaired surrogates are rejected with
/// [`ErrorKind::InvalidEncoding`](crate::ErrorKind::InvalidEncoding).
pub fn decode_utf16(units: &[u16]) -> Result<String> {
    Ok(String::from_utf16(units)?)
}
