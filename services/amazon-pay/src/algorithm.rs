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

use crate::constants::{AMZN_PAY_RSASSA_PSS, AMZN_PAY_RSASSA_PSS_V2};
use paysign_core::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Signature algorithm announced in the string to sign and the authorization header.
///
/// Both variants are RSASSA-PSS over SHA-256 with MGF1(SHA-256); they differ
/// in the salt length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// `AMZN-PAY-RSASSA-PSS`, 20 bytes of salt.
    #[default]
    Default,
    /// `AMZN-PAY-RSASSA-PSS-V2`, 32 bytes of salt.
    V2,
}

impl SignatureAlgorithm {
    /// Identifier embedded verbatim in the string to sign.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Default => AMZN_PAY_RSASSA_PSS,
            SignatureAlgorithm::V2 => AMZN_PAY_RSASSA_PSS_V2,
        }
    }

    /// PSS salt length in bytes.
    pub fn salt_len(&self) -> usize {
        match self {
            SignatureAlgorithm::Default => 20,
            SignatureAlgorithm::V2 => 32,
        }
    }
}

impl Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            AMZN_PAY_RSASSA_PSS => Ok(SignatureAlgorithm::Default),
            AMZN_PAY_RSASSA_PSS_V2 => Ok(SignatureAlgorithm::V2),
            v => Err(Error::config_invalid(format!(
                "{v} is not a valid signature algorithm"
            ))),
        }
    }
}
