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

use paysign_core::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Region the merchant account is registered in.
///
/// The value is sent in the signed `x-amz-pay-region` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// North America.
    Na,
    /// Europe.
    Eu,
    /// Japan.
    Jp,
}

impl Region {
    /// Header representation of the region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "NA",
            Region::Eu => "EU",
            Region::Jp => "JP",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "na" => Ok(Region::Na),
            "eu" => Ok(Region::Eu),
            "jp" => Ok(Region::Jp),
            _ => Err(Error::config_invalid(format!("{s} is not a valid region"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("NA", Region::Na; "upper na")]
    #[test_case("eu", Region::Eu; "lower eu")]
    #[test_case(" EU ", Region::Eu; "padded eu")]
    #[test_case("Jp", Region::Jp; "mixed jp")]
    fn test_region_from_str(input: &str, expected: Region) {
        assert_eq!(input.parse::<Region>().unwrap(), expected);
    }

    #[test]
    fn test_region_invalid() {
        assert!("mars".parse::<Region>().is_err());
        assert!("us".parse::<Region>().is_err());
        assert_eq!(Region::Eu.to_string(), "EU");
    }
}
