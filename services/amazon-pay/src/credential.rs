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

use crate::PrivateKey;
use paysign_core::utils::Redact;
use paysign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the public key id and the matching private key.
#[derive(Clone)]
pub struct Credential {
    /// Public key id registered in Seller Central.
    pub public_key_id: String,
    /// Private key used to sign requests.
    pub private_key: PrivateKey,
}

impl Credential {
    /// Create a credential from a public key id and a PEM encoded private key.
    pub fn from_pem(public_key_id: &str, private_key: &str) -> paysign_core::Result<Self> {
        Ok(Self {
            public_key_id: public_key_id.to_string(),
            private_key: PrivateKey::from_pem(private_key)?,
        })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("public_key_id", &Redact::from(&self.public_key_id))
            .field("private_key", &self.private_key)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.public_key_id.is_empty()
    }
}
