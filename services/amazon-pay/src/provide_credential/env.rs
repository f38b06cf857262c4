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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use paysign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Amazon Pay credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AMAZON_PAY_PUBLIC_KEY_ID`: The public key id
/// - `AMAZON_PAY_PRIVATE_KEY`: The PEM encoded private key
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (
            envs.get(AMAZON_PAY_PUBLIC_KEY_ID),
            envs.get(AMAZON_PAY_PRIVATE_KEY),
        ) {
            (Some(id), Some(key)) => {
                debug!("loading amazon pay credential from env");
                Ok(Some(Credential::from_pem(id, key)?))
            }
            _ => Ok(None),
        }
    }
}
