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

//! Sign an Amazon Pay request with the credential found in the environment.
//!
//! ```shell
//! AMAZON_PAY_REGION=EU \
//! AMAZON_PAY_PUBLIC_KEY_ID=SANDBOX-AEXAMPLE \
//! AMAZON_PAY_PRIVATE_KEY="$(cat private.pem)" \
//! cargo run --example sign_request
//! ```

use anyhow::Result;
use http::Request;
use paysign_amazon_pay::{Config, EnvCredentialProvider, RequestSigner};
use paysign_core::{Context, OsEnv, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    config.validate()?;

    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::from_config(&config)?,
    );

    let body = br#"{"chargePermissionId":"S01-0000000-0000000","chargeAmount":{"amount":"14.00","currencyCode":"EUR"}}"#;
    let (mut parts, _) = Request::post("https://pay-api.amazon.eu/sandbox/v2/charges")
        .header("x-amz-pay-idempotency-key", "c2b0b0c6-2f0f-4d8b-9a1c-3f1e1b8a0d42")
        .body(())?
        .into_parts();

    signer.sign(&mut parts, body).await?;

    for (name, value) in parts.headers.iter() {
        if value.is_sensitive() {
            println!("{name}: <sensitive>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }
    Ok(())
}
