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

// Headers used in amazon pay requests.
pub const X_AMZ_PAY_DATE: &str = "x-amz-pay-date";
pub const X_AMZ_PAY_HOST: &str = "x-amz-pay-host";
pub const X_AMZ_PAY_REGION: &str = "x-amz-pay-region";
pub const X_AMZ_PAY_PREFIX: &str = "x-amz-pay-";

/// Headers that every request must sign.
///
/// This is a contract with the remote service, order is irrelevant since
/// canonicalization sorts the names.
pub const SIGNED_HEADERS: [&str; 5] = [
    "accept",
    "content-type",
    X_AMZ_PAY_DATE,
    X_AMZ_PAY_HOST,
    X_AMZ_PAY_REGION,
];

pub const APPLICATION_JSON: &str = "application/json";

// Signature algorithms.
pub const AMZN_PAY_RSASSA_PSS: &str = "AMZN-PAY-RSASSA-PSS";
pub const AMZN_PAY_RSASSA_PSS_V2: &str = "AMZN-PAY-RSASSA-PSS-V2";

// Env values used in amazon pay.
pub const AMAZON_PAY_REGION: &str = "AMAZON_PAY_REGION";
pub const AMAZON_PAY_PUBLIC_KEY_ID: &str = "AMAZON_PAY_PUBLIC_KEY_ID";
pub const AMAZON_PAY_PRIVATE_KEY: &str = "AMAZON_PAY_PRIVATE_KEY";
pub const AMAZON_PAY_ALGORITHM: &str = "AMAZON_PAY_ALGORITHM";
pub const AMAZON_PAY_USER_AGENT_REDACTION: &str = "AMAZON_PAY_USER_AGENT_REDACTION";

pub const SDK_NAME: &str = "paysign";
pub const REDACTED: &str = "Redacted";
