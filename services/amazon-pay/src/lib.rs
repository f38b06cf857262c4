//! Amazon Pay API request signer.
//!
//! Requests are signed with the `AMZN-PAY-RSASSA-PSS` scheme: the request is
//! reduced to a canonical form, hashed into a string to sign and signed with
//! RSASSA-PSS using the merchant's private key.
//!
//! ## Example
//!
//! ```no_run
//! use paysign_amazon_pay::{EnvCredentialProvider, Region, RequestSigner};
//! use paysign_core::{Context, OsEnv, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(ctx, EnvCredentialProvider::new(), RequestSigner::new(Region::Eu));
//!
//! let body = br#"{"chargeAmount":{"amount":"14.00","currencyCode":"EUR"}}"#;
//! let mut parts = http::Request::post("https://pay-api.amazon.eu/live/v2/charges")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The canonicalization steps are public on their own, see
//! [`canonical_request`] and [`string_to_sign`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod algorithm;
pub use algorithm::SignatureAlgorithm;

mod canonical;
pub use canonical::canonical_headers;
pub use canonical::canonical_path;
pub use canonical::canonical_query_string;
pub use canonical::canonical_request;
pub use canonical::string_to_sign;
pub use canonical::uri_reference_path;
pub use canonical::CanonicalHeaders;

mod config;
pub use config::Config;

mod constants;
pub use constants::SIGNED_HEADERS;

mod credential;
pub use credential::Credential;

mod key;
pub use key::PrivateKey;

mod provide_credential;
pub use provide_credential::*;

mod region;
pub use region::Region;

mod sign_request;
pub use sign_request::build_authorization_header;
pub use sign_request::generate_button_signature;
pub use sign_request::generate_signature;
pub use sign_request::RequestSigner;
