use crate::canonical::{build_canonical_request, canonical_headers, string_to_sign};
use crate::constants::*;
use crate::{Config, Credential, PrivateKey, Region, SignatureAlgorithm};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::request::Parts;
use http::{HeaderName, HeaderValue};
use log::debug;
use paysign_core::hash::base64_encode;
use paysign_core::time::{format_iso8601, now, DateTime};
use paysign_core::{Context, Error, Result, SignRequest, SigningRequest};
use rsa::pss::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};

/// RequestSigner that implements the Amazon Pay `AMZN-PAY-RSASSA-PSS` scheme.
///
/// Before signing, the required headers are filled in when the request
/// doesn't carry them yet:
///
/// - `accept` and `content-type`: `application/json`
/// - `x-amz-pay-date`: signing time as `YYYYMMDDTHHMMSSZ` in UTC
/// - `x-amz-pay-host`: host of the request uri
/// - `x-amz-pay-region`: configured region
///
/// Headers set by the caller always win. Every `x-amz-pay-*` header present
/// on the request is signed too.
#[derive(Debug)]
pub struct RequestSigner {
    region: Region,
    algorithm: SignatureAlgorithm,
    user_agent_redaction: bool,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given region with the default algorithm.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            algorithm: SignatureAlgorithm::default(),
            user_agent_redaction: false,
            time: None,
        }
    }

    /// Create a new signer from a validated config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.region()?)
            .with_algorithm(config.algorithm()?)
            .with_user_agent_redaction(config.user_agent_redaction))
    }

    /// Specify the signature algorithm.
    pub fn with_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Hide the language and platform in the user agent.
    pub fn with_user_agent_redaction(mut self, redaction: bool) -> Self {
        self.user_agent_redaction = redaction;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn user_agent(&self) -> String {
        let (os, arch) = if self.user_agent_redaction {
            (REDACTED, REDACTED)
        } else {
            (std::env::consts::OS, std::env::consts::ARCH)
        };

        format!("{SDK_NAME}/{} (Rust; {os}/{arch})", env!("CARGO_PKG_VERSION"))
    }

    fn sign_in_place(&self, req: &mut SigningRequest, body: &[u8], cred: &Credential) -> Result<()> {
        let now = self.time.unwrap_or_else(now);

        req.header_insert_if_absent(ACCEPT, APPLICATION_JSON)?;
        req.header_insert_if_absent(CONTENT_TYPE, APPLICATION_JSON)?;
        req.header_insert_if_absent(
            HeaderName::from_static(X_AMZ_PAY_DATE),
            &format_iso8601(now),
        )?;
        let host = req.host().to_string();
        req.header_insert_if_absent(HeaderName::from_static(X_AMZ_PAY_HOST), &host)?;
        req.header_insert_if_absent(
            HeaderName::from_static(X_AMZ_PAY_REGION),
            self.region.as_str(),
        )?;

        let mut signed_names: Vec<&str> = SIGNED_HEADERS.to_vec();
        for name in req.header_names_with_prefix(X_AMZ_PAY_PREFIX) {
            if !signed_names.contains(&name) {
                signed_names.push(name);
            }
        }
        let headers = canonical_headers(&req.headers, &signed_names)?;

        let path = req.path_percent_decoded()?;
        let creq = build_canonical_request(req.method.as_str(), &path, &req.query, &headers, body)?;
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(self.algorithm.as_str(), &creq);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = generate_signature(&cred.private_key, self.algorithm, &string_to_sign)?;

        let mut authorization = HeaderValue::from_str(&build_authorization_header(
            self.algorithm,
            &cred.public_key_id,
            &headers.signed_headers,
            &signature,
        ))?;
        authorization.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, authorization);

        req.header_insert_if_absent(USER_AGENT, &self.user_agent())
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "amazon pay requests can't be signed without credential",
            ));
        };

        let mut signing_req = SigningRequest::build(req)?;
        let original = signing_req.headers.clone();

        if let Err(err) = self.sign_in_place(&mut signing_req, body, cred) {
            // Hand the caller's headers back untouched.
            signing_req.headers = original;
            signing_req.apply(req)?;
            return Err(err);
        }

        signing_req.apply(req)
    }
}

/// Sign a string to sign with RSASSA-PSS and return the base64 encoded signature.
///
/// SHA-256 is used both as message digest and for MGF1, the salt length comes
/// from `algorithm`. The signature is randomized, two calls over the same
/// input return different values that both verify.
pub fn generate_signature(
    key: &PrivateKey,
    algorithm: SignatureAlgorithm,
    string_to_sign: &str,
) -> Result<String> {
    let signing_key =
        SigningKey::<Sha256>::new_with_salt_len(key.as_rsa().clone(), algorithm.salt_len());

    let mut rng = rand::thread_rng();
    let signature = signing_key
        .try_sign_with_rng(&mut rng, string_to_sign.as_bytes())
        .map_err(|e| Error::signing_failed("failed to sign string to sign").with_source(e))?;

    Ok(base64_encode(&signature.to_bytes()))
}

/// Build the value of the `authorization` header.
///
/// ```
/// use paysign_amazon_pay::{build_authorization_header, SignatureAlgorithm};
///
/// assert_eq!(
///     build_authorization_header(SignatureAlgorithm::Default, "KEY", "accept;x-amz-pay-date", "c2ln"),
///     "AMZN-PAY-RSASSA-PSS PublicKeyId=KEY, SignedHeaders=accept;x-amz-pay-date, Signature=c2ln"
/// );
/// ```
pub fn build_authorization_header(
    algorithm: SignatureAlgorithm,
    public_key_id: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{algorithm} PublicKeyId={public_key_id}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Sign a payload for the Amazon Pay checkout button.
///
/// The string to sign is the algorithm followed by the hex SHA-256 of
/// `payload`, there is no canonical request involved.
pub fn generate_button_signature(
    key: &PrivateKey,
    algorithm: SignatureAlgorithm,
    payload: &str,
) -> Result<String> {
    let string_to_sign = string_to_sign(algorithm.as_str(), payload);
    debug!("calculated button string to sign: {string_to_sign}");

    generate_signature(key, algorithm, &string_to_sign)
}
