use crate::constants::*;
use crate::{Region, SignatureAlgorithm};
use paysign_core::utils::Redact;
use paysign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for Amazon Pay signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AMAZON_PAY_REGION`
    pub region: Option<String>,
    /// `public_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AMAZON_PAY_PUBLIC_KEY_ID`
    pub public_key_id: Option<String>,
    /// `private_key` is the PEM encoded private key and will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AMAZON_PAY_PRIVATE_KEY`
    pub private_key: Option<String>,
    /// `algorithm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AMAZON_PAY_ALGORITHM`
    /// - default to `AMZN-PAY-RSASSA-PSS`
    pub algorithm: Option<String>,
    /// Replace the language and platform part of the user agent with
    /// `Redacted`.
    ///
    /// Enabled by env value `AMAZON_PAY_USER_AGENT_REDACTION` set to `true`.
    pub user_agent_redaction: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("public_key_id", &Redact::from(&self.public_key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .field("algorithm", &self.algorithm)
            .field("user_agent_redaction", &self.user_agent_redaction)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AMAZON_PAY_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AMAZON_PAY_PUBLIC_KEY_ID) {
            self.public_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AMAZON_PAY_PRIVATE_KEY) {
            self.private_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AMAZON_PAY_ALGORITHM) {
            self.algorithm.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AMAZON_PAY_USER_AGENT_REDACTION) {
            self.user_agent_redaction |= v.trim().eq_ignore_ascii_case("true");
        }

        self
    }

    /// Check that every value required for signing is set and well formed.
    pub fn validate(&self) -> Result<()> {
        self.region()?;
        self.algorithm()?;

        if self.public_key_id.as_deref().map_or(true, str::is_empty) {
            return Err(Error::config_invalid("public key id is not set"));
        }
        if self.private_key.as_deref().map_or(true, str::is_empty) {
            return Err(Error::config_invalid("private key is not set"));
        }

        Ok(())
    }

    /// Parsed region.
    pub fn region(&self) -> Result<Region> {
        match &self.region {
            Some(v) => v.parse(),
            None => Err(Error::config_invalid("region is not set")),
        }
    }

    /// Parsed signature algorithm, the default one if none is configured.
    pub fn algorithm(&self) -> Result<SignatureAlgorithm> {
        match &self.algorithm {
            Some(v) => v.parse(),
            None => Ok(SignatureAlgorithm::default()),
        }
    }
}
