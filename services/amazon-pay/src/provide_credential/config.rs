use crate::{Config, Credential};
use async_trait::async_trait;
use paysign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider loads the credential from [`Config`].
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { config: cfg }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(id), Some(key)) = (&self.config.public_key_id, &self.config.private_key) else {
            return Ok(None);
        };

        Ok(Some(Credential::from_pem(id, key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKCS8_PEM: &str = include_str!("../../tests/testdata/private_key.pem");

    #[tokio::test]
    async fn test_config_credential_provider() -> anyhow::Result<()> {
        let config = Config {
            public_key_id: Some("SANDBOX-AEXAMPLE".to_string()),
            private_key: Some(PKCS8_PEM.to_string()),
            ..Default::default()
        };
        let provider = ConfigCredentialProvider::new(Arc::new(config));
        let cred = provider.provide_credential(&Context::new()).await?;
        assert_eq!(cred.map(|v| v.public_key_id).as_deref(), Some("SANDBOX-AEXAMPLE"));

        let provider = ConfigCredentialProvider::new(Arc::new(Config::default()));
        assert!(provider.provide_credential(&Context::new()).await?.is_none());
        Ok(())
    }
}
