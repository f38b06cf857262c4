use crate::Credential;
use async_trait::async_trait;
use paysign_core::utils::Redact;
use paysign_core::{Context, ProvideCredential, Result};
use std::fmt::{Debug, Formatter};

/// StaticCredentialProvider provides a fixed Amazon Pay credential.
///
/// This provider is used when you have the public key id and private key
/// directly and want to use them without any dynamic loading.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    public_key_id: String,
    private_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with public key id and PEM encoded private key.
    pub fn new(public_key_id: &str, private_key: &str) -> Self {
        Self {
            public_key_id: public_key_id.to_string(),
            private_key: private_key.to_string(),
        }
    }
}

impl Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("public_key_id", &Redact::from(&self.public_key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::from_pem(
            &self.public_key_id,
            &self.private_key,
        )?))
    }
}
