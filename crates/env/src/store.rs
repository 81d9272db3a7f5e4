//! Parameter store access.
//!
//! `ParameterStore` is the single dependency-inversion seam of the pipeline:
//! production binds to AWS Systems Manager, tests substitute a scripted store.

use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use ssmrun_core::{Error, Result};

/// Lookup-by-name capability for the remote parameter store.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the decrypted plaintext value of the named parameter.
    ///
    /// Any failure (not found, auth, decrypt, network) surfaces as a single
    /// resolution-failure kind carrying the parameter name.
    async fn get_parameter(&self, name: &str) -> Result<String>;
}

/// Production store backed by AWS Systems Manager Parameter Store.
#[derive(Clone)]
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    #[must_use]
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn get_parameter(&self, name: &str) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                Error::parameter_lookup_with_source(name, message, e)
            })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(ToString::to_string)
            .ok_or_else(|| Error::parameter_lookup(name, "response contained no value"))
    }
}
