//! Seam to the compute-function configuration API.

use std::collections::BTreeMap;

use tracing::info;

use crate::rotate::KmsKeyArn;

/// Error reported by a client implementation.
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One environment re-encryption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionUpdate<'a> {
    pub function_name: &'a str,
    pub variables: &'a BTreeMap<String, String>,
    pub kms_key_arn: &'a KmsKeyArn,
}

/// Applies function configuration changes.
pub trait FunctionConfigClient {
    /// Re-submit `variables` for the function, encrypted with `kms_key_arn`.
    fn update_environment_encryption(
        &mut self,
        update: &EncryptionUpdate<'_>,
    ) -> Result<(), ClientError>;
}

/// Client that only logs and records the updates it would make.
#[derive(Debug, Default)]
pub struct DryRunClient {
    applied: Vec<String>,
}

impl DryRunClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Function names in the order they were "updated".
    pub fn applied(&self) -> &[String] {
        &self.applied
    }
}

impl FunctionConfigClient for DryRunClient {
    fn update_environment_encryption(
        &mut self,
        update: &EncryptionUpdate<'_>,
    ) -> Result<(), ClientError> {
        info!(
            function = update.function_name,
            variables = update.variables.len(),
            kms_key_arn = %update.kms_key_arn,
            "dry run: would update environment encryption"
        );
        self.applied.push(update.function_name.to_string());
        Ok(())
    }
}
