//! Sequencing of per-function key rotation.

use std::fmt;

use tracing::{info, info_span};

use crate::client::{EncryptionUpdate, FunctionConfigClient};
use crate::error::{RemediationError, Result};
use crate::inventory::FunctionEntry;

/// A KMS key (or alias) ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmsKeyArn(String);

impl KmsKeyArn {
    /// Accepts `arn:<partition>:kms:...` strings, keys and aliases alike.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        let mut parts = trimmed.splitn(6, ':');
        let valid = parts.next() == Some("arn")
            && parts.next().is_some_and(|partition| !partition.is_empty())
            && parts.next() == Some("kms")
            && parts.count() == 3
            && !trimmed.ends_with(':');
        if !valid {
            return Err(RemediationError::InvalidKeyArn(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KmsKeyArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Functions whose environment was re-encrypted, in inventory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationReport {
    pub updated: Vec<String>,
}

/// Update every function in `inventory` to use `kms_key_arn`.
///
/// Calls are made one at a time in inventory order. The first failure stops
/// the run; functions updated before it stay updated.
pub fn rotate_function_keys<C>(
    client: &mut C,
    inventory: &[FunctionEntry],
    kms_key_arn: &KmsKeyArn,
) -> Result<RotationReport>
where
    C: FunctionConfigClient + ?Sized,
{
    let span = info_span!("rotate_keys", functions = inventory.len(), kms_key_arn = %kms_key_arn);
    let _guard = span.enter();

    let mut report = RotationReport::default();
    for entry in inventory {
        let update = EncryptionUpdate {
            function_name: &entry.name,
            variables: &entry.variables,
            kms_key_arn,
        };
        client
            .update_environment_encryption(&update)
            .map_err(|source| RemediationError::UpdateFailed {
                function: entry.name.clone(),
                source,
            })?;
        info!(function = %entry.name, "updated environment encryption");
        report.updated.push(entry.name.clone());
    }
    Ok(report)
}
