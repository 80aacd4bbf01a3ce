//! Rotation of the key that encrypts deployed functions' environment
//! variables.
//!
//! The cloud call itself sits behind [`FunctionConfigClient`]; this crate
//! owns reading the function inventory and sequencing one update per
//! function.

mod client;
mod error;
mod inventory;
mod rotate;

pub use client::{ClientError, DryRunClient, EncryptionUpdate, FunctionConfigClient};
pub use error::{RemediationError, Result};
pub use inventory::{FunctionEntry, parse_inventory, read_inventory};
pub use rotate::{KmsKeyArn, RotationReport, rotate_function_keys};
