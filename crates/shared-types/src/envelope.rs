//! # `SignedCall` Envelope
//!
//! The wrapper in which every write-surface operation reaches the state
//! engine.
//!
//! ## Security Properties
//!
//! - **Envelope Authority**: `signer` is the sole source of truth for the
//!   caller's identity. Payloads carry no identity fields except the delegate
//!   being installed by `resetGame`.
//! - **Canonical Message**: The Ed25519 signature covers `call.encode()`.
//! - Ordering and replay protection belong to the ledger that finalizes calls.

use crate::entities::{Identity, Signature};
use crate::errors::EnvelopeError;
use crate::ipc::GameCall;
use ed25519_dalek::{Signer, SigningKey, Verifier};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

/// A write-surface call bound to the identity that signed it.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedCall {
    /// Public key of the signer.
    pub signer: Identity,
    /// The requested operation.
    pub call: GameCall,
    /// Ed25519 signature over the canonical call encoding.
    #[serde_as(as = "Hex")]
    pub signature: Signature,
}

impl SignedCall {
    /// Signs `call` with `key`.
    #[must_use]
    pub fn sign(key: &SigningKey, call: GameCall) -> Self {
        let signature = key.sign(&call.encode());
        Self {
            signer: Identity::from_verifying_key(&key.verifying_key()),
            call,
            signature: signature.to_bytes(),
        }
    }

    /// Wraps a call without a signature.
    ///
    /// Only accepted by handlers running with signature checks disabled.
    #[must_use]
    pub fn unsigned(signer: Identity, call: GameCall) -> Self {
        Self {
            signer,
            call,
            signature: [0u8; 64],
        }
    }

    /// Verifies the signature against `signer`.
    pub fn verify(&self) -> Result<(), EnvelopeError> {
        let key = self.signer.verifying_key()?;
        let signature = ed25519_dalek::Signature::from_bytes(&self.signature);
        key.verify(&self.call.encode(), &signature)
            .map_err(|_| EnvelopeError::BadSignature {
                signer: self.signer,
            })
    }
}
