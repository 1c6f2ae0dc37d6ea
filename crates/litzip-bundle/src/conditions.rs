//! Access-control condition sets.
//!
//! A condition set is an opaque JSON array understood by the encryption
//! service; this crate never interprets individual conditions. What it does
//! enforce is the kind: every bundle is gated by exactly one of the four
//! supported condition formats, and metadata naming zero or several of them
//! is rejected at decode time.

use serde_json::Value;

/// One condition set of a known kind.
///
/// The payload is the raw JSON array forwarded to the encryption service.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessControlConditions {
    /// Basic EVM conditions (`accessControlConditions` on the wire).
    Default(Vec<Value>),
    /// EVM contract call conditions (`evmContractConditions`).
    EvmContract(Vec<Value>),
    /// Solana RPC conditions (`solRpcConditions`).
    SolRpc(Vec<Value>),
    /// Mixed-chain conditions (`unifiedAccessControlConditions`).
    Unified(Vec<Value>),
}

impl AccessControlConditions {
    /// Wire-format field name for this kind.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Default(_) => "accessControlConditions",
            Self::EvmContract(_) => "evmContractConditions",
            Self::SolRpc(_) => "solRpcConditions",
            Self::Unified(_) => "unifiedAccessControlConditions",
        }
    }

    /// The condition array itself.
    pub fn conditions(&self) -> &[Value] {
        match self {
            Self::Default(c) | Self::EvmContract(c) | Self::SolRpc(c) | Self::Unified(c) => c,
        }
    }

    /// Assemble from the four optional wire fields.
    ///
    /// Returns `Err(found)` unless exactly one field is present, where
    /// `found` is how many were.
    pub fn from_fields(
        default: Option<Vec<Value>>,
        evm_contract: Option<Vec<Value>>,
        sol_rpc: Option<Vec<Value>>,
        unified: Option<Vec<Value>>,
    ) -> std::result::Result<Self, usize> {
        let mut candidates: Vec<Self> = Vec::new();
        if let Some(c) = default {
            candidates.push(Self::Default(c));
        }
        if let Some(c) = evm_contract {
            candidates.push(Self::EvmContract(c));
        }
        if let Some(c) = sol_rpc {
            candidates.push(Self::SolRpc(c));
        }
        if let Some(c) = unified {
            candidates.push(Self::Unified(c));
        }

        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            found => Err(found),
        }
    }
}
