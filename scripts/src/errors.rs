//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The network identifier does not name a known network
    UnknownNetwork(String),
    /// The network is known, but no proxy registry is configured for it
    MissingProxyRegistry(String),
    /// Error in the deploy configuration supplied at startup
    Configuration(String),
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The connected node reports a different chain than the target network
    ChainIdMismatch {
        /// The chain id of the target network
        expected: u64,
        /// The chain id reported by the node
        actual: u64,
    },
    /// Error deploying a contract
    ContractDeployment(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownNetwork(s) => write!(f, "unknown network: {:?}", s),
            ScriptError::MissingProxyRegistry(s) => {
                write!(f, "no proxy registry configured for network: {}", s)
            }
            ScriptError::Configuration(s) => write!(f, "invalid configuration: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ChainIdMismatch { expected, actual } => write!(
                f,
                "chain id mismatch: expected {}, node reports {}",
                expected, actual
            ),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
        }
    }
}

impl Error for ScriptError {}
