//! Deploy configuration, assembled once at startup from CLI flags and the
//! environment and passed explicitly into the commands

use std::{
    fmt::{self, Debug},
    path::PathBuf,
    str::FromStr,
};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::{errors::ScriptError, networks::Network};

/// Secrets and endpoints needed to deploy to a network
#[derive(Clone, Default)]
pub struct DeployConfig {
    /// The network identifier, as supplied by the caller
    pub network: String,
    /// The deployer's private key, hex encoded
    pub private_key: Option<String>,
    /// The Infura project id used to reach hosted networks
    pub infura_project_id: Option<String>,
    /// An RPC endpoint overriding the network's default
    pub rpc_url: Option<String>,
    /// The address the deployment is expected to be sent from
    pub from: Option<String>,
    /// Path of the deployments file, defaults to `deployments.<network>.json`
    pub deployments_path: Option<PathBuf>,
}

impl DeployConfig {
    /// Parse the network identifier into a known network
    pub fn network(&self) -> Result<Network, ScriptError> {
        self.network.parse()
    }

    /// The RPC endpoint to deploy through
    pub fn rpc_url(&self, network: Network) -> Result<String, ScriptError> {
        match &self.rpc_url {
            Some(url) => Ok(url.clone()),
            None => network.rpc_url(self.infura_project_id.as_deref()),
        }
    }

    /// The signer for the deployment transaction
    ///
    /// Fails if no key is configured, or if the key does not belong to the
    /// expected sender
    pub fn signer(&self) -> Result<PrivateKeySigner, ScriptError> {
        let key = self
            .private_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ScriptError::Configuration("no deployer key configured".to_string()))?;

        let signer = PrivateKeySigner::from_str(key)
            .map_err(|e| ScriptError::Configuration(format!("invalid deployer key: {}", e)))?;

        if let Some(expected) = self.expected_sender()? {
            if signer.address() != expected {
                return Err(ScriptError::Configuration(format!(
                    "deployer key belongs to {}, expected {}",
                    signer.address(),
                    expected
                )));
            }
        }

        Ok(signer)
    }

    /// The address the deployment must be sent from, if pinned
    pub fn expected_sender(&self) -> Result<Option<Address>, ScriptError> {
        self.from
            .as_deref()
            .map(|from| {
                Address::from_str(from).map_err(|e| {
                    ScriptError::Configuration(format!("invalid sender address {}: {}", from, e))
                })
            })
            .transpose()
    }

    /// Path of the deployments file for the given network
    pub fn deployments_path(&self, network: Network) -> PathBuf {
        self.deployments_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("deployments.{}.json", network)))
    }
}

impl Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("network", &self.network)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field(
                "infura_project_id",
                &self.infura_project_id.as_ref().map(|_| "<redacted>"),
            )
            .field("rpc_url", &self.rpc_url)
            .field("from", &self.from)
            .field("deployments_path", &self.deployments_path)
            .finish()
    }
}
