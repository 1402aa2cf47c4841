//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{errors::ScriptError, types::ContractArtifact};

/// Sets up the client through which to deploy, attaching the deployer's wallet
/// to an HTTP provider.
///
/// When `expected_chain_id` is set, the node must report that chain id.
pub async fn setup_client(
    signer: PrivateKeySigner,
    rpc_url: &str,
    expected_chain_id: Option<u64>,
) -> Result<DynProvider<Ethereum>, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    debug!("connected to chain {}", chain_id);
    check_chain_id(expected_chain_id, chain_id)?;

    Ok(DynProvider::new(provider))
}

/// Check the chain id reported by the node against the expected one, if any
pub fn check_chain_id(expected: Option<u64>, actual: u64) -> Result<(), ScriptError> {
    match expected {
        Some(expected) if expected != actual => {
            Err(ScriptError::ChainIdMismatch { expected, actual })
        }
        _ => Ok(()),
    }
}

/// Read a compiled contract artifact from the given path
pub fn read_artifact(path: &Path) -> Result<ContractArtifact, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScriptError::ArtifactParsing(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ScriptError::ArtifactParsing(format!("failed to parse {}: {}", path.display(), e))
    })
}

/// Read the deployments file, treating a missing file as empty
fn read_deployments(deployments_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    if !deployments_path.exists() {
        return Ok(Map::new());
    }

    let content = fs::read_to_string(deployments_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    let json: Value = serde_json::from_str(&content)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    match json {
        Value::Object(map) => Ok(map),
        _ => Err(ScriptError::ReadDeployments(format!(
            "{} does not contain a JSON object",
            deployments_path.display()
        ))),
    }
}

/// Read an address from the deployments file
///
/// Returns the address for the given key, or an error if not found
pub fn read_deployment(key: &str, deployments_path: &Path) -> Result<Address, ScriptError> {
    let deployments = read_deployments(deployments_path)?;

    let addr_str = deployments
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!("key {} not found in deployments file", key))
        })?;

    Address::from_str(addr_str).map_err(|e| {
        ScriptError::ReadDeployments(format!("failed to parse address {}: {}", addr_str, e))
    })
}

/// Record a deployed address in the deployments file, keeping the other entries
pub fn write_deployed_address(
    deployments_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut deployments = read_deployments(deployments_path)?;
    deployments.insert(
        contract_key.to_string(),
        Value::String(address.to_checksum(None /* chain_id */)),
    );

    let content = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(deployments_path, content).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}
