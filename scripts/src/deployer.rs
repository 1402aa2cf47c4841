//! The facility that broadcasts contract creation transactions

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use tracing::{debug, info};

use crate::{
    errors::ScriptError,
    types::{ContractArtifact, DeploymentParameters},
};

/// Deploys a compiled contract with the given constructor arguments
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// Deploy the contract, returning its address once the creation
    /// transaction is mined
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        params: DeploymentParameters,
    ) -> Result<Address, ScriptError>;
}

/// A deployer that signs and broadcasts through an RPC provider
#[derive(Clone)]
pub struct RpcDeployer {
    /// The provider, with the deployer's wallet attached
    provider: DynProvider<Ethereum>,
}

impl RpcDeployer {
    /// Create a deployer over the given provider
    pub fn new(provider: DynProvider<Ethereum>) -> Self {
        Self { provider }
    }
}

/// Build the contract creation transaction: the creation bytecode followed by
/// the encoded constructor arguments, under the deployment's gas settings
pub fn creation_tx(
    artifact: &ContractArtifact,
    params: &DeploymentParameters,
) -> Result<TransactionRequest, ScriptError> {
    let mut deploy_code = artifact.creation_code()?.to_vec();
    deploy_code.extend_from_slice(&params.constructor_args);

    let mut tx = TransactionRequest::default()
        .with_deploy_code(deploy_code)
        .with_gas_limit(params.gas_limit);
    if let Some(gas_price) = params.gas_price {
        tx = tx.with_gas_price(gas_price);
    }

    Ok(tx)
}

impl ContractDeployer for RpcDeployer {
    async fn deploy(
        &self,
        artifact: &ContractArtifact,
        params: DeploymentParameters,
    ) -> Result<Address, ScriptError> {
        let tx = creation_tx(artifact, &params)?;
        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("{} creation tx sent: {:#x}", artifact.contract_name, pending_tx.tx_hash());

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        debug!("gas used: {}", receipt.gas_used);

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "creation tx {:#x} reverted",
                receipt.transaction_hash
            )));
        }

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment("receipt carries no contract address".to_string())
        })
    }
}
