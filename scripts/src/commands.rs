//! Implementations of the various deploy scripts

use std::path::PathBuf;

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    cli::{DeployArgs, RegistryArgs},
    config::DeployConfig,
    constants::{DEFAULT_DEPLOYER_ADDRESS, SPACE_CONTRACT_NAME},
    deployer::{ContractDeployer, RpcDeployer},
    errors::ScriptError,
    networks::Network,
    registry::registry_for_network,
    types::{ContractArtifact, DeploymentParameters},
    utils::{read_artifact, setup_client, write_deployed_address},
};

/// Everything needed to deploy `Space`, validated before any connection to
/// the network is made
#[derive(Clone, Debug)]
pub struct DeployPlan {
    /// The target network
    pub network: Network,
    /// The proxy registry passed to the constructor
    pub proxy_registry: Address,
    /// The compiled contract
    pub artifact: ContractArtifact,
    /// Where to record the deployed address
    pub deployments_path: PathBuf,
}

impl DeployPlan {
    /// Validate the deploy arguments and configuration into a plan
    pub fn new(args: &DeployArgs, config: &DeployConfig) -> Result<Self, ScriptError> {
        let network = config.network()?;
        let proxy_registry = args.registry.resolver()?.resolve(&config.network)?;

        let artifact = read_artifact(&args.artifact)?;
        if artifact.contract_name != SPACE_CONTRACT_NAME {
            return Err(ScriptError::ArtifactParsing(format!(
                "expected the {} artifact, found {}",
                SPACE_CONTRACT_NAME, artifact.contract_name
            )));
        }

        Ok(Self {
            network,
            proxy_registry,
            artifact,
            deployments_path: config.deployments_path(network),
        })
    }

    /// The parameters of the deployment transaction
    pub fn parameters(&self) -> DeploymentParameters {
        DeploymentParameters::for_space(self.network, self.proxy_registry)
    }

    /// Deploy through the given deployer and record the deployed address
    pub async fn execute(&self, deployer: &impl ContractDeployer) -> Result<Address, ScriptError> {
        if self.network.is_production() {
            warn!("Deploying `{}` to {}", SPACE_CONTRACT_NAME, self.network);
        }
        info!(
            "Deploying `{}` to {} with proxy registry {}",
            SPACE_CONTRACT_NAME, self.network, self.proxy_registry
        );

        let address = deployer.deploy(&self.artifact, self.parameters()).await?;
        info!("{} deployed at {:#x}", SPACE_CONTRACT_NAME, address);

        write_deployed_address(&self.deployments_path, SPACE_CONTRACT_NAME, address).map_err(|e| {
            ScriptError::WriteDeployments(format!(
                "{} deployed at {:#x}, but was not recorded: {}",
                SPACE_CONTRACT_NAME, address, e
            ))
        })?;

        Ok(address)
    }
}

/// Deploy `Space` to the configured network
pub async fn deploy(args: DeployArgs, config: &DeployConfig) -> Result<Address, ScriptError> {
    let plan = DeployPlan::new(&args, config)?;

    let signer = config.signer()?;
    if plan.network.is_production() && signer.address() != DEFAULT_DEPLOYER_ADDRESS {
        warn!(
            "Deploying from {}, previous deployments were sent from {}",
            signer.address(),
            DEFAULT_DEPLOYER_ADDRESS
        );
    }

    let rpc_url = config.rpc_url(plan.network)?;
    let expected_chain_id = (!args.skip_chain_id_check).then(|| plan.network.chain_id());
    let provider = setup_client(signer, &rpc_url, expected_chain_id).await?;

    plan.execute(&RpcDeployer::new(provider)).await
}

/// Print the proxy registry selected for the configured network
pub fn resolve_registry(args: RegistryArgs, config: &DeployConfig) -> Result<(), ScriptError> {
    let proxy_registry = args.resolver()?.resolve(&config.network)?;
    println!("{}", proxy_registry);

    Ok(())
}

/// Print the table of known networks
pub fn list_networks() {
    println!(
        "{:<12} {:>8} {:<16} {:<42} {:>10} {:>12}",
        "network", "chain id", "endpoint", "proxy registry", "gas", "gas price"
    );
    for network in Network::ALL {
        let registry = registry_for_network(network)
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "-".to_string());
        let gas_price = network
            .gas_price()
            .map(|price| price.to_string())
            .unwrap_or_else(|| "estimated".to_string());

        println!(
            "{:<12} {:>8} {:<16} {:<42} {:>10} {:>12}",
            network.to_string(),
            network.chain_id(),
            network.infura_subdomain().unwrap_or("localhost"),
            registry,
            network.gas_limit(),
            gas_price
        );
    }
}
