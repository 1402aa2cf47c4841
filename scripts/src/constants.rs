//! Constants used in the deploy scripts

use alloy::primitives::{address, Address};

/// The name of the contract deployed by these scripts, also used as its key
/// in the `deployments.json` file
pub const SPACE_CONTRACT_NAME: &str = "Space";

/// The default path of the compiled `Space` artifact
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/Space.json";

/// The OpenSea proxy registry on rinkeby
pub const RINKEBY_PROXY_REGISTRY: Address = address!("f57b2c51ded3a29e6891aba85459d600256cf317");

/// The OpenSea proxy registry on Ethereum mainnet
pub const MAINNET_PROXY_REGISTRY: Address = address!("a5409ec958c83c3f309868babaca7c86dcb077c1");

/// The address the contracts have historically been deployed from
pub const DEFAULT_DEPLOYER_ADDRESS: Address =
    address!("247C6Efc48DCcdE4Ed92bD11b6aE6c0dDF05B811");

/// The gas ceiling for the deployment transaction, identical on every network
pub const DEPLOY_GAS_LIMIT: u64 = 5_000_000;

/// The fixed gas price used on Ethereum mainnet (5 gwei)
pub const MAINNET_GAS_PRICE: u128 = 5_000_000_000;

/// The RPC endpoint of a local development node
pub const LOCAL_RPC_URL: &str = "http://localhost:8545";

/// The Infura endpoint template; `{network}` and `{project_id}` are substituted
pub const INFURA_URL_TEMPLATE: &str = "https://{network}.infura.io/v3/{project_id}";

/// The name of the environment variable holding the deployer's private key
pub const ACCOUNT_KEY_ENV_VAR: &str = "ETHEREUM_ACCOUNT_KEY";

/// The name of the environment variable holding the Infura project id
pub const INFURA_PROJECT_ID_ENV_VAR: &str = "INFURA_CLIENT_ID";

/// The name of the environment variable naming the target network
pub const NETWORK_ENV_VAR: &str = "NETWORK";

/// The name of the environment variable overriding the RPC endpoint
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// The default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
