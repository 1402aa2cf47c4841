//! Type definitions used throughout the scripts

use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolConstructor,
};
use serde::Deserialize;

use crate::{errors::ScriptError, networks::Network, solidity::Space};

/// A compiled contract artifact, as emitted by the Solidity toolchain
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The creation bytecode, hex encoded
    pub bytecode: String,
}

impl ContractArtifact {
    /// Decode the creation bytecode
    ///
    /// Unlinked library placeholders and empty bytecode (abstract contracts,
    /// interfaces) are rejected
    pub fn creation_code(&self) -> Result<Bytes, ScriptError> {
        let code: Bytes = self.bytecode.parse().map_err(|e| {
            ScriptError::ArtifactParsing(format!("{}: {}", self.contract_name, e))
        })?;

        if code.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no creation bytecode",
                self.contract_name
            )));
        }

        Ok(code)
    }
}

/// The parameters of a single deployment transaction
///
/// Built fresh for each deployment and consumed by the deployer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentParameters {
    /// The ABI-encoded constructor arguments
    pub constructor_args: Bytes,
    /// The gas ceiling of the deployment transaction
    pub gas_limit: u64,
    /// A fixed gas price, `None` to let the node estimate it
    pub gas_price: Option<u128>,
}

impl DeploymentParameters {
    /// Build the parameters for deploying `Space` to the given network
    pub fn for_space(network: Network, proxy_registry: Address) -> Self {
        let constructor = Space::constructorCall {
            proxyRegistryAddress: proxy_registry,
        };

        Self {
            constructor_args: constructor.abi_encode().into(),
            gas_limit: network.gas_limit(),
            gas_price: network.gas_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEPLOY_GAS_LIMIT, RINKEBY_PROXY_REGISTRY};

    #[test]
    fn test_constructor_args_encoding() {
        let params = DeploymentParameters::for_space(Network::Rinkeby, RINKEBY_PROXY_REGISTRY);

        // A single address argument is left-padded to one 32 byte word
        assert_eq!(params.constructor_args.len(), 32);
        assert_eq!(&params.constructor_args[..12], &[0u8; 12]);
        assert_eq!(
            &params.constructor_args[12..],
            RINKEBY_PROXY_REGISTRY.as_slice()
        );
        assert_eq!(params.gas_limit, DEPLOY_GAS_LIMIT);
        assert_eq!(params.gas_price, None);
    }

    #[test]
    fn test_creation_code() {
        let artifact = ContractArtifact {
            contract_name: "Space".to_string(),
            bytecode: "0x6080604052".to_string(),
        };
        assert_eq!(
            artifact.creation_code().unwrap(),
            Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52])
        );
    }

    #[test]
    fn test_creation_code_rejects_empty_and_unlinked() {
        for bytecode in ["0x", "0x6080__$placeholder$__6040"] {
            let artifact = ContractArtifact {
                contract_name: "Space".to_string(),
                bytecode: bytecode.to_string(),
            };
            assert!(matches!(
                artifact.creation_code(),
                Err(ScriptError::ArtifactParsing(_))
            ));
        }
    }
}
