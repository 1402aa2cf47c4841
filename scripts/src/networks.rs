//! The closed set of networks the `Space` contract can be deployed to

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use clap::ValueEnum;

use crate::{
    constants::{DEPLOY_GAS_LIMIT, INFURA_URL_TEMPLATE, LOCAL_RPC_URL, MAINNET_GAS_PRICE},
    errors::ScriptError,
};

/// A network the deploy scripts know how to target
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// A local development node
    Development,
    /// Polygon PoS mainnet
    Polygon,
    /// The Polygon Mumbai testnet
    Mumbai,
    /// The Rinkeby testnet
    Rinkeby,
    /// Ethereum mainnet
    #[value(alias = "mainnet")]
    Ethereum,
}

impl Network {
    /// All known networks, in display order
    pub const ALL: [Network; 5] = [
        Network::Development,
        Network::Polygon,
        Network::Mumbai,
        Network::Rinkeby,
        Network::Ethereum,
    ];

    /// The chain id a node for this network must report
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Development => 1337,
            Network::Polygon => 137,
            Network::Mumbai => 80001,
            Network::Rinkeby => 4,
            Network::Ethereum => 1,
        }
    }

    /// The Infura subdomain serving this network, `None` for local networks
    pub fn infura_subdomain(&self) -> Option<&'static str> {
        match self {
            Network::Development => None,
            Network::Polygon => Some("polygon-mainnet"),
            Network::Mumbai => Some("polygon-mumbai"),
            Network::Rinkeby => Some("rinkeby"),
            Network::Ethereum => Some("mainnet"),
        }
    }

    /// The gas ceiling for deployments on this network
    pub fn gas_limit(&self) -> u64 {
        DEPLOY_GAS_LIMIT
    }

    /// The fixed gas price for deployments, `None` to let the node estimate it
    pub fn gas_price(&self) -> Option<u128> {
        match self {
            Network::Ethereum => Some(MAINNET_GAS_PRICE),
            _ => None,
        }
    }

    /// Whether the network holds real value
    pub fn is_production(&self) -> bool {
        matches!(self, Network::Polygon | Network::Ethereum)
    }

    /// Build the RPC endpoint for this network
    ///
    /// Hosted networks are reached through Infura and require a project id
    pub fn rpc_url(&self, infura_project_id: Option<&str>) -> Result<String, ScriptError> {
        let Some(subdomain) = self.infura_subdomain() else {
            return Ok(LOCAL_RPC_URL.to_string());
        };

        let project_id = infura_project_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ScriptError::Configuration(format!(
                    "an Infura project id is required for {}",
                    self
                ))
            })?;

        Ok(INFURA_URL_TEMPLATE
            .replace("{network}", subdomain)
            .replace("{project_id}", project_id))
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Development => write!(f, "development"),
            Network::Polygon => write!(f, "polygon"),
            Network::Mumbai => write!(f, "mumbai"),
            Network::Rinkeby => write!(f, "rinkeby"),
            Network::Ethereum => write!(f, "ethereum"),
        }
    }
}

impl FromStr for Network {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Network as ValueEnum>::from_str(s, false /* ignore_case */)
            .map_err(|_| ScriptError::UnknownNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_networks() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Ethereum));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for name in ["", "goerli", "Rinkeby", " rinkeby"] {
            assert_eq!(
                name.parse::<Network>(),
                Err(ScriptError::UnknownNetwork(name.to_string()))
            );
        }
    }

    #[test]
    fn test_gas_settings() {
        for network in Network::ALL {
            assert_eq!(network.gas_limit(), DEPLOY_GAS_LIMIT);
        }
        assert_eq!(Network::Ethereum.gas_price(), Some(5_000_000_000));
        assert_eq!(Network::Rinkeby.gas_price(), None);
    }

    #[test]
    fn test_rpc_urls() {
        assert_eq!(
            Network::Development.rpc_url(None).unwrap(),
            "http://localhost:8545"
        );
        assert_eq!(
            Network::Mumbai.rpc_url(Some("abc123")).unwrap(),
            "https://polygon-mumbai.infura.io/v3/abc123"
        );
        assert_eq!(
            Network::Ethereum.rpc_url(Some("abc123")).unwrap(),
            "https://mainnet.infura.io/v3/abc123"
        );
    }

    #[test]
    fn test_hosted_network_requires_project_id() {
        assert!(matches!(
            Network::Rinkeby.rpc_url(None),
            Err(ScriptError::Configuration(_))
        ));
        assert!(matches!(
            Network::Polygon.rpc_url(Some("")),
            Err(ScriptError::Configuration(_))
        ));
    }
}
