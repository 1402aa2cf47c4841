//! Resolution of the proxy registry address passed to the `Space` constructor
//!
//! Marketplace trading is whitelisted through an OpenSea proxy registry, which
//! lives at a different address on every network. Only rinkeby and Ethereum
//! mainnet have a registry on record; any other network must supply one
//! explicitly.

use alloy::primitives::Address;
use tracing::warn;

use crate::{
    constants::{MAINNET_PROXY_REGISTRY, RINKEBY_PROXY_REGISTRY},
    errors::ScriptError,
    networks::Network,
};

/// How a network identifier is mapped onto a registry address
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RegistryPolicy {
    /// Only known networks with a registry on record resolve, anything else
    /// is an error
    #[default]
    Strict,
    /// Rinkeby resolves to the rinkeby registry and every other identifier,
    /// recognized or not, falls back to the mainnet registry
    DefaultToMainnet,
}

/// The registry on record for a known network
pub fn registry_for_network(network: Network) -> Option<Address> {
    match network {
        Network::Rinkeby => Some(RINKEBY_PROXY_REGISTRY),
        Network::Ethereum => Some(MAINNET_PROXY_REGISTRY),
        Network::Development | Network::Polygon | Network::Mumbai => None,
    }
}

/// Resolves the registry address for a network identifier
#[derive(Clone, Debug, Default)]
pub struct RegistryResolver {
    /// The mapping policy
    policy: RegistryPolicy,
    /// An explicit address that takes precedence over the policy
    override_address: Option<Address>,
}

impl RegistryResolver {
    /// Create a resolver with the given policy and no override
    pub fn new(policy: RegistryPolicy) -> Self {
        Self {
            policy,
            override_address: None,
        }
    }

    /// Use the given address regardless of network
    pub fn with_override(mut self, address: Option<Address>) -> Self {
        self.override_address = address;
        self
    }

    /// Select the registry address for the given network identifier
    pub fn resolve(&self, network: &str) -> Result<Address, ScriptError> {
        let address = match self.override_address {
            Some(address) => address,
            None => match self.policy {
                RegistryPolicy::Strict => resolve_strict(network)?,
                RegistryPolicy::DefaultToMainnet => resolve_with_mainnet_default(network),
            },
        };

        if address.is_zero() {
            return Err(ScriptError::Configuration(
                "the proxy registry cannot be the zero address".to_string(),
            ));
        }

        Ok(address)
    }
}

/// Map a network identifier onto the registry on record, failing on unknown
/// networks and networks without a registry
fn resolve_strict(network: &str) -> Result<Address, ScriptError> {
    let network: Network = network.parse()?;
    registry_for_network(network)
        .ok_or_else(|| ScriptError::MissingProxyRegistry(network.to_string()))
}

/// Map `rinkeby` onto the rinkeby registry and everything else onto mainnet
fn resolve_with_mainnet_default(network: &str) -> Address {
    if network == Network::Rinkeby.to_string() {
        return RINKEBY_PROXY_REGISTRY;
    }

    if !matches!(network.parse::<Network>(), Ok(Network::Ethereum)) {
        warn!(
            "network {:?} has no proxy registry on record, falling back to the mainnet registry",
            network
        );
    }
    MAINNET_PROXY_REGISTRY
}
