//! Definitions of CLI arguments and commands for deploy scripts

use std::{path::PathBuf, str::FromStr};

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, list_networks, resolve_registry},
    config::DeployConfig,
    constants::{
        ACCOUNT_KEY_ENV_VAR, DEFAULT_ARTIFACT_PATH, INFURA_PROJECT_ID_ENV_VAR, NETWORK_ENV_VAR,
        RPC_URL_ENV_VAR,
    },
    errors::ScriptError,
    registry::{RegistryPolicy, RegistryResolver},
};

/// Deploy the Space contract to an EVM network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the target network
    #[arg(short, long, env = NETWORK_ENV_VAR)]
    pub network: Option<String>,

    /// Private key of the deployer
    #[arg(short, long, env = ACCOUNT_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Infura project id, used to reach hosted networks
    #[arg(long, env = INFURA_PROJECT_ID_ENV_VAR, hide_env_values = true)]
    pub infura_project_id: Option<String>,

    /// Network RPC URL, overriding the network's default endpoint
    #[arg(short, long, env = RPC_URL_ENV_VAR)]
    pub rpc_url: Option<String>,

    /// Address the deployment must be sent from
    #[arg(long)]
    pub from: Option<String>,

    /// Path to the deployments file, defaults to `deployments.<network>.json`
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Split the parsed arguments into the deploy configuration and the
    /// command to run
    pub fn into_parts(self) -> (DeployConfig, Command) {
        let config = DeployConfig {
            network: self.network.unwrap_or_default(),
            private_key: self.priv_key,
            infura_project_id: self.infura_project_id,
            rpc_url: self.rpc_url,
            from: self.from,
            deployments_path: self.deployments_path,
        };

        (config, self.command)
    }
}

/// The commands supported by the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Space contract
    Deploy(DeployArgs),
    /// Print the proxy registry that would be used for the network
    ResolveRegistry(RegistryArgs),
    /// List the known networks
    Networks,
}

impl Command {
    /// Run the command against the given configuration
    pub async fn run(self, config: &DeployConfig) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, config).await.map(|_| ()),
            Command::ResolveRegistry(args) => resolve_registry(args, config),
            Command::Networks => {
                list_networks();
                Ok(())
            }
        }
    }
}

/// Deploy the Space contract.
///
/// The proxy registry passed to the constructor is selected by network, and
/// the deployed address is recorded in the deployments file.
#[derive(Args, Clone, Debug)]
pub struct DeployArgs {
    /// Path to the compiled Space artifact
    #[arg(short, long, default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Deploy even if the node reports a different chain id than the network
    #[arg(long)]
    pub skip_chain_id_check: bool,

    /// How the proxy registry is selected
    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Print the proxy registry that would be used for the network
#[derive(Args, Clone, Debug, Default)]
pub struct RegistryArgs {
    /// Proxy registry address in hex, overriding the one on record
    #[arg(long)]
    pub proxy_registry: Option<String>,

    /// Fall back to the mainnet registry for any network other than rinkeby,
    /// instead of failing on networks without a registry on record
    #[arg(long)]
    pub legacy_registry_fallback: bool,
}

impl RegistryArgs {
    /// Build the resolver described by these arguments
    pub fn resolver(&self) -> Result<RegistryResolver, ScriptError> {
        let policy = if self.legacy_registry_fallback {
            RegistryPolicy::DefaultToMainnet
        } else {
            RegistryPolicy::Strict
        };

        let override_address = self
            .proxy_registry
            .as_deref()
            .map(|addr| {
                Address::from_str(addr).map_err(|e| {
                    ScriptError::Configuration(format!("invalid proxy registry {}: {}", addr, e))
                })
            })
            .transpose()?;

        Ok(RegistryResolver::new(policy).with_override(override_address))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deploy() {
        let cli = Cli::try_parse_from([
            "space-scripts",
            "--network",
            "rinkeby",
            "--priv-key",
            "0x01",
            "deploy",
            "--artifact",
            "out/Space.json",
            "--legacy-registry-fallback",
        ])
        .unwrap();

        let (config, command) = cli.into_parts();
        assert_eq!(config.network, "rinkeby");
        assert_eq!(config.private_key.as_deref(), Some("0x01"));

        let Command::Deploy(args) = command else {
            panic!("expected the deploy command");
        };
        assert_eq!(args.artifact, PathBuf::from("out/Space.json"));
        assert!(args.registry.legacy_registry_fallback);
        assert!(!args.skip_chain_id_check);
    }

    #[test]
    fn test_registry_args_reject_bad_override() {
        let args = RegistryArgs {
            proxy_registry: Some("0x1234".to_string()),
            legacy_registry_fallback: false,
        };
        assert!(matches!(
            args.resolver(),
            Err(ScriptError::Configuration(_))
        ));
    }
}
