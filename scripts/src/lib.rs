//! Scripts for deploying the Space contract.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod networks;
pub mod registry;
mod solidity;
pub mod types;
pub mod utils;
