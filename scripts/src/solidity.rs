//! Definitions of Solidity functions called during deployment

use alloy::sol;

sol! {
    /// The `Space` ERC-721 contract, only its constructor is needed here
    #[allow(missing_docs)]
    contract Space {
        constructor(address proxyRegistryAddress);
    }
}
