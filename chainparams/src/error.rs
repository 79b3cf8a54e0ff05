use crate::{
    NetworkKind,
    Uint256
};

/// Type alias for chain parameter operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for chain parameter operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a built-in parameter set breaks one of its invariants
    #[error("Invalid {network} network parameters: {reason}")]
    InvalidParams {
        network: NetworkKind,
        reason: String,
    },

    /// Returned when a built-in key is not valid hex
    #[error("Invalid key in {network} network parameters")]
    InvalidKey {
        network: NetworkKind,
        #[source]
        source: hex::FromHexError,
    },

    /// Returned when the active parameters are read before a network is selected
    #[error("No network selected")]
    NoNetworkSelected,

    /// Returned when both -testnet and -regtest are requested
    #[error("Invalid combination of -regtest and -testnet")]
    InvalidNetworkCombination,

    /// Returned when the genesis block does not hash to the expected value
    #[error("Genesis block of the {network} network hashes to {computed}, expected {expected}")]
    GenesisMismatch {
        network: NetworkKind,
        expected: Uint256,
        computed: Uint256,
    },

    /// Returned when the active parameters are already being modified
    #[error("Network parameters are already being modified")]
    OverrideInUse,
}
