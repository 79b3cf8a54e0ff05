//! Maps the network selection flags to a network

use crate::{
    Error,
    NetworkKind,
    Result
};

/// Picks the network requested by the `-testnet` and `-regtest` flags
///
/// # Errors
/// If both flags are set. Neither network is more specific than the other, so the combination is
/// rejected rather than silently preferring one
pub fn resolve(wants_testnet: bool, wants_regtest: bool) -> Result<NetworkKind> {
    match (wants_testnet, wants_regtest) {
        (false, false) => Ok(NetworkKind::Main),
        (true, false) => Ok(NetworkKind::PublicTest),
        (false, true) => Ok(NetworkKind::RegressionTest),
        (true, true) => Err(Error::InvalidNetworkCombination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_main_network() {
        assert_eq!(resolve(false, false).unwrap(), NetworkKind::Main);
    }

    #[test]
    fn each_flag_selects_its_network() {
        assert_eq!(resolve(true, false).unwrap(), NetworkKind::PublicTest);
        assert_eq!(resolve(false, true).unwrap(), NetworkKind::RegressionTest);
    }

    #[test]
    fn rejects_both_flags() {
        match resolve(true, true) {
            Err(Error::InvalidNetworkCombination) => {}
            other => panic!("Expected InvalidNetworkCombination, got {:?}", other),
        }
    }
}
