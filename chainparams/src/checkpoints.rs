use std::collections::BTreeMap;
use std::convert::TryFrom;

use lazy_static::lazy_static;

use crate::{
    NetworkKind,
    Uint256
};

/// Known-good block hashes of a network along with sync progress estimates
///
/// Checking blocks against these belongs to the validation code; this is only the data
#[derive(Debug)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Uint256>,
    /// UNIX timestamp of the last checkpoint block
    pub time_last_checkpoint: i64,
    /// Total number of transactions up to and including the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    fn new(
        entries: &[(u32, &str)],
        time_last_checkpoint: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                let hash = Uint256::try_from(*hash)
                    .unwrap_or_else(|err| panic!("Invalid checkpoint hash at height {}: {}", height, err));
                (*height, hash)
            })
            .collect();

        CheckpointData {
            checkpoints,
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Gets the checkpointed hash at `height`, if there is one
    pub fn get(&self, height: u32) -> Option<&Uint256> {
        self.checkpoints.get(&height)
    }

    /// Height of the highest checkpoint
    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Iterates over `(height, hash)` pairs in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Uint256)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

lazy_static! {
    static ref MAIN_CHECKPOINTS: CheckpointData = CheckpointData::new(
        &[
            (0, "000009ea46e7b8ec5ed2a961c244dfd7dd64c0d0e469635e8caeffc6c98451e3"),
            (1000, "00000ee8ac6e3f555b7568659440bdbf81688a0bf1804b77954f7a0de1b5c636"),
            (5000, "13033472df3ec9483da71388185e411b705e02427d935bfd2cc7058dfd427834"),
            (12000, "ea885de5d36906d2b646f469ff10caf2e73b60fb2484e2f26eeac5c83193daf6"),
        ],
        1_506_412_800,
        24_815,
        2000.0,
    );

    static ref TESTNET_CHECKPOINTS: CheckpointData = CheckpointData::new(
        &[(0, "00000cae74f342e257733b80e22ed680c934a0a9066f3606e34742d0f320119c")],
        1_505_314_860,
        0,
        250.0,
    );

    static ref REGTEST_CHECKPOINTS: CheckpointData = CheckpointData::new(
        &[(0, "30858e58aa34b5b55771753e1acab7ee1c30fde61432c15850c57060d4a8a2a5")],
        1_505_314_920,
        0,
        100.0,
    );
}

/// Gets the checkpoint data of the given network
pub fn for_network(network: NetworkKind) -> &'static CheckpointData {
    match network {
        NetworkKind::Main => &*MAIN_CHECKPOINTS,
        NetworkKind::PublicTest => &*TESTNET_CHECKPOINTS,
        NetworkKind::RegressionTest => &*REGTEST_CHECKPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_checkpoints_its_genesis_block() {
        for network in NetworkKind::ALL.iter() {
            let data = for_network(*network);
            assert!(!data.is_empty());
            assert!(data.get(0).is_some());
        }
    }

    #[test]
    fn it_finds_the_last_checkpoint() {
        let data = for_network(NetworkKind::Main);
        assert_eq!(data.last_checkpoint_height(), Some(12000));
        assert_eq!(data.len(), 4);
        assert!(data.get(1).is_none());

        let heights: Vec<u32> = data.iter().map(|(height, _)| height).collect();
        assert_eq!(heights, vec![0, 1000, 5000, 12000]);

        assert_eq!(for_network(NetworkKind::RegressionTest).last_checkpoint_height(), Some(0));
    }
}
