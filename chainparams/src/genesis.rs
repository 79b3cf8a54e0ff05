use serde::Serialize;

use crate::{
    Amount,
    Uint256
};

/// Everything needed to reconstruct a network's genesis block
///
/// The genesis block has a single coinbase transaction paying `reward` to `output_public_key`,
/// with `coinbase_message` embedded in its input script
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GenesisBlock {
    pub version: i32,
    pub prev_block_hash: Uint256,
    pub merkle_root: Uint256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub coinbase_message: &'static str,
    pub output_public_key: &'static str,
    pub reward: Amount,
}

/// Computes the hash of a genesis block
///
/// Block hashing belongs to the consensus code, which plugs in through this trait so the
/// registry can check its stored genesis hashes before a network is activated
pub trait GenesisHasher {
    /// Hashes the block described by `genesis`
    fn hash_genesis(&self, genesis: &GenesisBlock) -> Uint256;
}

impl<F> GenesisHasher for F
where
    F: Fn(&GenesisBlock) -> Uint256,
{
    fn hash_genesis(&self, genesis: &GenesisBlock) -> Uint256 {
        self(genesis)
    }
}
