use std::net::SocketAddr;

use serde::{Serialize, Serializer};

use crate::checkpoints::CheckpointData;
use crate::{
    Base58Type,
    Error,
    GenesisBlock,
    NetworkKind,
    Result,
    Uint256
};

/// Amount of currency in the smallest unit
pub type Amount = i64;

/// Number of smallest units in one coin
pub const COIN: Amount = 100_000_000;

/// Size of the message start marker that prefixes every P2P message
pub const MESSAGE_START_SIZE: usize = 4;

/// Magic bytes prefixing every P2P message of a network
pub type MessageStart = [u8; MESSAGE_START_SIZE];

/// A DNS seed used to discover peers
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub fn new(name: &'static str, host: &'static str) -> Self {
        DnsSeed { name, host }
    }
}

fn serialize_hex<S: Serializer>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(data))
}

fn serialize_base58_prefixes<S: Serializer>(
    prefixes: &[Vec<u8>; Base58Type::MAX_BASE58_TYPES],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(prefixes.iter().map(hex::encode))
}

/// The tweakable parameters of one NeoBitcoin network
///
/// Instances are built by [`crate::factory`] and handed out by the [`crate::Registry`]; nothing
/// outside this crate can change them
#[derive(Clone, Debug, Serialize)]
pub struct ChainParams {
    pub(crate) network_id: NetworkKind,
    pub(crate) network_id_string: &'static str,

    // Identity
    pub(crate) hash_genesis_block: Uint256,
    #[serde(serialize_with = "serialize_hex")]
    pub(crate) message_start: MessageStart,
    pub(crate) default_port: u16,
    pub(crate) genesis: GenesisBlock,

    // Consensus timing
    pub(crate) proof_of_work_limit: Uint256,
    pub(crate) target_timespan: i64,
    pub(crate) target_spacing: i64,
    pub(crate) proof_of_stake_limit: Uint256,
    pub(crate) target_timespan_pos: i64,
    pub(crate) target_spacing_pos: i64,

    // Consensus policy
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) enforce_block_upgrade_majority: u32,
    pub(crate) reject_block_outdated_majority: u32,
    pub(crate) to_check_block_upgrade_majority: u32,
    pub(crate) max_reorganization_depth: u32,
    pub(crate) coinbase_maturity: u32,
    pub(crate) last_pow_block: u32,
    pub(crate) modifier_upgrade_block: u32,
    pub(crate) max_money_out: Amount,
    pub(crate) default_miner_threads: i32,

    // Address encoding
    #[serde(serialize_with = "serialize_base58_prefixes")]
    pub(crate) base58_prefixes: [Vec<u8>; Base58Type::MAX_BASE58_TYPES],

    // Network bootstrap
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seeds: Vec<SocketAddr>,

    // Operational flags
    pub(crate) mining_requires_peers: bool,
    pub(crate) headers_first_syncing_active: bool,
    pub(crate) allow_min_difficulty_blocks: bool,
    pub(crate) skip_proof_of_work_check: bool,
    pub(crate) require_standard: bool,
    pub(crate) default_consistency_checks: bool,
    pub(crate) mine_blocks_on_demand: bool,
    pub(crate) testnet_to_be_deprecated_field_rpc: bool,

    // Trust material
    #[serde(serialize_with = "serialize_hex")]
    pub(crate) alert_key: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub(crate) alert_key_old: Vec<u8>,
    pub(crate) spork_key: &'static str,
    pub(crate) spork_key_old: &'static str,
    pub(crate) masternode_pool_dummy_address: &'static str,
    pub(crate) masternode_count_drift: u32,
    pub(crate) pool_max_transactions: u32,
    pub(crate) start_masternode_payments: i64,
    pub(crate) budget_fee_confirmations: i64,
    pub(crate) start_new_keys: i64,

    #[serde(skip)]
    pub(crate) checkpoints: &'static CheckpointData,
}

impl ChainParams {
    pub fn network_id(&self) -> NetworkKind {
        self.network_id
    }
    /// The BIP70 network string (main, test or regtest)
    pub fn network_id_string(&self) -> &'static str {
        self.network_id_string
    }

    pub fn hash_genesis_block(&self) -> &Uint256 {
        &self.hash_genesis_block
    }
    pub fn message_start(&self) -> &MessageStart {
        &self.message_start
    }
    pub fn default_port(&self) -> u16 {
        self.default_port
    }
    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis
    }

    pub fn proof_of_work_limit(&self) -> &Uint256 {
        &self.proof_of_work_limit
    }
    pub fn target_timespan(&self) -> i64 {
        self.target_timespan
    }
    pub fn target_spacing(&self) -> i64 {
        self.target_spacing
    }
    /// Number of blocks between proof-of-work difficulty retargets
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn proof_of_stake_limit(&self) -> &Uint256 {
        &self.proof_of_stake_limit
    }
    pub fn target_timespan_pos(&self) -> i64 {
        self.target_timespan_pos
    }
    pub fn target_spacing_pos(&self) -> i64 {
        self.target_spacing_pos
    }
    /// Number of blocks between proof-of-stake difficulty retargets
    pub fn interval_pos(&self) -> i64 {
        self.target_timespan_pos / self.target_spacing_pos
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }
    /// Number of blocks in the window that must carry a new version before it is enforced
    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.enforce_block_upgrade_majority
    }
    /// Number of blocks in the window that must carry a new version before older ones are rejected
    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.reject_block_outdated_majority
    }
    /// Size of the window used to count block version majorities
    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.to_check_block_upgrade_majority
    }
    pub fn max_reorganization_depth(&self) -> u32 {
        self.max_reorganization_depth
    }
    /// Confirmations needed before a coinbase output can be spent
    pub fn coinbase_maturity(&self) -> u32 {
        self.coinbase_maturity
    }
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }
    pub fn modifier_upgrade_block(&self) -> u32 {
        self.modifier_upgrade_block
    }
    pub fn max_money_out(&self) -> Amount {
        self.max_money_out
    }
    /// Used when the miner is started with a negative number of threads
    pub fn default_miner_threads(&self) -> i32 {
        self.default_miner_threads
    }

    pub fn base58_prefix(&self, base58_type: Base58Type) -> &[u8] {
        &self.base58_prefixes[base58_type.index()]
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }
    pub fn fixed_seeds(&self) -> &[SocketAddr] {
        &self.fixed_seeds
    }

    /// Make the miner wait for peers to avoid wasting work
    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }
    pub fn headers_first_syncing_active(&self) -> bool {
        self.headers_first_syncing_active
    }
    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }
    /// Accept blocks of any difficulty
    pub fn skip_proof_of_work_check(&self) -> bool {
        self.skip_proof_of_work_check
    }
    pub fn require_standard(&self) -> bool {
        self.require_standard
    }
    /// Default for the mempool and block index consistency checks
    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }
    /// Stop the miner after a block is found
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }
    /// Report the legacy `testnet` field over RPC; new code should use `network_id_string`
    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.testnet_to_be_deprecated_field_rpc
    }

    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }
    pub fn alert_key_old(&self) -> &[u8] {
        &self.alert_key_old
    }
    pub fn spork_key(&self) -> &'static str {
        self.spork_key
    }
    pub fn spork_key_old(&self) -> &'static str {
        self.spork_key_old
    }
    pub fn masternode_pool_dummy_address(&self) -> &'static str {
        self.masternode_pool_dummy_address
    }
    /// How far the masternode count may be off when paying see-saw rewards
    pub fn masternode_count_drift(&self) -> u32 {
        self.masternode_count_drift
    }
    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }
    pub fn start_masternode_payments(&self) -> i64 {
        self.start_masternode_payments
    }
    pub fn budget_fee_confirmations(&self) -> i64 {
        self.budget_fee_confirmations
    }
    pub fn start_new_keys(&self) -> i64 {
        self.start_new_keys
    }

    pub fn checkpoints(&self) -> &'static CheckpointData {
        self.checkpoints
    }

    /// Checks the invariants every parameter set must hold
    ///
    /// # Errors
    /// If any invariant is broken. For built-in parameters this is a programming error
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidParams {
            network: self.network_id,
            reason,
        };

        if self.network_id_string != self.network_id.id_string() {
            return Err(invalid(format!("network string {} does not match", self.network_id_string)));
        }
        if self.message_start == [0; MESSAGE_START_SIZE] {
            return Err(invalid("message start is empty".to_string()));
        }

        check_interval(self.target_timespan, self.target_spacing).map_err(|reason| invalid(format!("PoW {}", reason)))?;
        check_interval(self.target_timespan_pos, self.target_spacing_pos).map_err(|reason| invalid(format!("PoS {}", reason)))?;

        if self.proof_of_work_limit.is_null() || self.proof_of_stake_limit.is_null() {
            return Err(invalid("difficulty limit is zero".to_string()));
        }
        if self.subsidy_halving_interval == 0 {
            return Err(invalid("subsidy halving interval is zero".to_string()));
        }
        if self.enforce_block_upgrade_majority == 0
            || self.enforce_block_upgrade_majority > self.reject_block_outdated_majority
            || self.reject_block_outdated_majority > self.to_check_block_upgrade_majority
        {
            return Err(invalid(format!(
                "block upgrade majorities {}/{}/{} are out of order",
                self.enforce_block_upgrade_majority,
                self.reject_block_outdated_majority,
                self.to_check_block_upgrade_majority
            )));
        }
        if self.coinbase_maturity == 0 {
            return Err(invalid("coinbase maturity is zero".to_string()));
        }
        if self.max_money_out <= 0 {
            return Err(invalid("money supply is not positive".to_string()));
        }

        for base58_type in Base58Type::ALL.iter() {
            if self.base58_prefix(*base58_type).is_empty() {
                return Err(invalid(format!("missing base58 prefix for {:?}", base58_type)));
            }
        }

        if let Some(hash) = self.checkpoints.get(0) {
            if *hash != self.hash_genesis_block {
                return Err(invalid(format!("checkpoint at height 0 is {}, not the genesis block", hash)));
            }
        }
        Ok(())
    }
}

fn check_interval(timespan: i64, spacing: i64) -> std::result::Result<(), String> {
    if spacing <= 0 || timespan <= 0 {
        return Err(format!("target timespan {} and spacing {} must be positive", timespan, spacing));
    }
    if timespan % spacing != 0 {
        return Err(format!("target timespan {} is not a multiple of spacing {}", timespan, spacing));
    }
    Ok(())
}
