//! Built-in parameter sets of the three NeoBitcoin networks

use std::convert::TryFrom;
use std::net::{
    Ipv4Addr,
    SocketAddr
};

use log::debug;

use crate::{
    checkpoints,
    ChainParams,
    DnsSeed,
    Error,
    GenesisBlock,
    NetworkKind,
    Result,
    Uint256,
    COIN
};

/// Default P2P port of the main network
pub const MAIN_DEFAULT_PORT: u16 = 51672;
/// Default P2P port of the public test network
pub const TESTNET_DEFAULT_PORT: u16 = 51674;
/// Default P2P port of regression test networks
pub const REGTEST_DEFAULT_PORT: u16 = 51676;

const GENESIS_COINBASE_MESSAGE: &str =
    "Reuters 13/Sep/2017 Bitcoin falls as China moves to shut exchanges";
const GENESIS_OUTPUT_PUBLIC_KEY: &str = "0445dfbe234463e90a60dcdff354ddd8b3a1c4605977fca41c9118dd55244aefca01faa03b32261527ed1f3129603fe4dcae28a424a882b6caeed605f5cd61205e";
const GENESIS_MERKLE_ROOT: &str = "0c62396df37150750183431f51f52f3d13f1aa7f688710ec152f5f29a45cec2e";

const MAIN_FIXED_SEEDS: &[([u8; 4], u16)] = &[
    ([45, 32, 170, 14], MAIN_DEFAULT_PORT),
    ([95, 179, 142, 203], MAIN_DEFAULT_PORT),
    ([138, 68, 24, 91], MAIN_DEFAULT_PORT),
    ([159, 203, 71, 109], MAIN_DEFAULT_PORT),
    ([178, 62, 225, 36], MAIN_DEFAULT_PORT),
];

const TESTNET_FIXED_SEEDS: &[([u8; 4], u16)] = &[([165, 227, 43, 128], TESTNET_DEFAULT_PORT)];

/// Builds the parameters of `network`
///
/// # Panics
/// If the built-in parameters break an invariant. They are compiled in, so this can only be a
/// programming error
pub fn build(network: NetworkKind) -> ChainParams {
    try_build(network).unwrap_or_else(|err| panic!("{}", err))
}

/// Builds and validates the parameters of `network`
///
/// # Errors
/// If the built-in parameters break an invariant
pub fn try_build(network: NetworkKind) -> Result<ChainParams> {
    let params = match network {
        NetworkKind::Main => main_params()?,
        NetworkKind::PublicTest => testnet_params()?,
        NetworkKind::RegressionTest => regtest_params()?,
    };
    params.validate()?;

    debug!("Built {} network parameters", network);
    Ok(params)
}

fn parse_hash(network: NetworkKind, hash: &str) -> Result<Uint256> {
    Uint256::try_from(hash).map_err(|source| Error::InvalidKey { network, source })
}

fn parse_key(network: NetworkKind, key: &str) -> Result<Vec<u8>> {
    hex::decode(key).map_err(|source| Error::InvalidKey { network, source })
}

fn fixed_seeds(seeds: &[([u8; 4], u16)]) -> Vec<SocketAddr> {
    seeds
        .iter()
        .map(|(ip, port)| SocketAddr::from((Ipv4Addr::from(*ip), *port)))
        .collect()
}

fn main_params() -> Result<ChainParams> {
    let network = NetworkKind::Main;

    let genesis = GenesisBlock {
        version: 1,
        prev_block_hash: Uint256::null(),
        merkle_root: parse_hash(network, GENESIS_MERKLE_ROOT)?,
        time: 1_505_314_800,
        bits: 0x1e0f_fff0,
        nonce: 1_863_474,
        coinbase_message: GENESIS_COINBASE_MESSAGE,
        output_public_key: GENESIS_OUTPUT_PUBLIC_KEY,
        reward: 250 * COIN,
    };

    Ok(ChainParams {
        network_id: network,
        network_id_string: network.id_string(),

        hash_genesis_block: parse_hash(network, "000009ea46e7b8ec5ed2a961c244dfd7dd64c0d0e469635e8caeffc6c98451e3")?,
        // Rarely used upper ASCII, not valid as UTF-8, and a large 32-bit integer with any alignment
        message_start: [0x91, 0xc5, 0xfe, 0xea],
        default_port: MAIN_DEFAULT_PORT,
        genesis,

        proof_of_work_limit: Uint256::max_shr(20),
        target_timespan: 40 * 60,
        target_spacing: 60,
        proof_of_stake_limit: Uint256::max_shr(24),
        target_timespan_pos: 40 * 60,
        target_spacing_pos: 60,

        subsidy_halving_interval: 1_050_000,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        max_reorganization_depth: 100,
        coinbase_maturity: 100,
        last_pow_block: 1000,
        modifier_upgrade_block: 1200,
        max_money_out: 21_000_000 * COIN,
        default_miner_threads: 0,

        base58_prefixes: [
            vec![53],                     // N
            vec![16],                     // 7
            vec![212],
            vec![0x02, 0x2d, 0x25, 0x33],
            vec![0x02, 0x21, 0x31, 0x2b],
            vec![0x80, 0x00, 0x00, 0x77], // BIP44 coin type 119
        ],

        dns_seeds: vec![
            DnsSeed::new("neobitcoin.io", "seed1.neobitcoin.io"),
            DnsSeed::new("neobitcoin.io", "seed2.neobitcoin.io"),
            DnsSeed::new("nbc-seeds.net", "dnsseed.nbc-seeds.net"),
        ],
        fixed_seeds: fixed_seeds(MAIN_FIXED_SEEDS),

        mining_requires_peers: true,
        headers_first_syncing_active: false,
        allow_min_difficulty_blocks: false,
        skip_proof_of_work_check: false,
        require_standard: true,
        default_consistency_checks: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,

        alert_key: parse_key(network, "041e9817e9cc1e32990daf9a1384731a2ca04b60edae453cc79b8f5c380833e9bcd91f7800c0599e93b98aae7b779bb5e860ad17d65b263c5902ad5be7b95efad5")?,
        alert_key_old: parse_key(network, "044df1a126cfc413ab0e3228b7e57be6d6279e0fda0c4dc1d52d7b1f545ff7f4e66098703f96e5e1facde454cee2f827a3a08a55b3526b39b146e6c3898db1ba8e")?,
        spork_key: "04bf438564b306e424bac82b790fcb8de57a9eb93c43fd468a8cf7ee551a2750cf659c146ad7f6e42afeae312208230a44265a47f27565ca039b4d2f6d7e8ab9bd",
        spork_key_old: "040cedf0ff5563ffd86cd384d65cc47c2c56af683ca1afc47a1a4a1a4dbefee6d100a1ce930e32e4ca99190d9ba591b293da0fc918e2cf199a00fafcaf6a0f554f",
        masternode_pool_dummy_address: "NMXnDuGwqg1Vg1nGEQp8Qs6rQrXmS5rbvT",
        masternode_count_drift: 20,
        pool_max_transactions: 3,
        // 2017-10-01 00:00:00 UTC
        start_masternode_payments: 1_506_816_000,
        budget_fee_confirmations: 6,
        // 2018-01-01 00:00:00 UTC
        start_new_keys: 1_514_764_800,

        checkpoints: checkpoints::for_network(network),
    })
}

fn testnet_params() -> Result<ChainParams> {
    let network = NetworkKind::PublicTest;
    let mut params = main_params()?;

    params.network_id = network;
    params.network_id_string = network.id_string();

    params.genesis.time = 1_505_314_860;
    params.genesis.nonce = 2_402_015;
    params.hash_genesis_block = parse_hash(network, "00000cae74f342e257733b80e22ed680c934a0a9066f3606e34742d0f320119c")?;
    params.message_start = [0x46, 0x77, 0x66, 0xbb];
    params.default_port = TESTNET_DEFAULT_PORT;

    params.subsidy_halving_interval = 210_000;
    params.enforce_block_upgrade_majority = 51;
    params.reject_block_outdated_majority = 75;
    params.to_check_block_upgrade_majority = 100;
    params.coinbase_maturity = 15;
    params.last_pow_block = 200;
    params.modifier_upgrade_block = 400;
    params.max_money_out = 43_199_500 * COIN;

    params.base58_prefixes = [
        vec![112],                    // n
        vec![19],                     // 8 or 9
        vec![239],
        vec![0x3a, 0x80, 0x61, 0xa0],
        vec![0x3a, 0x80, 0x58, 0x37],
        vec![0x80, 0x00, 0x00, 0x01], // BIP44 coin type 1 for all testnets
    ];

    params.dns_seeds = vec![DnsSeed::new("neobitcoin.io", "testnet-seed.neobitcoin.io")];
    params.fixed_seeds = fixed_seeds(TESTNET_FIXED_SEEDS);

    params.allow_min_difficulty_blocks = true;
    params.require_standard = false;
    params.testnet_to_be_deprecated_field_rpc = true;

    params.alert_key = parse_key(network, "0414279fbada5e18a9c6d61b70d7b44767537ce9b2ce147adde5ddc6bbe89594a15620068649d3dc4330f24cf8b71e04a303154ec78fd14493e1fa5b05ba36800a")?;
    params.alert_key_old = parse_key(network, "04e163fe223c579d3fa616e47ef62a87fd84f19f82e67cfbdeaadbb41d91e0e842bd562e1f9866dc2470e575c79a85902c79352b2576f2862b4e43c1aa5f110020")?;
    params.spork_key = "04bfc82aeb31e042a2eb2277bab439b91def4619ea7c6ec1fc7f9fbe6339a2e33a0289aa8c848a0a9151f4b0110f06687b5bc77110c5ee17414bc519e40ea9e50a";
    params.spork_key_old = "04d80abbf1ae129f07b2de9a3eb04c2b50fc86c661933628965442e1ae970aa4d2eed5f942ff9dbaef40cabd314d1160d3939212e76cb507f543f79862fd740628";
    params.masternode_pool_dummy_address = "nBpkxXdSSbGgojAHvXcgnZqGBV4cA9g9K7";
    params.masternode_count_drift = 4;
    params.pool_max_transactions = 2;
    // 2017-09-13 15:01:00 UTC
    params.start_masternode_payments = 1_505_314_860;
    params.budget_fee_confirmations = 3;
    // 2017-12-01 00:00:00 UTC
    params.start_new_keys = 1_512_086_400;

    params.checkpoints = checkpoints::for_network(network);
    Ok(params)
}

fn regtest_params() -> Result<ChainParams> {
    let network = NetworkKind::RegressionTest;
    let mut params = testnet_params()?;

    params.network_id = network;
    params.network_id_string = network.id_string();

    params.genesis.time = 1_505_314_920;
    params.genesis.bits = 0x207f_ffff;
    params.genesis.nonce = 12345;
    params.hash_genesis_block = parse_hash(network, "30858e58aa34b5b55771753e1acab7ee1c30fde61432c15850c57060d4a8a2a5")?;
    params.message_start = [0xa2, 0xd0, 0x7f, 0xad];
    params.default_port = REGTEST_DEFAULT_PORT;

    params.proof_of_work_limit = Uint256::max_shr(1);
    params.target_timespan = 24 * 60 * 60;
    params.target_spacing = 60;

    params.subsidy_halving_interval = 150;
    params.enforce_block_upgrade_majority = 750;
    params.reject_block_outdated_majority = 950;
    params.to_check_block_upgrade_majority = 1000;
    params.coinbase_maturity = 100;
    params.last_pow_block = 250;
    params.modifier_upgrade_block = 0;
    params.default_miner_threads = 1;

    // Regression test networks never look for peers
    params.dns_seeds.clear();
    params.fixed_seeds.clear();

    params.mining_requires_peers = false;
    params.allow_min_difficulty_blocks = true;
    params.default_consistency_checks = true;
    params.mine_blocks_on_demand = true;
    params.testnet_to_be_deprecated_field_rpc = false;

    params.checkpoints = checkpoints::for_network(network);
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Base58Type;

    #[test]
    fn builds_are_deterministic() {
        for network in NetworkKind::ALL.iter() {
            let first = serde_json::to_string(&build(*network)).unwrap();
            let second = serde_json::to_string(&build(*network)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn every_network_is_valid() {
        for network in NetworkKind::ALL.iter() {
            let params = try_build(*network).unwrap();
            assert_eq!(params.network_id(), *network);
            assert_eq!(params.network_id_string(), network.id_string());
            assert_eq!(params.checkpoints().get(0), Some(params.hash_genesis_block()));
        }
    }

    #[test]
    fn proof_of_work_checkpoints_meet_the_limit() {
        for network in NetworkKind::ALL.iter() {
            let params = build(*network);
            let limit = params.proof_of_work_limit().to_hex();

            // Equal length lowercase hex compares like the numbers themselves
            for (height, hash) in params.checkpoints().iter() {
                if height <= params.last_pow_block() {
                    assert!(hash.to_hex() <= limit, "{} checkpoint {} above the PoW limit", network, height);
                }
            }
        }
    }

    #[test]
    fn networks_are_distinguishable_on_the_wire() {
        let main = build(NetworkKind::Main);
        let testnet = build(NetworkKind::PublicTest);
        let regtest = build(NetworkKind::RegressionTest);

        assert_ne!(main.message_start(), testnet.message_start());
        assert_ne!(testnet.message_start(), regtest.message_start());
        assert_ne!(main.message_start(), regtest.message_start());

        assert_eq!(main.default_port(), MAIN_DEFAULT_PORT);
        assert_eq!(testnet.default_port(), TESTNET_DEFAULT_PORT);
        assert_eq!(regtest.default_port(), REGTEST_DEFAULT_PORT);

        assert_ne!(main.base58_prefix(Base58Type::PubkeyAddress), testnet.base58_prefix(Base58Type::PubkeyAddress));
    }

    #[test]
    fn main_network_parameters() {
        let params = build(NetworkKind::Main);

        assert_eq!(params.interval(), 40);
        assert_eq!(params.interval_pos(), 40);
        assert_eq!(params.proof_of_work_limit().to_string(), "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(params.max_money_out(), 21_000_000 * COIN);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[53]);
        assert_eq!(params.dns_seeds().len(), 3);
        assert_eq!(params.fixed_seeds().len(), MAIN_FIXED_SEEDS.len());
        assert!(params.fixed_seeds().iter().all(|seed| seed.port() == MAIN_DEFAULT_PORT));
        assert_eq!(hex::encode(params.alert_key()).len(), 130);
        assert!(params.require_standard());
        assert!(!params.allow_min_difficulty_blocks());
        assert!(!params.skip_proof_of_work_check());
        assert_eq!(params.genesis_block().reward, 250 * COIN);
        assert!(params.genesis_block().prev_block_hash.is_null());
    }

    #[test]
    fn regtest_inherits_testnet_address_prefixes() {
        let testnet = build(NetworkKind::PublicTest);
        let regtest = build(NetworkKind::RegressionTest);

        for base58_type in Base58Type::ALL.iter() {
            assert_eq!(testnet.base58_prefix(*base58_type), regtest.base58_prefix(*base58_type));
        }
        assert_eq!(testnet.spork_key(), regtest.spork_key());
    }

    #[test]
    fn regtest_relaxes_mining_rules() {
        let main = build(NetworkKind::Main);
        let regtest = build(NetworkKind::RegressionTest);

        assert!(regtest.allow_min_difficulty_blocks());
        assert_ne!(regtest.allow_min_difficulty_blocks(), main.allow_min_difficulty_blocks());
        assert!(!regtest.mining_requires_peers());
        assert!(regtest.mine_blocks_on_demand());
        assert!(regtest.default_consistency_checks());
        assert!(regtest.dns_seeds().is_empty());
        assert!(regtest.fixed_seeds().is_empty());
        assert_eq!(regtest.interval(), 1440);
        assert_eq!(regtest.genesis_block().bits, 0x207f_ffff);
    }
}
