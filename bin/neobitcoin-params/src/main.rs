use std::fmt::Write;

use log::{error, info};
use structopt::StructOpt;

use chainparams::{
    Base58Type,
    ChainParams,
    Registry
};

mod config;
use config::Config;

fn main() {
    // Command Line Arguments
    let config = Config::from_args();

    // Network
    let registry = Registry::new();
    let network = registry.select_from_config(&config.chainparams_config).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });

    // Logging
    let data_dir = bin_common::data_dir::network_data_dir(&config.bin_common_config, network)
        .expect("Failed to create data directory");
    bin_common::logger::init(&config.bin_common_config, &data_dir, "neobitcoin-params")
        .expect("Failed to initialise logger");
    info!("Showing parameters of the {} network", network);

    // Main
    if let Err(err) = run(&config, &registry) {
        error!("Unable to show network parameters! {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config, registry: &Registry) -> Result<(), serde_json::Error> {
    let params = registry.active();

    if config.json {
        println!("{}", to_json(&params)?);
    } else {
        print!("{}", summary(&params));
    }
    Ok(())
}

fn to_json(params: &ChainParams) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(params)
}

fn summary(params: &ChainParams) -> String {
    let network = params.network_id();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Network:\t{}", params.network_id_string());
    let _ = writeln!(out, "Genesis block:\t{}", params.hash_genesis_block());
    let _ = writeln!(out, "Message start:\t{}", hex::encode(params.message_start()));
    let _ = writeln!(out, "P2P port:\t{}\tRPC port: {}", params.default_port(), network.rpc_port());
    let _ = writeln!(
        out,
        "PoW retarget:\tevery {} blocks ({}s spacing), limit {}",
        params.interval(),
        params.target_spacing(),
        params.proof_of_work_limit()
    );
    let _ = writeln!(
        out,
        "PoS retarget:\tevery {} blocks ({}s spacing), limit {}",
        params.interval_pos(),
        params.target_spacing_pos(),
        params.proof_of_stake_limit()
    );
    let _ = writeln!(out, "Last PoW block:\t{}", params.last_pow_block());
    let _ = writeln!(out, "Coinbase maturity:\t{}", params.coinbase_maturity());
    let _ = writeln!(out, "Halving interval:\t{}", params.subsidy_halving_interval());
    for base58_type in Base58Type::ALL.iter() {
        let _ = writeln!(out, "Base58 prefix:\t{:?} = {}", base58_type, hex::encode(params.base58_prefix(*base58_type)));
    }
    for seed in params.dns_seeds() {
        let _ = writeln!(out, "DNS seed:\t{} ({})", seed.host, seed.name);
    }
    let _ = writeln!(out, "Fixed seeds:\t{}", params.fixed_seeds().len());
    if let Some(height) = params.checkpoints().last_checkpoint_height() {
        let _ = writeln!(out, "Last checkpoint:\t{}", height);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainparams::NetworkKind;

    #[test]
    fn json_dump_is_a_single_document() {
        let registry = Registry::new();

        for network in NetworkKind::ALL.iter() {
            registry.activate(*network);
            let dump = to_json(&registry.active()).unwrap();

            let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
            assert_eq!(value["network_id_string"], network.id_string());
            assert_eq!(value["default_port"], registry.active().default_port());
        }
    }

    #[test]
    fn summary_does_not_depend_on_logging() {
        let registry = Registry::new();
        let config = chainparams::Config {
            testnet: true,
            regtest: false,
        };
        registry.select_from_config(&config).unwrap();

        let summary = summary(&registry.active());
        assert!(summary.starts_with("Network:\ttest\n"));
        assert!(summary.contains("P2P port:\t51674\tRPC port: 51675"));
        assert_eq!(summary.lines().filter(|line| line.starts_with("Base58 prefix:")).count(), 6);
    }
}
