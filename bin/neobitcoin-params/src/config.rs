use structopt::StructOpt;

use bin_common::Config as BinCommonConfig;
use chainparams::Config as ChainParamsConfig;

/// Shows the consensus and network parameters of a NeoBitcoin network
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case", name = "neobitcoin-params")]
pub struct Config {
    #[structopt(flatten)]
    pub bin_common_config: BinCommonConfig,

    #[structopt(flatten)]
    pub chainparams_config: ChainParamsConfig,

    /// Print the full parameter set as JSON instead of a summary
    #[structopt(long)]
    pub json: bool,
}
