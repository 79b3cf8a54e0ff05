use structopt::StructOpt;

/// Network selection
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Use the public test network
    #[structopt(long)]
    pub testnet: bool,

    /// Use a private regression test network, where blocks can be solved instantly
    #[structopt(long)]
    pub regtest: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_network_flags() {
        let config = Config::from_iter(&["test"]);
        assert!(!config.testnet && !config.regtest);

        let config = Config::from_iter(&["test", "--testnet"]);
        assert!(config.testnet && !config.regtest);

        let config = Config::from_iter(&["test", "--testnet", "--regtest"]);
        assert!(config.testnet && config.regtest);
    }
}
