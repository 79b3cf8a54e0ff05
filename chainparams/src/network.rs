use std::fmt::{
    Display,
    Formatter
};

use serde::{Deserialize, Serialize};

/// The networks a node can run on
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum NetworkKind {
    /// The main network on which people trade goods and services
    #[serde(rename = "main")]
    Main,
    /// The public test network which gets reset from time to time
    #[serde(rename = "test")]
    PublicTest,
    /// Regression test mode, intended for private networks only
    #[serde(rename = "regtest")]
    RegressionTest,
}

impl NetworkKind {
    /// Number of network kinds, used to size per-network tables
    pub const MAX_NETWORK_TYPES: usize = 3;

    /// Every network kind, in table order
    pub const ALL: [NetworkKind; NetworkKind::MAX_NETWORK_TYPES] = [
        NetworkKind::Main,
        NetworkKind::PublicTest,
        NetworkKind::RegressionTest,
    ];

    /// Position of this network in per-network tables
    pub fn index(self) -> usize {
        match self {
            NetworkKind::Main => 0,
            NetworkKind::PublicTest => 1,
            NetworkKind::RegressionTest => 2,
        }
    }

    /// Inverse of `index`
    pub fn from_index(index: usize) -> Option<Self> {
        NetworkKind::ALL.get(index).copied()
    }

    /// The BIP70 network string reported over RPC
    pub fn id_string(self) -> &'static str {
        match self {
            NetworkKind::Main => "main",
            NetworkKind::PublicTest => "test",
            NetworkKind::RegressionTest => "regtest",
        }
    }

    /// Default port of the JSON-RPC server
    pub fn rpc_port(self) -> u16 {
        match self {
            NetworkKind::Main => 51673,
            NetworkKind::PublicTest => 51675,
            NetworkKind::RegressionTest => 51677,
        }
    }

    /// Sub-directory of the data directory holding this network's files
    ///
    /// The main network lives directly in the data directory
    pub fn data_dir(self) -> &'static str {
        match self {
            NetworkKind::Main => "",
            NetworkKind::PublicTest => "testnet4",
            NetworkKind::RegressionTest => "regtest",
        }
    }
}

impl Display for NetworkKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id_string())
    }
}

/// Kinds of data that are base58 encoded with a network specific prefix
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address (BIP16)
    ScriptAddress,
    /// WIF encoded secret key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended secret key
    ExtSecretKey,
    /// BIP44 coin type
    ExtCoinType,
}

impl Base58Type {
    /// Number of base58 types, used to size the prefix table
    pub const MAX_BASE58_TYPES: usize = 6;

    /// Every base58 type, in table order
    pub const ALL: [Base58Type; Base58Type::MAX_BASE58_TYPES] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];

    /// Position of this type in the prefix table
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_bip70_network_strings() {
        assert_eq!(NetworkKind::Main.to_string(), "main");
        assert_eq!(NetworkKind::PublicTest.to_string(), "test");
        assert_eq!(NetworkKind::RegressionTest.to_string(), "regtest");
    }

    #[test]
    fn indices_round_trip_through_the_table() {
        for (i, kind) in NetworkKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(NetworkKind::from_index(i), Some(*kind));
        }
        assert_eq!(NetworkKind::from_index(NetworkKind::MAX_NETWORK_TYPES), None);

        for (i, base58_type) in Base58Type::ALL.iter().enumerate() {
            assert_eq!(base58_type.index(), i);
        }
    }

    #[test]
    fn networks_use_distinct_rpc_ports_and_data_dirs() {
        assert_ne!(NetworkKind::Main.rpc_port(), NetworkKind::PublicTest.rpc_port());
        assert_ne!(NetworkKind::PublicTest.rpc_port(), NetworkKind::RegressionTest.rpc_port());
        assert_eq!(NetworkKind::Main.data_dir(), "");
        assert_eq!(NetworkKind::PublicTest.data_dir(), "testnet4");
        assert_eq!(NetworkKind::RegressionTest.data_dir(), "regtest");
    }
}
