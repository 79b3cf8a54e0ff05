//! # NeoBitcoin network parameters
//!
//! Defines the parameters of the main network, the public test network and regression test
//! networks, and the [`Registry`] through which a node selects the one it runs on.
//!
//! ```
//! use chainparams::{NetworkKind, Registry};
//!
//! let registry = Registry::new();
//! let network = registry.select_from_flags(false, true).unwrap();
//!
//! assert_eq!(network, NetworkKind::RegressionTest);
//! assert_eq!(registry.active().network_id_string(), "regtest");
//! ```

pub mod checkpoints;
mod config;
mod error;
pub mod factory;
mod genesis;
#[cfg(any(test, feature = "modifiable"))]
mod modifiable;
mod network;
mod params;
mod registry;
pub mod selection;
mod uint256;

pub use checkpoints::CheckpointData;
pub use config::Config;
pub use error::{Error, Result};
pub use genesis::{GenesisBlock, GenesisHasher};
#[cfg(any(test, feature = "modifiable"))]
pub use modifiable::{ModifiableParams, ParamsOverride};
pub use network::{Base58Type, NetworkKind};
pub use params::{Amount, ChainParams, DnsSeed, MessageStart, COIN, MESSAGE_START_SIZE};
pub use registry::Registry;
pub use uint256::Uint256;
