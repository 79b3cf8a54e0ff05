use std::sync::atomic::{
    AtomicU8,
    Ordering
};
use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;

use crate::{
    factory,
    selection,
    ChainParams,
    Config,
    Error,
    GenesisHasher,
    NetworkKind,
    Result
};

/// Marks that no network has been activated yet
const NO_NETWORK: u8 = u8::MAX;

/// # Network parameter registry
///
/// Holds the parameters of every network, each built at most once on first use, and tracks the
/// network this node runs on. A node creates one registry at startup, activates a network before
/// spawning any other threads and then shares the registry by reference. Reading the active
/// parameters after that never blocks
pub struct Registry {
    params: [OnceCell<Arc<ChainParams>>; NetworkKind::MAX_NETWORK_TYPES],
    active: AtomicU8,
    #[cfg(any(test, feature = "modifiable"))]
    pub(crate) overlay: crate::modifiable::Overlay,
}

impl Registry {
    /// Creates a registry with no active network
    pub fn new() -> Self {
        Registry {
            params: [OnceCell::new(), OnceCell::new(), OnceCell::new()],
            active: AtomicU8::new(NO_NETWORK),
            #[cfg(any(test, feature = "modifiable"))]
            overlay: crate::modifiable::Overlay::new(),
        }
    }

    /// Gets the parameters of `network`, building them on first use
    ///
    /// These are always the built-in parameters, whatever is active or overridden
    pub fn get(&self, network: NetworkKind) -> Arc<ChainParams> {
        self.params[network.index()]
            .get_or_init(|| Arc::new(factory::build(network)))
            .clone()
    }

    /// Makes `network` the active network, replacing any previous selection
    ///
    /// Only meant to be called during startup (or between tests) as other threads may be reading
    /// the active parameters
    pub fn activate(&self, network: NetworkKind) {
        let params = self.get(network);
        self.active.store(network.index() as u8, Ordering::Release);

        info!(
            "Using the {} network (P2P port {}, message start {})",
            network,
            params.default_port(),
            hex::encode(params.message_start())
        );
    }

    /// Checks the genesis block of `network` against its expected hash, then activates it
    ///
    /// # Errors
    /// If the genesis block does not hash to the expected value. The previous selection is kept
    pub fn activate_verified<H>(&self, network: NetworkKind, hasher: &H) -> Result<()>
    where
        H: GenesisHasher + ?Sized,
    {
        self.verify_genesis(network, hasher)?;
        self.activate(network);
        Ok(())
    }

    /// Checks that the genesis block of `network` hashes to the expected genesis hash
    ///
    /// # Errors
    /// If the hashes differ
    pub fn verify_genesis<H>(&self, network: NetworkKind, hasher: &H) -> Result<()>
    where
        H: GenesisHasher + ?Sized,
    {
        let params = self.get(network);
        let computed = hasher.hash_genesis(params.genesis_block());

        if computed != *params.hash_genesis_block() {
            return Err(Error::GenesisMismatch {
                network,
                expected: *params.hash_genesis_block(),
                computed,
            });
        }
        Ok(())
    }

    /// Activates the network requested by the `-testnet` and `-regtest` flags
    ///
    /// # Returns
    /// The activated network
    ///
    /// # Errors
    /// If the flags are an invalid combination, in which case nothing is activated
    pub fn select_from_flags(&self, wants_testnet: bool, wants_regtest: bool) -> Result<NetworkKind> {
        let network = selection::resolve(wants_testnet, wants_regtest)?;
        self.activate(network);
        Ok(network)
    }

    /// Activates the network requested on the command line
    pub fn select_from_config(&self, config: &Config) -> Result<NetworkKind> {
        self.select_from_flags(config.testnet, config.regtest)
    }

    /// The active network, if one has been selected
    pub fn active_kind(&self) -> Option<NetworkKind> {
        NetworkKind::from_index(self.active.load(Ordering::Acquire) as usize)
    }

    /// Gets the parameters of the active network
    ///
    /// # Errors
    /// If no network has been activated
    pub fn try_active(&self) -> Result<Arc<ChainParams>> {
        let network = self.active_kind().ok_or(Error::NoNetworkSelected)?;

        #[cfg(any(test, feature = "modifiable"))]
        {
            if let Some(params) = self.overlay.current(network) {
                return Ok(params);
            }
        }

        Ok(self.get(network))
    }

    /// Gets the parameters of the active network
    ///
    /// # Panics
    /// If no network has been activated. Reading parameters before startup has selected a
    /// network is a programming error
    pub fn active(&self) -> Arc<ChainParams> {
        self.try_active().unwrap_or_else(|err| panic!("{}", err))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
