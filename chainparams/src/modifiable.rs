//! Test-only overrides of the active network parameters
//!
//! Tests adapt a few parameters to reach specific code paths more easily. The overrides are a
//! layer on top of the built-in parameters: the built-in values are never touched and dropping
//! the layer restores them.
//!
//! Overrides are visible to every reader of the registry, so tests that use them must not run
//! concurrently with other tests reading the same registry.

use std::sync::atomic::{
    AtomicBool,
    Ordering
};
use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use log::{debug, warn};

use crate::{
    ChainParams,
    Error,
    NetworkKind,
    Registry,
    Result
};

/// The parameters a test is allowed to override, `None` meaning the built-in value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamsOverride {
    pub subsidy_halving_interval: Option<u32>,
    pub enforce_block_upgrade_majority: Option<u32>,
    pub reject_block_outdated_majority: Option<u32>,
    pub to_check_block_upgrade_majority: Option<u32>,
    pub default_consistency_checks: Option<bool>,
    pub allow_min_difficulty_blocks: Option<bool>,
    pub skip_proof_of_work_check: Option<bool>,
}

impl ParamsOverride {
    pub fn is_empty(&self) -> bool {
        *self == ParamsOverride::default()
    }

    /// Copies `base` with the overridden values in place
    pub fn apply(&self, base: &ChainParams) -> ChainParams {
        let mut params = base.clone();

        if let Some(value) = self.subsidy_halving_interval {
            params.subsidy_halving_interval = value;
        }
        if let Some(value) = self.enforce_block_upgrade_majority {
            params.enforce_block_upgrade_majority = value;
        }
        if let Some(value) = self.reject_block_outdated_majority {
            params.reject_block_outdated_majority = value;
        }
        if let Some(value) = self.to_check_block_upgrade_majority {
            params.to_check_block_upgrade_majority = value;
        }
        if let Some(value) = self.default_consistency_checks {
            params.default_consistency_checks = value;
        }
        if let Some(value) = self.allow_min_difficulty_blocks {
            params.allow_min_difficulty_blocks = value;
        }
        if let Some(value) = self.skip_proof_of_work_check {
            params.skip_proof_of_work_check = value;
        }
        params
    }
}

/// The override layer of a registry
///
/// The layer is replaced as a whole, never mutated in place
pub(crate) struct Overlay {
    layer: RwLock<Option<Arc<ChainParams>>>,
    in_use: AtomicBool,
}

impl Overlay {
    pub(crate) fn new() -> Self {
        Overlay {
            layer: RwLock::new(None),
            in_use: AtomicBool::new(false),
        }
    }

    /// Gets the overridden parameters, if they belong to `network`
    pub(crate) fn current(&self, network: NetworkKind) -> Option<Arc<ChainParams>> {
        let layer = self.layer.read().unwrap_or_else(PoisonError::into_inner);
        layer
            .as_ref()
            .filter(|params| params.network_id() == network)
            .cloned()
    }

    fn replace(&self, params: Option<Arc<ChainParams>>) {
        *self.layer.write().unwrap_or_else(PoisonError::into_inner) = params;
    }
}

/// Handle for overriding parameters of the active network
///
/// Setters take effect immediately for every reader of [`Registry::active`]. Calling `reset` or
/// dropping the handle restores the built-in parameters
pub struct ModifiableParams<'a> {
    registry: &'a Registry,
    network: NetworkKind,
    overrides: ParamsOverride,
}

impl Registry {
    /// Gets a handle for overriding parameters of the active network
    ///
    /// # Errors
    /// If no network is active, or if another handle is still alive
    pub fn modifiable(&self) -> Result<ModifiableParams<'_>> {
        let network = self.active_kind().ok_or(Error::NoNetworkSelected)?;
        if self.overlay.in_use.swap(true, Ordering::AcqRel) {
            return Err(Error::OverrideInUse);
        }

        Ok(ModifiableParams {
            registry: self,
            network,
            overrides: ParamsOverride::default(),
        })
    }
}

impl<'a> ModifiableParams<'a> {
    /// The network whose parameters are overridden
    pub fn network(&self) -> NetworkKind {
        self.network
    }

    /// The values currently overridden
    pub fn overrides(&self) -> &ParamsOverride {
        &self.overrides
    }

    pub fn set_subsidy_halving_interval(&mut self, value: u32) {
        self.overrides.subsidy_halving_interval = Some(value);
        self.publish();
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, value: u32) {
        self.overrides.enforce_block_upgrade_majority = Some(value);
        self.publish();
    }

    pub fn set_reject_block_outdated_majority(&mut self, value: u32) {
        self.overrides.reject_block_outdated_majority = Some(value);
        self.publish();
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, value: u32) {
        self.overrides.to_check_block_upgrade_majority = Some(value);
        self.publish();
    }

    pub fn set_default_consistency_checks(&mut self, value: bool) {
        self.overrides.default_consistency_checks = Some(value);
        self.publish();
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, value: bool) {
        self.overrides.allow_min_difficulty_blocks = Some(value);
        self.publish();
    }

    pub fn set_skip_proof_of_work_check(&mut self, value: bool) {
        self.overrides.skip_proof_of_work_check = Some(value);
        self.publish();
    }

    /// Drops every override, restoring the built-in parameters
    pub fn reset(&mut self) {
        self.overrides = ParamsOverride::default();
        self.registry.overlay.replace(None);
        debug!("Restored built-in {} network parameters", self.network);
    }

    fn publish(&self) {
        let params = self.overrides.apply(&self.registry.get(self.network));
        warn!("Overriding {} network parameters: {:?}", self.network, self.overrides);
        self.registry.overlay.replace(Some(Arc::new(params)));
    }
}

impl<'a> Drop for ModifiableParams<'a> {
    fn drop(&mut self) {
        if !self.overrides.is_empty() {
            self.reset();
        }
        self.registry.overlay.in_use.store(false, Ordering::Release);
    }
}
