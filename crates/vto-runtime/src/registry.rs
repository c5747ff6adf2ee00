//! Feature Registry - ordered catalog with exactly one mounted module

use std::fmt;

use tokio::sync::watch;
use tracing::{debug, info};

use vto_core::{FeatureId, MountId, Progress, SimulationState, VtoError, VtoResult};

use crate::{showcase_catalog, DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Builds a module in its idle state
pub type ModuleFactory = fn(&ShowcaseConfig) -> Box<dyn DemoModule>;

/// Static presentation metadata for one feature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureMeta {
    pub title: &'static str,
    pub tech_short: &'static str,
    pub description: &'static str,
    pub how_it_works_title: &'static str,
    pub how_it_works: &'static [&'static str],
    pub outcome_title: &'static str,
    pub outcome: &'static [&'static str],
}

/// One catalog entry
#[derive(Clone, Copy)]
pub struct FeatureDescriptor {
    pub id: FeatureId,
    pub meta: FeatureMeta,
    pub factory: ModuleFactory,
}

impl FeatureDescriptor {
    pub const fn new(id: FeatureId, meta: FeatureMeta, factory: ModuleFactory) -> Self {
        FeatureDescriptor { id, meta, factory }
    }
}

impl fmt::Debug for FeatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureDescriptor")
            .field("id", &self.id)
            .field("title", &self.meta.title)
            .finish()
    }
}

/// Single owner of the active selection
///
/// Switching features tears the old module down (cancelling its timers)
/// before the new one is built, so nothing from the previous module can
/// reach the new one.
pub struct FeatureRegistry {
    catalog: Vec<FeatureDescriptor>,
    active: usize,
    module: Box<dyn DemoModule>,
    mount: MountId,
    config: ShowcaseConfig,
}

impl FeatureRegistry {
    /// Build a registry and mount the first descriptor
    pub fn new(catalog: Vec<FeatureDescriptor>, config: ShowcaseConfig) -> VtoResult<Self> {
        config.validate()?;
        let first = catalog.first().ok_or(VtoError::EmptyCatalog)?;

        for (i, d) in catalog.iter().enumerate() {
            if catalog[..i].iter().any(|prev| prev.id == d.id) {
                return Err(VtoError::DuplicateFeature(d.id));
            }
        }

        let module = (first.factory)(&config);
        let mount = MountId::ZERO.next();
        info!(feature = %first.id, %mount, "feature mounted");

        Ok(FeatureRegistry {
            catalog,
            active: 0,
            module,
            mount,
            config,
        })
    }

    /// Registry over the default showcase catalog
    pub fn showcase(config: ShowcaseConfig) -> VtoResult<Self> {
        Self::new(showcase_catalog(), config)
    }

    /// Make `id` the active feature
    ///
    /// Returns false when `id` is already active.
    pub fn select(&mut self, id: FeatureId) -> VtoResult<bool> {
        let index = self
            .catalog
            .iter()
            .position(|d| d.id == id)
            .ok_or(VtoError::UnknownFeature(id))?;
        Ok(self.activate(index))
    }

    /// Select the next feature in display order, wrapping around
    pub fn next(&mut self) -> FeatureId {
        let index = (self.active + 1) % self.catalog.len();
        self.activate(index);
        self.active_id()
    }

    /// Select the previous feature in display order, wrapping around
    pub fn previous(&mut self) -> FeatureId {
        let len = self.catalog.len();
        let index = (self.active + len - 1) % len;
        self.activate(index);
        self.active_id()
    }

    fn activate(&mut self, index: usize) -> bool {
        if index == self.active {
            debug!(feature = %self.active_id(), "already active");
            return false;
        }

        let previous = self.active_id();
        self.module.teardown();
        info!(feature = %previous, mount = %self.mount, "feature torn down");

        self.active = index;
        let descriptor = self.catalog[index];
        self.module = (descriptor.factory)(&self.config);
        self.mount = self.mount.next();
        info!(feature = %descriptor.id, mount = %self.mount, "feature mounted");
        true
    }

    #[inline]
    pub fn active(&self) -> &FeatureDescriptor {
        &self.catalog[self.active]
    }

    #[inline]
    pub fn active_id(&self) -> FeatureId {
        self.catalog[self.active].id
    }

    /// Changes every time a module is mounted
    #[inline]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn descriptors(&self) -> &[FeatureDescriptor] {
        &self.catalog
    }

    pub fn get(&self, id: FeatureId) -> Option<&FeatureDescriptor> {
        self.catalog.iter().find(|d| d.id == id)
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Route an input to the active module
    pub fn dispatch(&mut self, input: DemoInput) -> VtoResult<()> {
        self.module.handle(input)
    }

    pub fn view(&self) -> DemoView {
        self.module.view()
    }

    pub fn simulation_state(&self) -> Option<SimulationState> {
        self.module.simulation_state()
    }

    /// Progress stream of the active module, if it runs a pipeline
    pub fn subscribe(&self) -> Option<watch::Receiver<Progress>> {
        self.module.subscribe()
    }
}

impl Drop for FeatureRegistry {
    fn drop(&mut self) {
        self.module.teardown();
    }
}
