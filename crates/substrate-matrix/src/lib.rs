// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! The Matrix facade: composition root over the four subsystem crates,
//! the lifecycle state machine, factory registries for neurons and
//! synapses, and per-operation-class admission gating.
//!
//! Composes the owned subsystems behind one facade, guards lifecycle
//! transitions with a lock, and gives every external caller a single
//! entry point regardless of which subsystem ultimately serves the
//! request.

mod error;
mod factory;
mod state;

pub use error::{MatrixError, Result};
pub use factory::{NeuronConfig, NeuronFactory, Product, SynapseConfig, SynapseFactory};
pub use state::{MatrixState, OperationClass};

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use substrate_chemical::{ChemicalModulator, LigandKind};
use substrate_config::MatrixConfig;
use substrate_microglia::{BirthRequest, HealthRecord, Microglia, PatrolReport, PatrolRoute, PruningCandidate};
use substrate_registry::{LoadStatus, SpatialRegistry, SynapticInfo};
use substrate_signal::{SignalEvent, SignalKind, SignalMediator};
use substrate_types::{ComponentInfo, ComponentKind, ComponentState, Criteria, Metadata, Position, Priority};
use tracing::{info, warn};

/// The composed lifecycle object. Exclusively owns the four subsystems;
/// external code never touches a subsystem crate directly once it holds
/// a `Matrix`.
pub struct Matrix {
    config: MatrixConfig,
    state: RwLock<MatrixState>,
    lifecycle_lock: Mutex<()>,

    registry: Arc<SpatialRegistry>,
    chemical: Arc<ChemicalModulator>,
    signal: Arc<SignalMediator>,
    microglia: Arc<Microglia>,

    neuron_factories: RwLock<HashMap<String, NeuronFactory>>,
    synapse_factories: RwLock<HashMap<String, SynapseFactory>>,
}

impl Matrix {
    /// Constructs a `Matrix` in the `Constructed` state. Does not
    /// validate `config` or spawn any background work — that happens at
    /// [`Matrix::start`], so a caller can register factories against a
    /// freshly-constructed, not-yet-running `Matrix`.
    pub fn new(config: MatrixConfig, profile: substrate_config::LifecycleProfile) -> Arc<Self> {
        let registry = Arc::new(SpatialRegistry::new());
        let max_components = config.max_components.max(0) as usize;
        Arc::new(Self {
            chemical: Arc::new(ChemicalModulator::new(Arc::clone(&registry), config.update_interval)),
            signal: Arc::new(SignalMediator::new()),
            microglia: Arc::new(Microglia::new(Arc::clone(&registry), profile, max_components)),
            registry,
            config,
            state: RwLock::new(MatrixState::Constructed),
            lifecycle_lock: Mutex::new(()),
            neuron_factories: RwLock::new(HashMap::new()),
            synapse_factories: RwLock::new(HashMap::new()),
        })
    }

    pub fn state(&self) -> MatrixState {
        *self.state.read()
    }

    /// Validates `config`, transitions `Constructed|Stopped -> Starting
    /// -> Running`, and starts the chemical modulator's background decay
    /// loop (only if `config.chemical_enabled`). Idempotent once
    /// `Running`. Concurrent callers serialize on `lifecycle_lock` so
    /// exactly one performs initialization.
    pub fn start(&self) -> Result<()> {
        let _guard = self.lifecycle_lock.lock();
        if *self.state.read() == MatrixState::Running {
            return Ok(());
        }
        substrate_config::validate_matrix_config(&self.config)?;

        *self.state.write() = MatrixState::Starting;
        info!(max_components = self.config.max_components, "starting matrix");

        if self.config.chemical_enabled && !self.chemical.is_running() {
            self.chemical.start()?;
        }

        *self.state.write() = MatrixState::Running;
        Ok(())
    }

    /// Transitions `Running -> Stopping -> Stopped`, stopping the
    /// chemical modulator's background loop. Idempotent once `Stopped`.
    /// Concurrent callers serialize on `lifecycle_lock`.
    pub fn stop(&self) -> Result<()> {
        let _guard = self.lifecycle_lock.lock();
        if *self.state.read() == MatrixState::Stopped {
            return Ok(());
        }
        *self.state.write() = MatrixState::Stopping;
        info!("stopping matrix");

        if self.chemical.is_running() {
            self.chemical.stop()?;
        }

        *self.state.write() = MatrixState::Stopped;
        Ok(())
    }

    fn admit(&self, class: OperationClass) -> Result<()> {
        let state = *self.state.read();
        if state.admits(class) {
            Ok(())
        } else {
            Err(MatrixError::NotAdmitted { state })
        }
    }

    // ---- Structural operations -------------------------------------

    /// Registers a component directly (bypassing factories), subject to
    /// the global capacity cap.
    pub fn register_component(&self, info: ComponentInfo) -> Result<ComponentInfo> {
        self.admit(OperationClass::Structural)?;
        Ok(self.microglia.create_component(info)?)
    }

    pub fn register_neuron_type(&self, kind: impl Into<String>, factory: NeuronFactory) {
        self.neuron_factories.write().insert(kind.into(), factory);
    }

    pub fn register_synapse_type(&self, kind: impl Into<String>, factory: SynapseFactory) {
        self.synapse_factories.write().insert(kind.into(), factory);
    }

    /// Validates `config`, invokes the registered factory for
    /// `config.kind`, registers the product (subject to the global cap),
    /// and attaches its capability adapters to the Chemical Modulator
    /// and Signal Mediator.
    pub fn create_neuron(&self, config: NeuronConfig) -> Result<String> {
        self.admit(OperationClass::Structural)?;
        factory::validate_neuron_config(&config)?;

        let factory = self
            .neuron_factories
            .read()
            .get(&config.kind)
            .cloned()
            .ok_or_else(|| MatrixError::UnknownKind(config.kind.clone()))?;
        let product = factory(&config).map_err(MatrixError::FactoryFailed)?;
        self.install_product(product, ComponentKind::Neuron)
    }

    pub fn create_synapse(&self, config: SynapseConfig) -> Result<String> {
        self.admit(OperationClass::Structural)?;
        factory::validate_synapse_config(&config)?;

        let factory = self
            .synapse_factories
            .read()
            .get(&config.kind)
            .cloned()
            .ok_or_else(|| MatrixError::UnknownKind(config.kind.clone()))?;
        let product = factory(&config).map_err(MatrixError::FactoryFailed)?;
        let id = self.install_product(product, ComponentKind::Synapse)?;
        self.registry.map_connection(&config.presynaptic_id, &config.postsynaptic_id)?;
        self.registry
            .record_synaptic_activity(&id, &config.presynaptic_id, &config.postsynaptic_id, config.strength)?;
        Ok(id)
    }

    fn install_product(&self, product: Product, kind: ComponentKind) -> Result<String> {
        let info = ComponentInfo::new(product.id.clone(), kind, product.position).with_metadata(product.metadata);
        self.microglia.create_component(info)?;

        if let Some(binding_target) = product.binding_target {
            self.chemical.register_binding_target(binding_target)?;
        }
        if let Some(listener) = product.signal_listener {
            let kinds = listener.kinds();
            self.signal.subscribe(listener, &kinds)?;
        }
        Ok(product.id)
    }

    /// Removes a component and cascades cleanup through every
    /// subsystem in the fixed lock order Registry -> Chemical -> Signal
    /// -> Microglia, so no back-reference to `id` survives the call.
    pub fn remove_component(&self, id: &str) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        self.registry.unregister(id)?;
        self.chemical.unregister_binding_target(id);
        self.signal.purge_component(id);
        self.microglia.remove_component(id)?;

        if self.registry.get(id).is_some() {
            let msg = format!("component {id} still present in registry after cascade removal");
            warn!(id, "{msg}");
            return Err(MatrixError::Microglia(substrate_microglia::MicrogliaError::Invariant(msg)));
        }
        Ok(())
    }

    pub fn map_connection(&self, source: &str, target: &str) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        Ok(self.registry.map_connection(source, target)?)
    }

    pub fn establish_territory(&self, astrocyte_id: &str, center: Position, radius: f64) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        Ok(self.registry.establish_territory(astrocyte_id, center, radius)?)
    }

    pub fn establish_electrical_coupling(&self, a: &str, b: &str, conductance: f64) -> Result<f64> {
        self.admit(OperationClass::Structural)?;
        Ok(self.signal.establish_electrical_coupling(a, b, conductance)?)
    }

    pub fn remove_electrical_coupling(&self, a: &str, b: &str) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        Ok(self.signal.remove_electrical_coupling(a, b)?)
    }

    pub fn request_component_birth(&self, request: BirthRequest) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        self.microglia.request_component_birth(request);
        Ok(())
    }

    pub fn process_birth_requests(&self, batch_size: usize) -> Result<Vec<ComponentInfo>> {
        self.admit(OperationClass::Structural)?;
        Ok(self.microglia.process_birth_requests(batch_size))
    }

    // ---- Functional operations (Running only) ----------------------

    pub fn release_ligand(&self, kind: LigandKind, source_id: &str, concentration: f64) -> Result<()> {
        self.admit(OperationClass::Functional)?;
        Ok(self.chemical.release_ligand(kind, source_id, concentration)?)
    }

    pub fn send_signal(&self, kind: SignalKind, source_id: &str, data: Metadata) -> Result<()> {
        self.admit(OperationClass::Functional)?;
        Ok(self.signal.send(kind, source_id, data)?)
    }

    // ---- Read-only operations (always admitted) --------------------

    pub fn find(&self, criteria: &Criteria) -> Result<Vec<ComponentInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.find(criteria)?)
    }

    pub fn find_nearby(&self, center: Position, radius: f64) -> Result<Vec<ComponentInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.find_nearby(center, radius)?)
    }

    pub fn find_by_kind(&self, kind: ComponentKind) -> Result<Vec<ComponentInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.find_by_kind(kind))
    }

    pub fn get(&self, id: &str) -> Result<Option<ComponentInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.get(id))
    }

    pub fn list(&self) -> Result<Vec<ComponentInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.list())
    }

    pub fn count(&self) -> Result<usize> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.count())
    }

    pub fn update_state(&self, id: &str, state: ComponentState) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        Ok(self.registry.update_state(id, state)?)
    }

    pub fn get_spatial_distance(&self, a: &str, b: &str) -> Result<f64> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.distance(a, b)?)
    }

    pub fn get_connections(&self, id: &str) -> Result<Vec<String>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.get_connections(id))
    }

    pub fn get_synaptic_info(&self, synapse_id: &str) -> Result<Option<SynapticInfo>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.get_synaptic_info(synapse_id))
    }

    pub fn validate_astrocyte_load(&self, astrocyte_id: &str, max_neurons: usize) -> Result<LoadStatus> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.registry.validate_astrocyte_load(astrocyte_id, max_neurons)?)
    }

    pub fn get_conductance(&self, a: &str, b: &str) -> Result<f64> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.signal.get_conductance(a, b))
    }

    pub fn recent_signal_events(&self, limit: Option<usize>) -> Result<Vec<SignalEvent>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.signal.recent_events(limit))
    }

    pub fn concentration_at(&self, kind: LigandKind, position: Position) -> Result<f64> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.chemical.concentration_at(kind, position))
    }

    pub fn get_component_health(&self, id: &str) -> Result<Option<HealthRecord>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.microglia.get_component_health(id))
    }

    pub fn update_component_health(&self, id: &str, activity: f64, connections: u32) -> Result<HealthRecord> {
        self.admit(OperationClass::Structural)?;
        Ok(self.microglia.update_component_health(id, activity, connections)?)
    }

    pub fn mark_for_pruning(&self, synapse_id: &str, pre: &str, post: &str, activity: f64) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        self.microglia.mark_for_pruning(synapse_id, pre, post, activity);
        Ok(())
    }

    pub fn get_pruning_candidates(&self) -> Result<Vec<PruningCandidate>> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.microglia.get_pruning_candidates())
    }

    pub fn execute_pruning(&self) -> Result<Vec<String>> {
        self.admit(OperationClass::Structural)?;
        Ok(self.microglia.execute_pruning())
    }

    pub fn establish_patrol_route(&self, microglia_id: &str, route: PatrolRoute) -> Result<()> {
        self.admit(OperationClass::Structural)?;
        self.microglia.establish_patrol_route(microglia_id, route);
        Ok(())
    }

    pub fn execute_patrol(&self, microglia_id: &str) -> Result<PatrolReport> {
        self.admit(OperationClass::ReadOnly)?;
        Ok(self.microglia.execute_patrol(microglia_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;
    use substrate_config::LifecycleProfile;

    fn matrix() -> Arc<Matrix> {
        let config = MatrixConfig {
            chemical_enabled: true,
            spatial_enabled: true,
            update_interval: Duration::from_millis(5),
            max_components: 10,
        };
        Matrix::new(config, LifecycleProfile::default_profile())
    }

    #[test]
    fn starts_stopped_and_stops_running() {
        let matrix = matrix();
        assert_eq!(matrix.state(), MatrixState::Constructed);
        matrix.start().unwrap();
        assert_eq!(matrix.state(), MatrixState::Running);
        matrix.stop().unwrap();
        assert_eq!(matrix.state(), MatrixState::Stopped);
    }

    #[test]
    fn start_is_idempotent() {
        let matrix = matrix();
        matrix.start().unwrap();
        matrix.start().unwrap();
        assert_eq!(matrix.state(), MatrixState::Running);
    }

    #[test]
    fn negative_cap_rejects_start() {
        let config = MatrixConfig { max_components: -1, ..MatrixConfig::default() };
        let matrix = Matrix::new(config, LifecycleProfile::default_profile());
        assert!(matches!(matrix.start(), Err(MatrixError::ConfigInvalid(_))));
    }

    #[test]
    fn functional_ops_rejected_before_running() {
        let matrix = matrix();
        assert!(matches!(
            matrix.release_ligand(LigandKind::Glutamate, "s1", 1.0),
            Err(MatrixError::NotAdmitted { state: MatrixState::Constructed })
        ));
    }

    #[test]
    fn structural_and_readonly_ops_allowed_before_running() {
        let matrix = matrix();
        let info = ComponentInfo::new("n1", ComponentKind::Neuron, Position::ORIGIN);
        assert!(matrix.register_component(info).is_ok());
        assert!(matrix.list().is_ok());
    }

    #[test]
    fn global_cap_is_enforced_through_register_component() {
        let config = MatrixConfig { max_components: 1, ..MatrixConfig::default() };
        let matrix = Matrix::new(config, LifecycleProfile::default_profile());
        matrix.register_component(ComponentInfo::new("n1", ComponentKind::Neuron, Position::ORIGIN)).unwrap();
        assert!(matrix.register_component(ComponentInfo::new("n2", ComponentKind::Neuron, Position::ORIGIN)).is_err());
    }

    #[test]
    fn unknown_factory_kind_is_rejected() {
        let matrix = matrix();
        let config = NeuronConfig {
            kind: "unregistered".into(),
            threshold: 0.5,
            decay_rate: 0.1,
            position: Position::ORIGIN,
            metadata: Metadata::new(),
        };
        assert!(matches!(matrix.create_neuron(config), Err(MatrixError::UnknownKind(_))));
    }

    struct CountingTarget {
        id: String,
        position: Position,
        calls: Arc<AtomicU64>,
    }

    impl substrate_chemical::BindingTarget for CountingTarget {
        fn id(&self) -> &str {
            &self.id
        }
        fn position(&self) -> Position {
            self.position
        }
        fn receptors(&self) -> &[LigandKind] {
            &[LigandKind::Glutamate]
        }
        fn bind(&self, _kind: LigandKind, _source_id: &str, _concentration: f64) {
            self.calls.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn create_neuron_attaches_binding_target_and_receives_delivery() {
        let matrix = matrix();
        matrix.start().unwrap();
        let calls = Arc::new(AtomicU64::new(0));
        let calls_for_factory = Arc::clone(&calls);

        matrix.register_neuron_type(
            "sensor",
            Arc::new(move |config: &NeuronConfig| {
                Ok(Product {
                    id: "n1".to_string(),
                    position: config.position,
                    metadata: config.metadata.clone(),
                    binding_target: Some(Arc::new(CountingTarget {
                        id: "n1".to_string(),
                        position: config.position,
                        calls: Arc::clone(&calls_for_factory),
                    })),
                    signal_listener: None,
                })
            }),
        );

        matrix
            .create_neuron(NeuronConfig {
                kind: "sensor".into(),
                threshold: 0.5,
                decay_rate: 0.1,
                position: Position::new(0.0, 0.0, 0.0),
                metadata: Metadata::new(),
            })
            .unwrap();

        matrix.release_ligand(LigandKind::Glutamate, "n1", 1.0).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn remove_component_purges_every_subsystem_reference() {
        let matrix = matrix();
        matrix.start().unwrap();
        matrix.register_component(ComponentInfo::new("n1", ComponentKind::Neuron, Position::ORIGIN)).unwrap();
        matrix.register_component(ComponentInfo::new("n2", ComponentKind::Neuron, Position::ORIGIN)).unwrap();
        matrix.map_connection("n1", "n2").unwrap();
        matrix.establish_electrical_coupling("n1", "n2", 0.5).unwrap();
        matrix.update_component_health("n1", 0.5, 1).unwrap();

        matrix.remove_component("n1").unwrap();

        assert!(matrix.get("n1").unwrap().is_none());
        assert!(matrix.get_connections("n1").unwrap().is_empty());
        assert_eq!(matrix.get_conductance("n1", "n2").unwrap(), 0.0);
        assert!(matrix.get_component_health("n1").unwrap().is_none());
    }

    #[test]
    fn birth_request_priority_is_honored_end_to_end() {
        let config = MatrixConfig { max_components: 1, ..MatrixConfig::default() };
        let matrix = Matrix::new(config, LifecycleProfile::default_profile());
        matrix
            .request_component_birth(BirthRequest {
                info: ComponentInfo::new("low", ComponentKind::Neuron, Position::ORIGIN),
                priority: Priority::Low,
                justification: "routine growth".to_string(),
                requester_id: "tester".to_string(),
            })
            .unwrap();
        matrix
            .request_component_birth(BirthRequest {
                info: ComponentInfo::new("urgent", ComponentKind::Neuron, Position::ORIGIN),
                priority: Priority::Emergency,
                justification: "coverage gap detected".to_string(),
                requester_id: "tester".to_string(),
            })
            .unwrap();

        let created = matrix.process_birth_requests(5).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, "urgent");
    }
}
