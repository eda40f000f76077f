//! Module wiring: configuration in, ready service and router out

use crate::config::Config;
use crate::contract::MachineSettingsApi;
use crate::domain::machines::{InjectionMolder, InjectionMolderConfig, INJECTION_MOLDER};
use crate::domain::{Machine, MachineFactory, MachineRegistry, Service};
use crate::infra::storage::JsonFileStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Machine settings module
pub struct MachineSettingsModule {
    config: Config,
    service: Arc<Service>,
}

impl MachineSettingsModule {
    /// Load the machines file and build every registered machine
    pub async fn init(config: Config) -> Result<Self> {
        let specs = crate::infra::loader::load_machine_specs(&config.machines_file).await?;

        let factory = Self::default_factory(config.settings_base_dir());
        let registry = MachineRegistry::from_specs(&factory, &specs)?;

        tracing::info!(
            machines = registry.len(),
            "Machine settings module initialized"
        );
        Ok(Self::from_registry(config, registry))
    }

    /// Wrap an already-built registry
    pub fn from_registry(config: Config, registry: MachineRegistry) -> Self {
        let service = Arc::new(Service::new(Arc::new(registry)));
        Self { config, service }
    }

    /// Factory knowing every machine type shipped with this crate
    pub fn default_factory(base_dir: PathBuf) -> MachineFactory {
        let mut factory = MachineFactory::new();
        factory.register(INJECTION_MOLDER, move |spec| {
            let mut config: InjectionMolderConfig = serde_json::from_value(spec.config.clone())
                .with_context(|| format!("invalid {} config", INJECTION_MOLDER))?;
            config.file_path = resolve(&base_dir, &config.file_path);

            let store = Arc::new(JsonFileStore::new(config.file_path.clone()));
            let machine: Arc<dyn Machine> = Arc::new(InjectionMolder::new(config, store));
            Ok(machine)
        });
        factory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Arc<dyn MachineSettingsApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }

    /// REST routes for this module
    pub fn router(&self) -> axum::Router {
        tracing::info!("Registering machine settings REST routes");
        crate::api::rest::routes::register_routes(axum::Router::new(), self.service.clone())
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
