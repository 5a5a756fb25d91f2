//! Named backend registry.
//!
//! Programs that ship their own `CategoryLogger` register a factory here under
//! a name; setting `DEFAULT_CATEGORY_LOGGER` to that name makes it the
//! compiled-in default. Registration must happen before the discovery layer
//! is initialised, later registrations do not change an installed default.
//!
//! Resolving a name goes through three separately reported steps:
//! lookup (`BackendNotFound`), construction (`Instantiation`) and the
//! capability check (`NotALogger`).

use std::any::{type_name, Any};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::backends::{StdoutLogger, TracingLogger};
use crate::discovery::DiscoveryError;
use crate::logging::{CategoryLogger, SharedLogger};

/// Error type returned by backend factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Component = Box<dyn Any + Send + Sync>;
type Constructor = Arc<dyn Fn() -> Result<Component, BoxError> + Send + Sync>;

#[derive(Clone)]
struct Registration {
    type_name: &'static str,
    construct: Constructor,
}

/// Thread-safe map of backend names to factories.
#[derive(Default)]
pub struct BackendRegistry {
    entries: DashMap<String, Registration>,
}

impl BackendRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a default-constructible logger under `name`.
    ///
    /// Returns `true` if an earlier registration was replaced.
    pub fn register_logger<T>(&self, name: impl Into<String>) -> bool
    where
        T: CategoryLogger + Default,
    {
        self.register_with(name, || Ok(T::default()))
    }

    /// Register a fallible logger factory under `name`.
    pub fn register_with<T, F>(&self, name: impl Into<String>, factory: F) -> bool
    where
        T: CategoryLogger,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let construct: Constructor = Arc::new(move || {
            let logger: SharedLogger = Arc::new(factory()?);
            Ok(Box::new(logger) as Component)
        });
        self.insert(name.into(), type_name::<T>(), construct)
    }

    /// Register an arbitrary component under `name`.
    ///
    /// The capability check accepts a [`SharedLogger`], a
    /// `Box<dyn CategoryLogger>` or one of the bundled backends. Any other
    /// concrete type is reported as `NotALogger` when the name is
    /// instantiated, whether or not it implements `CategoryLogger`; register
    /// your own loggers with [`register_logger`](Self::register_logger) or
    /// [`register_with`](Self::register_with).
    pub fn register_component<T, F>(&self, name: impl Into<String>, factory: F) -> bool
    where
        T: Any + Send + Sync,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let construct: Constructor = Arc::new(move || Ok(Box::new(factory()?) as Component));
        self.insert(name.into(), type_name::<T>(), construct)
    }

    fn insert(&self, name: String, type_name: &'static str, construct: Constructor) -> bool {
        tracing::debug!(backend = %name, type_name, "Registered category logger backend");
        self.entries
            .insert(name, Registration { type_name, construct })
            .is_some()
    }

    /// Remove a registration. Returns `true` if `name` was registered.
    pub fn unregister(&self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Construct the backend registered under `name` and check that it is a logger.
    pub fn instantiate(&self, name: &str) -> Result<SharedLogger, DiscoveryError> {
        // Clone out of the map so the shard lock is released before the
        // factory runs; factories may themselves touch the registry.
        let registration = self
            .entries
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DiscoveryError::BackendNotFound {
                name: name.to_string(),
            })?;

        let component = (registration.construct)().map_err(|source| {
            DiscoveryError::Instantiation {
                name: name.to_string(),
                source,
            }
        })?;

        into_logger(component).map_err(|_| DiscoveryError::NotALogger {
            name: name.to_string(),
            type_name: registration.type_name,
        })
    }
}

fn into_logger(component: Component) -> Result<SharedLogger, Component> {
    let component = match component.downcast::<SharedLogger>() {
        Ok(logger) => return Ok(*logger),
        Err(other) => other,
    };
    let component = match component.downcast::<Box<dyn CategoryLogger>>() {
        Ok(logger) => return Ok(Arc::from(*logger)),
        Err(other) => other,
    };
    let component = match component.downcast::<StdoutLogger>() {
        Ok(logger) => return Ok(Arc::new(*logger)),
        Err(other) => other,
    };
    match component.downcast::<TracingLogger>() {
        Ok(logger) => Ok(Arc::new(*logger)),
        Err(other) => Err(other),
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("names", &self.names())
            .finish()
    }
}

static GLOBAL: LazyLock<BackendRegistry> = LazyLock::new(BackendRegistry::new);

/// The process-wide registry consulted by [`crate::discovery::init`].
pub fn global() -> &'static BackendRegistry {
    &GLOBAL
}

/// Register a default-constructible logger in the process-wide registry.
pub fn register_logger<T>(name: impl Into<String>) -> bool
where
    T: CategoryLogger + Default,
{
    global().register_logger::<T>(name)
}

/// Register a fallible logger factory in the process-wide registry.
pub fn register_with<T, F>(name: impl Into<String>, factory: F) -> bool
where
    T: CategoryLogger,
    F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
{
    global().register_with(name, factory)
}
