use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    errors::RequireError,
    resolver::Resolver,
    types::{Injectable, Instance, TypeInfo},
};

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Registry holding one instance per type
///
/// Cloning is cheap, all clones share the same bindings.
///
/// Registration and resolution are expected to happen on one execution context
/// (usually while the application is wired up at start-up). The bindings still sit
/// behind a lock so the registry can live in a `static`.
#[derive(Clone, Default)]
pub struct TypeRegistry(pub Arc<TypeRegistryInner>);
#[derive(Default)]
pub struct TypeRegistryInner {
    bindings: RwLock<HashMap<TypeId, Instance>>,
}
impl Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings = self.read();
        let mut names: Vec<_> = bindings.values().map(|i| i.info.type_name).collect();
        names.sort_unstable();
        f.debug_tuple("TypeRegistry").field(&names).finish()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process wide registry
    ///
    /// Created on first access and never torn down.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// Binds `instance` to `T`, replacing any previous binding for `T`
    pub fn register<T: ?Sized + Injectable>(&self, instance: Arc<T>) {
        let instance = Instance::new(instance);
        let info = instance.info;

        match self.write().insert(info.type_id, instance) {
            Some(_) => tracing::debug!("Replaced existing binding for {}", info),
            None => tracing::debug!("Registered {}", info),
        }
    }

    /// Wraps `value` in an `Arc`, registers it and hands the shared handle back
    pub fn register_value<T: Injectable>(&self, value: T) -> Arc<T> {
        let instance = Arc::new(value);
        self.register(instance.clone());
        instance
    }

    /// Registers the instance if one is given
    pub fn maybe_register<T: ?Sized + Injectable>(&self, instance: Option<Arc<T>>) {
        if let Some(instance) = instance {
            self.register(instance);
        }
    }

    /// Attempts to get the registered instance of `T`
    pub fn try_resolve<T: ?Sized + Injectable>(&self) -> Result<Arc<T>, RequireError> {
        match self.read().get(&TypeId::of::<T>()) {
            Some(instance) => {
                instance
                    .downcast()
                    .map_err(|actual_type| RequireError::DowncastFailed {
                        required_type: type_name::<T>(),
                        actual_type,
                    })
            }
            None => Err(RequireError::TypeMissing(type_name::<T>())),
        }
    }

    /// Returns the registered instance of `T`
    ///
    /// # Panics
    /// If nothing is registered for `T`. A missing binding is a wiring bug, everything
    /// must be registered before it is resolved.
    pub fn resolve<T: ?Sized + Injectable>(&self) -> Arc<T> {
        match self.try_resolve() {
            Ok(instance) => instance,
            Err(err) => {
                tracing::error!("{err}");
                panic!("{err}");
            }
        }
    }

    /// Returns the registered instance of `T`, or `None` if there is none
    ///
    /// # Panics
    /// If the binding for `T` holds a value of another type
    pub fn resolve_optional<T: ?Sized + Injectable>(&self) -> Option<Arc<T>> {
        match self.try_resolve() {
            Ok(instance) => Some(instance),
            Err(RequireError::TypeMissing(_)) => None,
            Err(err) => {
                tracing::error!("{err}");
                panic!("{err}");
            }
        }
    }

    /// Resolves any [Resolver], e.g. `Arc<T>`, `Option<Arc<T>>` or one of the accessors
    pub fn get<R: Resolver>(&self) -> R {
        R::resolve(self)
    }

    pub fn contains<T: ?Sized + Injectable>(&self) -> bool {
        self.read().contains_key(&TypeId::of::<T>())
    }

    /// Infos of all registered types
    pub fn registered(&self) -> Vec<TypeInfo> {
        self.read().values().map(|instance| instance.info).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Bindings are only ever replaced as a whole, a poisoned lock still holds a valid map
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Instance>> {
        self.0.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Instance>> {
        self.0.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }
}
