use std::{
    fmt::Debug,
    ops::Deref,
    sync::{Arc, OnceLock},
};

use crate::{registry::TypeRegistry, resolver::Resolver, types::Injectable};

/// Lazily resolved dependency
///
/// Nothing is looked up until the first access, after which the instance is kept.
/// The registry is consulted at most once per accessor.
///
/// ### Panics
///
/// On first access, if the type is not registered by then
pub struct LazyInject<T: ?Sized + Injectable> {
    registry: TypeRegistry,
    once: OnceLock<Arc<T>>,
}
impl<T: ?Sized + Injectable> LazyInject<T> {
    /// Resolves from the global registry on first access
    pub fn new() -> Self {
        Self::from_registry(TypeRegistry::global())
    }

    pub fn from_registry(registry: &TypeRegistry) -> Self {
        LazyInject {
            registry: registry.clone(),
            once: OnceLock::new(),
        }
    }

    /// Accesses the lazy dependency, resolving it if this is the first access
    pub fn get(&self) -> &Arc<T> {
        self.once.get_or_init(|| {
            tracing::debug!("Lazily resolving {}", std::any::type_name::<T>());
            self.registry.resolve()
        })
    }

    /// Returns the instance if it was already resolved
    pub fn try_get(&self) -> Option<&Arc<T>> {
        self.once.get()
    }

    pub fn is_resolved(&self) -> bool {
        self.once.get().is_some()
    }
}
impl<T: ?Sized + Injectable> Default for LazyInject<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: ?Sized + Injectable> Deref for LazyInject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}
impl<T: ?Sized + Injectable + Debug> Debug for LazyInject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Printing must not trigger resolution
        match self.try_get() {
            Some(instance) => f.debug_tuple("LazyInject").field(&&**instance).finish(),
            None => f.debug_tuple("LazyInject").field(&"<unresolved>").finish(),
        }
    }
}
impl<T: ?Sized + Injectable> Resolver for LazyInject<T> {
    fn resolve(registry: &TypeRegistry) -> Self {
        Self::from_registry(registry)
    }
}
