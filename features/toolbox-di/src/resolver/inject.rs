use std::{fmt::Debug, ops::Deref, sync::Arc};

use crate::{registry::TypeRegistry, resolver::Resolver, types::Injectable};

/// Eagerly resolved dependency
///
/// The lookup happens once, when the accessor is created, and the result is kept for
/// the accessor's lifetime.
///
/// ```
/// use toolbox_di::{Inject, Provider};
///
/// struct UserService;
/// impl UserService {
///     fn name(&self) -> &'static str {
///         "John Doe"
///     }
/// }
///
/// let _provided = Provider::new(UserService);
/// let service: Inject<UserService> = Inject::new();
/// assert_eq!(service.name(), "John Doe");
/// ```
///
/// ### Panics
///
/// On creation, if the type is not registered.
pub struct Inject<T: ?Sized + Injectable> {
    inner: Arc<T>,
}
impl<T: ?Sized + Injectable> Inject<T> {
    /// Resolves from the global registry
    pub fn new() -> Self {
        Self::from_registry(TypeRegistry::global())
    }

    pub fn from_registry(registry: &TypeRegistry) -> Self {
        Inject {
            inner: registry.resolve(),
        }
    }

    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}
impl<T: ?Sized + Injectable> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: ?Sized + Injectable> Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T: ?Sized + Injectable + Debug> Debug for Inject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Inject").field(&&*self.inner).finish()
    }
}
impl<T: ?Sized + Injectable> Resolver for Inject<T> {
    fn resolve(registry: &TypeRegistry) -> Self {
        Self::from_registry(registry)
    }
}

/// Dependency which may be missing
///
/// Resolved once on creation, holds `None` if the type was not registered at that time.
pub struct OptionalInject<T: ?Sized + Injectable> {
    inner: Option<Arc<T>>,
}
impl<T: ?Sized + Injectable> OptionalInject<T> {
    /// Resolves from the global registry
    pub fn new() -> Self {
        Self::from_registry(TypeRegistry::global())
    }

    pub fn from_registry(registry: &TypeRegistry) -> Self {
        OptionalInject {
            inner: registry.resolve_optional(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    pub fn inner(&self) -> Option<Arc<T>> {
        self.inner.clone()
    }

    pub fn is_some(&self) -> bool {
        self.inner.is_some()
    }
}
impl<T: ?Sized + Injectable> Default for OptionalInject<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: ?Sized + Injectable + Debug> Debug for OptionalInject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(instance) => f.debug_tuple("OptionalInject").field(&instance).finish(),
            None => f.debug_tuple("OptionalInject").field(&"None").finish(),
        }
    }
}
impl<T: ?Sized + Injectable> Resolver for OptionalInject<T> {
    fn resolve(registry: &TypeRegistry) -> Self {
        Self::from_registry(registry)
    }
}
