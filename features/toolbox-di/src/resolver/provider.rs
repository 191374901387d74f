use std::{fmt::Debug, ops::Deref, sync::Arc};

use crate::{registry::TypeRegistry, types::Injectable};

/// Registers a dependency on creation and keeps a handle for local use
///
/// This is how bindings get into a registry, usually once while the application starts.
/// A later [Provider] of the same type replaces the binding.
pub struct Provider<T: ?Sized + Injectable> {
    inner: Arc<T>,
}
impl<T: Injectable> Provider<T> {
    /// Registers `value` in the global registry
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }
}
impl<T: ?Sized + Injectable> Provider<T> {
    /// Registers an existing shared instance in the global registry
    ///
    /// Use this to provide a trait object: `Provider::<dyn Service>::from_arc(Arc::new(Impl))`
    pub fn from_arc(instance: Arc<T>) -> Self {
        Self::in_registry(TypeRegistry::global(), instance)
    }

    pub fn in_registry(registry: &TypeRegistry, instance: Arc<T>) -> Self {
        registry.register(instance.clone());
        Provider { inner: instance }
    }

    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}
impl<T: ?Sized + Injectable> Deref for Provider<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T: ?Sized + Injectable + Debug> Debug for Provider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Provider").field(&&*self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::inject::Inject;

    trait Storage: Send + Sync {
        fn kind(&self) -> &'static str;
    }
    struct InMemory;
    impl Storage for InMemory {
        fn kind(&self) -> &'static str {
            "memory"
        }
    }

    #[test]
    fn provider_registers_on_creation() {
        let registry = TypeRegistry::new();
        let provided = Provider::<dyn Storage>::in_registry(&registry, Arc::new(InMemory));

        assert_eq!(provided.kind(), "memory");
        let injected = Inject::<dyn Storage>::from_registry(&registry);
        assert!(Arc::ptr_eq(&provided.inner(), &injected.inner()));
    }

    #[test]
    fn provider_uses_global_registry() {
        struct Session(u32);
        let provided = Provider::new(Session(9));

        let injected: Inject<Session> = Inject::new();
        assert_eq!(injected.0, 9);
        assert_eq!(provided.0, 9);
    }
}
