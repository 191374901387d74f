use std::sync::Arc;

use crate::{registry::TypeRegistry, resolver::Resolver, types::Injectable};

impl<T: ?Sized + Injectable> Resolver for Arc<T> {
    /// # Panics
    /// If `T` is not registered
    fn resolve(registry: &TypeRegistry) -> Self {
        registry.resolve()
    }
}

impl<T: ?Sized + Injectable> Resolver for Option<Arc<T>> {
    fn resolve(registry: &TypeRegistry) -> Self {
        registry.resolve_optional()
    }
}
