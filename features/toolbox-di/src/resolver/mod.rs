use crate::registry::TypeRegistry;

pub mod arc;
pub mod inject;
pub mod lazy;
pub mod provider;

/// Anything that can be built from a [TypeRegistry]
pub trait Resolver {
    fn resolve(registry: &TypeRegistry) -> Self
    where
        Self: Sized;
}
