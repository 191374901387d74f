use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Registries may be shared between threads
/// So anything injectable needs to be Send + Sync + 'static
///
/// Unsized types (`dyn Trait`) are injectable as well, they are stored behind an `Arc`.
pub trait Injectable: Send + Sync + 'static {}
impl<T: ?Sized + Send + Sync + 'static> Injectable for T {}

/// A registered instance
///
/// Holds an `Arc<T>` behind `dyn Any`, so that `T` itself may be unsized.
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    pub instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub(crate) fn new<T: ?Sized + Injectable>(instance: Arc<T>) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            instance: Arc::new(instance),
        }
    }

    /// Returns a shared handle to the stored value
    ///
    /// On a mismatch the name of the stored type is returned
    pub fn downcast<T: ?Sized + Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match self.instance.downcast_ref::<Arc<T>>() {
            Some(downcasted) => Ok(downcasted.clone()),
            None => Err(self.info.type_name),
        }
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
