//! Toolbox DI is a small type keyed dependency container.
//!
//! Every type has at most one binding. Bindings are added with [Provider] (or
//! [TypeRegistry::register]) while the application starts, and are then read through
//! one of the accessors:
//!
//! 1. [Inject] - resolves on creation, panics if the type is missing
//! 2. [LazyInject] - resolves on first access, panics if the type is missing by then
//! 3. [OptionalInject] - resolves on creation, `None` if the type is missing
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use toolbox_di::{Inject, OptionalInject, Provider, TypeRegistry};
//!
//! trait UserService: Send + Sync {
//!     fn fetch_user(&self) -> String;
//! }
//!
//! struct RemoteUserService;
//! impl UserService for RemoteUserService {
//!     fn fetch_user(&self) -> String {
//!         "John Doe".to_string()
//!     }
//! }
//!
//! struct Telemetry;
//!
//! let registry = TypeRegistry::new();
//! let _users = Provider::<dyn UserService>::in_registry(&registry, Arc::new(RemoteUserService));
//!
//! let users: Inject<dyn UserService> = registry.get();
//! let telemetry: OptionalInject<Telemetry> = registry.get();
//!
//! assert_eq!(users.fetch_user(), "John Doe");
//! assert!(telemetry.get().is_none());
//! ```
//!
//! A missing binding is a wiring bug. [TypeRegistry::resolve] and the eager and lazy
//! accessors panic instead of handing out a default.

pub mod errors;
pub mod registry;
pub mod resolver;
pub mod types;

pub use errors::RequireError;
pub use registry::TypeRegistry;
pub use resolver::{
    inject::{Inject, OptionalInject},
    lazy::LazyInject,
    provider::Provider,
    Resolver,
};
pub use types::{Injectable, TypeInfo};
