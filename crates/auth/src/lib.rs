//! `evalboard-auth` — session identity and capability checks.
//!
//! This crate is decoupled from HTTP, storage and rendering: the host
//! platform authenticates, this crate only models what it hands back and
//! answers "may this session read X?".

pub mod access;
pub mod permissions;
pub mod policy;
pub mod roles;
pub mod session;

pub use access::{AccessCheckError, AccessChecker, AccessOperation, AccessService, CheckFn};
pub use permissions::Permission;
pub use policy::{AuthzError, RolePolicy, SessionAccess, authorize};
pub use roles::Role;
pub use session::{Session, SessionClaims, TokenValidationError, validate_claims};
