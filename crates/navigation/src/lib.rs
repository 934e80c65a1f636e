//! `evalboard-navigation` — sidebar/header composition for the admin shell.
//!
//! Data flows one way:
//! static entries → tenant-aware path resolution → access filtering →
//! active-route annotation → rendering (done elsewhere).

pub mod composer;
pub mod config;
pub mod directory;
pub mod entry;
pub mod filter;
pub mod header;
pub mod route;
pub mod routes;
pub mod tenant;

pub use composer::{ActiveEntry, NavigationComposer};
pub use config::NavigationConfig;
pub use directory::{InMemoryOrganizationDirectory, LookupError, OrganizationDirectory};
pub use entry::{NavIcon, NavigationCatalog, NavigationEntry};
pub use filter::filter_visible;
pub use header::{HeaderModel, compose_header};
pub use route::is_active;
pub use tenant::{LookupState, OrganizationLookup, TenantContext};
