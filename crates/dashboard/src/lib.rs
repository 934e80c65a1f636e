//! `evalboard-dashboard`
//!
//! **Responsibility:** the admin shell around the record pages.
//!
//! This crate provides:
//! - Serializable sidebar/top-bar view models built from composed navigation
//! - Preview fixtures for rendering the shell outside the browser
//! - A Leptos frontend (WASM only) that renders the view models
//!
//! Page routing and record screens are owned by the host application.

pub mod fixture;
pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use fixture::{FixtureError, PreviewFixture};
pub use layout::{ShellModel, SidebarModel, TopBarModel, build_shell, build_shell_now};
