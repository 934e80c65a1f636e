//! Static navigation entry definitions.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use evalboard_auth::AccessService;

use crate::routes;

/// Entity name of the tenant-aware "Organization" entry.
pub const ORGANIZATION_ENTITY: &str = "organization";

/// Closed set of icons; the rendering layer maps each to a concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Users,
    Box,
    Mail,
    User,
    Message,
    File,
    Menu,
}

/// A single navigation link definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    pub path: Cow<'static, str>,
    /// Entity name used for the READ capability check.
    pub entity: Cow<'static, str>,
    pub service: AccessService,
}

impl NavigationEntry {
    pub const fn new(
        name: &'static str,
        icon: Option<NavIcon>,
        path: &'static str,
        entity: &'static str,
        service: AccessService,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            icon,
            path: Cow::Borrowed(path),
            entity: Cow::Borrowed(entity),
            service,
        }
    }

    /// Same entry pointing somewhere else; nothing but the path changes.
    pub fn with_path(&self, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub fn is_organization(&self) -> bool {
        self.entity == ORGANIZATION_ENTITY
    }
}

const STANDARD_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry::new(
        "Users",
        Some(NavIcon::Users),
        routes::USERS,
        "user",
        AccessService::Project,
    ),
    NavigationEntry::new(
        "Organization",
        Some(NavIcon::Box),
        routes::ORGANIZATIONS,
        ORGANIZATION_ENTITY,
        AccessService::Project,
    ),
    NavigationEntry::new(
        "Employee",
        Some(NavIcon::Box),
        routes::EMPLOYEES,
        "employee",
        AccessService::Project,
    ),
    NavigationEntry::new(
        "Performance Evaluation",
        Some(NavIcon::Box),
        routes::PERFORMANCE_EVALUATIONS,
        "performance_evaluation",
        AccessService::Project,
    ),
];

/// Ordered list of candidate entries, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCatalog {
    entries: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Users, Organization, Employee, Performance Evaluation.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.to_vec(),
        }
    }

    pub fn from_entries(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Entity names referenced by the catalog (for policy registration).
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.entity.as_ref())
    }
}

impl Default for NavigationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
