//! View models for the dashboard shell (sidebar + top bar).
//!
//! These are plain serializable values: the WASM frontend renders them, the
//! `evalboard-preview` binary prints them. Nothing here touches the DOM.

use serde::{Deserialize, Serialize};

use evalboard_auth::{AccessCheckError, AccessChecker, Session};
use evalboard_navigation::{
    ActiveEntry, HeaderModel, NavIcon, NavigationComposer, OrganizationLookup, compose_header,
    routes,
};

pub const APP_NAME: &str = "Evalboard";

const ACTIVE_WEIGHT: u16 = 700;
const INACTIVE_WEIGHT: u16 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemView {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    pub is_active: bool,
    pub font_weight: u16,
}

impl From<ActiveEntry> for NavItemView {
    fn from(value: ActiveEntry) -> Self {
        Self {
            label: value.entry.name.into_owned(),
            href: value.entry.path.into_owned(),
            icon: value.entry.icon,
            is_active: value.is_active,
            font_weight: if value.is_active {
                ACTIVE_WEIGHT
            } else {
                INACTIVE_WEIGHT
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Twitter,
    Github,
    Youtube,
    Slack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub icon: SocialIcon,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    /// `None` renders a button with no navigation target.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarModel {
    pub brand: String,
    pub items: Vec<NavItemView>,
    pub actions: Vec<ActionButton>,
    pub footer_links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBarModel {
    #[serde(default)]
    pub role_label: Option<String>,
    pub show_chat_bell: bool,
    pub chat_href: String,
    pub show_notification_bell: bool,
    pub show_account_menu: bool,
}

impl From<HeaderModel> for TopBarModel {
    fn from(value: HeaderModel) -> Self {
        Self {
            role_label: value.role_label,
            show_chat_bell: value.show_chat_bell,
            chat_href: value.chat_path.to_string(),
            show_notification_bell: value.show_notification_bell,
            show_account_menu: value.show_account_menu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellModel {
    pub sidebar: SidebarModel,
    pub top_bar: TopBarModel,
}

fn sidebar(entries: Vec<ActiveEntry>) -> SidebarModel {
    SidebarModel {
        brand: APP_NAME.to_string(),
        items: entries.into_iter().map(NavItemView::from).collect(),
        actions: vec![
            ActionButton {
                label: "Invite Members".to_string(),
                href: Some(routes::INVITES.to_string()),
            },
            ActionButton {
                label: "Get source code".to_string(),
                href: None,
            },
        ],
        footer_links: [
            SocialIcon::Twitter,
            SocialIcon::Github,
            SocialIcon::Youtube,
            SocialIcon::Slack,
        ]
        .into_iter()
        .map(|icon| FooterLink {
            icon,
            url: "#".to_string(),
        })
        .collect(),
    }
}

/// Build the shell after driving the session's organization lookup.
pub async fn build_shell<C>(
    composer: &NavigationComposer,
    session: &Session,
    checker: &C,
    lookup: &OrganizationLookup,
    current_path: &str,
) -> Result<ShellModel, AccessCheckError>
where
    C: AccessChecker + ?Sized,
{
    let entries = composer
        .compose(session, checker, lookup, current_path)
        .await?;
    let header = compose_header(session, checker)?;
    Ok(ShellModel {
        sidebar: sidebar(entries),
        top_bar: header.into(),
    })
}

/// Build the shell from the lookup's current state without waiting.
pub fn build_shell_now<C>(
    composer: &NavigationComposer,
    session: &Session,
    checker: &C,
    lookup: &OrganizationLookup,
    current_path: &str,
) -> Result<ShellModel, AccessCheckError>
where
    C: AccessChecker + ?Sized,
{
    let entries = composer.compose_now(session, checker, lookup, current_path)?;
    let header = compose_header(session, checker)?;
    Ok(ShellModel {
        sidebar: sidebar(entries),
        top_bar: header.into(),
    })
}
