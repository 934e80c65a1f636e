//! Sidebar and top bar components.

use leptos::*;

use evalboard_navigation::NavIcon;

use crate::layout::{
    ActionButton, FooterLink, NavItemView, ShellModel, SidebarModel, SocialIcon, TopBarModel,
};

fn nav_icon_class(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Users => "icon-users",
        NavIcon::Box => "icon-box",
        NavIcon::Mail => "icon-mail",
        NavIcon::User => "icon-user",
        NavIcon::Message => "icon-message-circle",
        NavIcon::File => "icon-file",
        NavIcon::Menu => "icon-menu",
    }
}

fn social_icon_class(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Twitter => "icon-twitter",
        SocialIcon::Github => "icon-github",
        SocialIcon::Youtube => "icon-youtube",
        SocialIcon::Slack => "icon-slack",
    }
}

/// Whole shell: sidebar on the left, top bar above the page content.
#[component]
pub fn Shell(model: ShellModel) -> impl IntoView {
    let ShellModel { sidebar, top_bar } = model;

    view! {
        <div class="app-shell">
            <Sidebar sidebar=sidebar/>
            <TopBar top_bar=top_bar/>
        </div>
    }
}

#[component]
fn Sidebar(sidebar: SidebarModel) -> impl IntoView {
    let SidebarModel {
        brand,
        items,
        actions,
        footer_links,
    } = sidebar;

    view! {
        <aside class="sidebar">
            <div class="brand">{brand}</div>
            <nav class="main-nav">
                {items.into_iter().map(|item| view! { <NavItem item=item/> }).collect_view()}
            </nav>
            <div class="sidebar-actions">
                {actions.into_iter().map(|action| view! { <Action action=action/> }).collect_view()}
            </div>
            <footer class="sidebar-footer">
                {footer_links.into_iter().map(|link| view! { <Footer link=link/> }).collect_view()}
            </footer>
        </aside>
    }
}

#[component]
fn NavItem(item: NavItemView) -> impl IntoView {
    let style = format!("font-weight: {}", item.font_weight);

    view! {
        <a href=item.href class="nav-item" class:active=item.is_active style=style>
            {item.icon.map(|icon| view! { <span class=format!("nav-icon {}", nav_icon_class(icon))></span> })}
            {item.label}
        </a>
    }
}

#[component]
fn Action(action: ActionButton) -> impl IntoView {
    match action.href {
        Some(href) => view! {
            <a href=href class="action-button">{action.label}</a>
        }
        .into_view(),
        None => view! {
            <button class="action-button">{action.label}</button>
        }
        .into_view(),
    }
}

#[component]
fn Footer(link: FooterLink) -> impl IntoView {
    view! {
        <a href=link.url class="footer-link">
            <span class=social_icon_class(link.icon)></span>
        </a>
    }
}

#[component]
fn TopBar(top_bar: TopBarModel) -> impl IntoView {
    let chat_href = top_bar.chat_href;

    view! {
        <header class="top-bar">
            {top_bar.role_label.map(|label| view! { <span class="role-label">{label}</span> })}
            <div class="top-bar-widgets">
                <Show when=move || top_bar.show_chat_bell>
                    <a href=chat_href.clone() class="chat-bell"></a>
                </Show>
                <Show when=move || top_bar.show_notification_bell>
                    <span class="notification-bell"></span>
                </Show>
                <Show when=move || top_bar.show_account_menu>
                    <span class="account-menu"></span>
                </Show>
            </div>
        </header>
    }
}
