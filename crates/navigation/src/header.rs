//! Top bar / mobile navigation composition.

use serde::Serialize;

use evalboard_auth::{AccessCheckError, AccessChecker, AccessOperation, AccessService, Session};

use crate::routes;

/// Platform resource behind the chat widget.
pub const CONVERSATION_ENTITY: &str = "conversation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    /// Humanized roles, e.g. `"Owner, Tenant admin"`; only for platform users.
    pub role_label: Option<String>,
    pub show_chat_bell: bool,
    /// Where the chat bell navigates to.
    pub chat_path: &'static str,
    pub show_notification_bell: bool,
    pub show_account_menu: bool,
}

pub fn compose_header<C>(session: &Session, checker: &C) -> Result<HeaderModel, AccessCheckError>
where
    C: AccessChecker + ?Sized,
{
    let is_platform_user = session.platform_user_id().is_some();
    let role_label = is_platform_user.then(|| {
        session
            .roles()
            .iter()
            .map(|r| r.humanize())
            .collect::<Vec<_>>()
            .join(", ")
    });

    let show_chat_bell =
        checker.has_access(CONVERSATION_ENTITY, AccessOperation::Read, AccessService::Platform)?;

    Ok(HeaderModel {
        role_label,
        show_chat_bell,
        chat_path: routes::CHAT,
        show_notification_bell: true,
        show_account_menu: is_platform_user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalboard_auth::{CheckFn, Role};
    use evalboard_core::UserId;

    fn session(roles: Vec<Role>) -> Session {
        Session::new(UserId::new("u-1").unwrap(), roles, None)
    }

    #[test]
    fn platform_user_sees_roles_and_account_menu() {
        let s = session(vec![Role::OWNER, Role::new("tenant_admin")]).with_platform_user_id("roq-1");
        let header = compose_header(&s, &CheckFn::new(|_, _, _| Ok(false))).unwrap();

        assert_eq!(header.role_label.as_deref(), Some("Owner, Tenant admin"));
        assert!(header.show_account_menu);
        assert!(!header.show_chat_bell);
        assert!(header.show_notification_bell);
    }

    #[test]
    fn local_only_session_hides_roles_and_account_menu() {
        let header = compose_header(
            &session(vec![Role::OWNER]),
            &CheckFn::new(|_, _, _| Ok(true)),
        )
        .unwrap();

        assert_eq!(header.role_label, None);
        assert!(!header.show_account_menu);
    }

    #[test]
    fn chat_bell_checks_platform_conversations() {
        let checker = CheckFn::new(|entity: &str, op, service| {
            Ok(entity == CONVERSATION_ENTITY
                && op == AccessOperation::Read
                && service == AccessService::Platform)
        });
        let header = compose_header(&session(vec![]), &checker).unwrap();

        assert!(header.show_chat_bell);
        assert_eq!(header.chat_path, "/chat");
    }

    #[test]
    fn chat_check_failure_propagates() {
        let checker = CheckFn::new(|_: &str, _, _| {
            Err(AccessCheckError::Unavailable("down".to_string()))
        });
        assert!(compose_header(&session(vec![]), &checker).is_err());
    }
}
