//! Session identity as handed over by the host platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use evalboard_core::{TenantId, UserId};

use crate::Role;

/// Session claims model (transport-agnostic).
///
/// The minimal set of claims the dashboard expects once the host platform
/// has decoded and verified its session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / local user identifier.
    pub sub: UserId,

    /// User identifier on the host platform (drives account widgets).
    #[serde(default)]
    pub platform_user_id: Option<String>,

    /// Tenant the user belongs to, if any.
    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    /// RBAC roles granted to the user.
    #[serde(default)]
    pub roles: Vec<Role>,

    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// belongs to the host platform.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

/// Read-only view of the current user, passed explicitly into composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    #[serde(default)]
    platform_user_id: Option<String>,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default)]
    tenant_id: Option<TenantId>,
}

impl Session {
    pub fn new(user_id: UserId, roles: Vec<Role>, tenant_id: Option<TenantId>) -> Self {
        Self {
            user_id,
            platform_user_id: None,
            roles,
            tenant_id,
        }
    }

    /// Build a session from claims, rejecting tokens outside their validity window.
    pub fn from_claims(
        claims: SessionClaims,
        now: DateTime<Utc>,
    ) -> Result<Self, TokenValidationError> {
        validate_claims(&claims, now)?;
        Ok(Self {
            user_id: claims.sub,
            platform_user_id: claims.platform_user_id,
            roles: claims.roles,
            tenant_id: claims.tenant_id,
        })
    }

    pub fn with_platform_user_id(mut self, id: impl Into<String>) -> Self {
        self.platform_user_id = Some(id.into());
        self
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn platform_user_id(&self) -> Option<&str> {
        self.platform_user_id.as_deref()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    /// Whether the session holds any of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: UserId::new("u-1").unwrap(),
            platform_user_id: Some("roq-1".to_string()),
            tenant_id: Some(TenantId::new("T1").unwrap()),
            roles: vec![Role::OWNER],
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn valid_claims_become_a_session() {
        let now = Utc::now();
        let session =
            Session::from_claims(claims(now - Duration::minutes(1), now + Duration::hours(1)), now)
                .unwrap();

        assert_eq!(session.user_id().as_str(), "u-1");
        assert_eq!(session.platform_user_id(), Some("roq-1"));
        assert_eq!(session.tenant_id().map(|t| t.as_str()), Some("T1"));
        assert!(session.has_any_role(&[Role::OWNER]));
        assert!(!session.has_any_role(&[Role::new("staff")]));
    }

    #[test]
    fn claims_window_is_enforced() {
        let now = Utc::now();

        assert_eq!(
            validate_claims(&claims(now - Duration::hours(2), now - Duration::hours(1)), now),
            Err(TokenValidationError::Expired)
        );
        assert_eq!(
            validate_claims(&claims(now + Duration::hours(1), now + Duration::hours(2)), now),
            Err(TokenValidationError::NotYetValid)
        );
        assert_eq!(
            validate_claims(&claims(now, now), now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn session_deserializes_with_missing_optionals() {
        let session: Session = serde_json::from_str(r#"{ "user_id": "u-9" }"#).unwrap();

        assert!(session.roles().is_empty());
        assert!(session.tenant_id().is_none());
        assert!(session.platform_user_id().is_none());
    }
}
