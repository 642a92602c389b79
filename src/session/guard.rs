//! Synchronous access guard for pages that require a logged-in user.

use std::fmt;

use crate::session::{CurrentUser, SessionError, SessionStore};

/// Navigation targets the client can direct the caller to.
///
/// Navigation is modeled as data: flows and guards name the target page and
/// the embedding application performs the actual transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// The login page (`ingreso`).
    Login,
    /// The main service page shown after login (`servicio`).
    Service,
    /// The order detail page showing the cart (`detalle-pedido`).
    OrderDetail,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "ingreso"),
            Self::Service => write!(f, "servicio"),
            Self::OrderDetail => write!(f, "detalle-pedido"),
        }
    }
}

/// Result of an access-guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// A user record is cached; the page may proceed.
    Authorized(CurrentUser),
    /// No record is cached; the caller should navigate to the target page.
    Redirect(Page),
}

impl Access {
    /// Returns `true` if the check authorized the caller.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    /// Returns the authorized user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authorized(user) => Some(user),
            Self::Redirect(_) => None,
        }
    }
}

/// Checks the session cache and gates access to a protected page.
///
/// Authorized if and only if a user record is present in the store; the
/// record's contents are not validated and the server is never consulted.
/// When no record is present the returned [`Access::Redirect`] carries
/// `redirect`, defaulting to [`Page::Login`].
///
/// # Errors
///
/// Returns [`SessionError`] only if the store itself fails; an empty store
/// is not an error.
///
/// # Example
///
/// ```rust
/// use tienda_sdk::{require_login, Access, MemorySessionStore, Page};
///
/// let store = MemorySessionStore::new();
/// let access = require_login(&store, None).unwrap();
/// assert_eq!(access, Access::Redirect(Page::Login));
/// ```
pub fn require_login(
    store: &dyn SessionStore,
    redirect: Option<Page>,
) -> Result<Access, SessionError> {
    match store.get()? {
        Some(user) => Ok(Access::Authorized(user)),
        None => Ok(Access::Redirect(redirect.unwrap_or(Page::Login))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn sample_user() -> CurrentUser {
        CurrentUser {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_guard_redirects_when_store_is_empty() {
        let store = MemorySessionStore::new();
        let access = require_login(&store, None).unwrap();
        assert_eq!(access, Access::Redirect(Page::Login));
        assert!(!access.is_authorized());
    }

    #[test]
    fn test_guard_honors_custom_redirect_target() {
        let store = MemorySessionStore::new();
        let access = require_login(&store, Some(Page::Service)).unwrap();
        assert_eq!(access, Access::Redirect(Page::Service));
    }

    #[test]
    fn test_guard_authorizes_any_cached_record() {
        let store = MemorySessionStore::new();
        store.set(&sample_user()).unwrap();

        let access = require_login(&store, None).unwrap();
        assert!(access.is_authorized());
        assert_eq!(access.user().unwrap().id, 1);
    }

    #[test]
    fn test_guard_unauthorized_after_clear() {
        let store = MemorySessionStore::new();
        store.set(&sample_user()).unwrap();
        store.clear().unwrap();

        assert!(!require_login(&store, None).unwrap().is_authorized());
    }

    #[test]
    fn test_page_display_names() {
        assert_eq!(Page::Login.to_string(), "ingreso");
        assert_eq!(Page::Service.to_string(), "servicio");
        assert_eq!(Page::OrderDetail.to_string(), "detalle-pedido");
    }
}
