//! Session state for the storefront client.
//!
//! The "session" is nothing more than the user record the server returned on
//! a successful login, cached locally under an injected [`SessionStore`].
//! Its presence is the sole gate for protected actions; the client never
//! re-verifies the cached record against the server.

mod guard;
mod store;

pub use guard::{require_login, Access, Page};
pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};

use serde::{Deserialize, Serialize};

/// The locally cached identity of the logged-in user.
///
/// Created from the `user` field of a successful login response and trusted
/// as-is until explicitly cleared. Wire field names follow the server's
/// Spanish contract.
///
/// # Example
///
/// ```rust
/// use tienda_sdk::CurrentUser;
///
/// let json = r#"{"id":7,"nombres":"Ana","apellidos":"Reyes","correo":"ana@example.com"}"#;
/// let user: CurrentUser = serde_json::from_str(json).unwrap();
/// assert_eq!(user.id, 7);
/// assert_eq!(user.email, "ana@example.com");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// Server-assigned user identifier, used to key cart and order requests.
    pub id: u64,

    /// Given name(s).
    #[serde(rename = "nombres")]
    pub first_name: String,

    /// Family name(s).
    #[serde(rename = "apellidos")]
    pub last_name: String,

    /// Contact email, normalized to lowercase by the registration flow.
    #[serde(rename = "correo")]
    pub email: String,

    /// Contact phone, if the user provided one.
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Delivery address, if the user provided one.
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// Verify CurrentUser is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CurrentUser>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_deserializes_wire_names() {
        let json = r#"{
            "id": 42,
            "nombres": "Ana",
            "apellidos": "Reyes",
            "correo": "ana@example.com",
            "telefono": "555-0101",
            "direccion": "Calle 1 #2-3"
        }"#;

        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.last_name, "Reyes");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.phone.as_deref(), Some("555-0101"));
        assert_eq!(user.address.as_deref(), Some("Calle 1 #2-3"));
    }

    #[test]
    fn test_current_user_optional_fields_may_be_absent() {
        let json = r#"{"id":1,"nombres":"Ana","apellidos":"Reyes","correo":"a@b.co"}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert!(user.phone.is_none());
        assert!(user.address.is_none());
    }

    #[test]
    fn test_current_user_serializes_wire_names() {
        let user = CurrentUser {
            id: 9,
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            address: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["nombres"], "Ana");
        assert_eq!(json["correo"], "ana@example.com");
        assert!(json.get("telefono").is_none());
    }
}
