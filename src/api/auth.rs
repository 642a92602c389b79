//! Registration and login wire types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::ValidationError;
use crate::session::CurrentUser;

/// Registration form data for `POST /register`.
///
/// First name, last name, email, and password are required; phone and
/// address are optional. Call [`normalized`](Self::normalized) before
/// [`validate`](Self::validate) so emptiness is judged after trimming.
///
/// # Security
///
/// The `Debug` implementation masks the password.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Given name(s). Required.
    #[serde(rename = "nombres")]
    pub first_name: String,

    /// Family name(s). Required.
    #[serde(rename = "apellidos")]
    pub last_name: String,

    /// Contact phone. Optional.
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email. Required; lowercased on normalization.
    #[serde(rename = "correo")]
    pub email: String,

    /// Delivery address. Optional.
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Account password. Required; never trimmed.
    #[serde(rename = "contraseña")]
    pub password: String,
}

impl RegistrationForm {
    /// Returns a copy with text fields trimmed and the email lowercased.
    ///
    /// The password is carried through untouched.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.as_deref().map(|p| p.trim().to_string()),
            email: self.email.trim().to_lowercase(),
            address: self.address.as_deref().map(|a| a.trim().to_string()),
            password: self.password.clone(),
        }
    }

    /// Checks that every required field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] naming the first
    /// empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("nombres", &self.first_name),
            ("apellidos", &self.last_name),
            ("correo", &self.email),
            ("contraseña", &self.password),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &"*****")
            .finish()
    }
}

/// Login form data for `POST /login`.
///
/// # Security
///
/// The `Debug` implementation masks the password.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account email; lowercased on normalization.
    #[serde(rename = "correo")]
    pub email: String,

    /// Account password; never trimmed.
    #[serde(rename = "contraseña")]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from raw form input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns a copy with the email trimmed and lowercased.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
        }
    }

    /// Checks that both fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] if either field is
    /// empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

/// Response envelope for `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The success discriminator. Absent means failure.
    #[serde(default)]
    pub success: bool,
    /// The authenticated user record, present only on success.
    #[serde(default)]
    pub user: Option<CurrentUser>,
    /// Optional human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "  Ana ".to_string(),
            last_name: "Reyes".to_string(),
            phone: Some(" 555-0101 ".to_string()),
            email: " Ana@Example.COM ".to_string(),
            address: None,
            password: " secreta ".to_string(),
        }
    }

    #[test]
    fn test_normalization_trims_and_lowercases_email() {
        let form = sample_form().normalized();
        assert_eq!(form.first_name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.phone.as_deref(), Some("555-0101"));
        // Passwords are never trimmed
        assert_eq!(form.password, " secreta ");
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        let mut form = sample_form().normalized();
        form.email = String::new();

        assert!(matches!(
            form.validate(),
            Err(ValidationError::MissingRequiredField { field: "correo" })
        ));
    }

    #[test]
    fn test_validate_accepts_missing_optional_fields() {
        let mut form = sample_form().normalized();
        form.phone = None;
        form.address = None;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_serializes_wire_names() {
        let form = sample_form().normalized();
        let json = serde_json::to_value(&form).unwrap();

        assert_eq!(json["nombres"], "Ana");
        assert_eq!(json["apellidos"], "Reyes");
        assert_eq!(json["correo"], "ana@example.com");
        assert_eq!(json["contraseña"], " secreta ");
        assert!(json.get("direccion").is_none());
    }

    #[test]
    fn test_form_debug_masks_password() {
        let debug = format!("{:?}", sample_form());
        assert!(debug.contains("*****"));
        assert!(!debug.contains("secreta"));
    }

    #[test]
    fn test_credentials_normalize_and_validate() {
        let creds = Credentials::new(" Ana@Example.COM ", "secreta").normalized();
        assert_eq!(creds.email, "ana@example.com");
        assert!(creds.validate().is_ok());

        let empty = Credentials::new("", "secreta");
        assert!(matches!(
            empty.validate(),
            Err(ValidationError::MissingCredentials)
        ));
    }

    #[test]
    fn test_credentials_debug_masks_password() {
        let debug = format!("{:?}", Credentials::new("a@b.co", "secreta"));
        assert!(!debug.contains("secreta"));
    }

    #[test]
    fn test_login_response_failure_shapes() {
        // Explicit failure
        let res: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"no"}"#).unwrap();
        assert!(!res.success);

        // Missing discriminator is failure
        let res: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!res.success);
        assert!(res.user.is_none());
    }

    #[test]
    fn test_login_response_success_with_user() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"success":true,"user":{"id":3,"nombres":"Ana","apellidos":"Reyes","correo":"a@b.co"}}"#,
        )
        .unwrap();
        assert!(res.success);
        assert_eq!(res.user.unwrap().id, 3);
    }
}
