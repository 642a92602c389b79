//! Error taxonomy for storefront operations.
//!
//! Every flow surfaces exactly one of three error classes to the end user:
//!
//! - [`StoreError::Validation`]: a required field was missing, caught before
//!   any network call
//! - [`StoreError::Rejected`]: the server answered with `success: false` (or
//!   no `success` at all), carrying its message or a per-flow fallback
//! - [`StoreError::Transport`] / [`StoreError::Malformed`]: the request could
//!   not complete or the response could not be parsed
//!
//! Protected actions additionally raise [`StoreError::NotLoggedIn`] with the
//! page to redirect to.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.login(credentials).await {
//!     Ok(outcome) => { /* cache updated, navigate to outcome.goto */ }
//!     Err(StoreError::Validation(e)) => { /* show e, no request was made */ }
//!     Err(StoreError::Rejected { code, message }) => { /* show message */ }
//!     Err(e) => { /* connectivity: tell the user to check the server */ }
//! }
//! ```

use thiserror::Error;

use crate::session::{Page, SessionError};

/// Local validation failure, raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required registration field is empty after normalization.
    #[error("Complete los campos obligatorios")]
    MissingRequiredField {
        /// The wire name of the empty field.
        field: &'static str,
    },

    /// Email or password is empty on the login form.
    #[error("Complete todos los campos")]
    MissingCredentials,
}

/// Classifies a server-reported rejection.
///
/// The server contract only carries an optional free-text `message`; the code
/// is assigned by the flow that observed the rejection so callers can branch
/// without string matching. [`fallback_message`](Self::fallback_message)
/// supplies the generic text shown when the server sent none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionCode {
    /// Registration was refused.
    RegistrationFailed,
    /// Credentials were wrong or the login was otherwise refused.
    InvalidCredentials,
    /// The product listing could not be loaded.
    ProductsFailed,
    /// Adding to the cart was refused.
    CartUpdateFailed,
    /// The cart could not be loaded.
    CartLoadFailed,
    /// Order confirmation was refused.
    OrderFailed,
}

impl RejectionCode {
    /// Generic user-facing message for this rejection class.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::RegistrationFailed => "Error al registrar usuario",
            Self::InvalidCredentials => "Usuario o contraseña incorrectos",
            Self::ProductsFailed => "Error al cargar productos",
            Self::CartUpdateFailed => "Error al agregar al carrito",
            Self::CartLoadFailed => "Error al cargar el carrito",
            Self::OrderFailed => "Error al confirmar pedido",
        }
    }
}

/// Unified error type for storefront flows.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Local validation failed; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A protected action was attempted without a cached user.
    #[error("Debes iniciar sesión")]
    NotLoggedIn {
        /// Page the caller should navigate to.
        redirect: Page,
    },

    /// The server reported failure.
    #[error("{message}")]
    Rejected {
        /// Flow-assigned classification of the rejection.
        code: RejectionCode,
        /// Server-provided message, or the code's fallback.
        message: String,
    },

    /// The request could not complete.
    #[error("Error de conexión. Verifica que el servidor esté corriendo.")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be parsed as the expected shape.
    #[error("Error de conexión. Verifica que el servidor esté corriendo.")]
    Malformed(#[source] serde_json::Error),

    /// The injected session store failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl StoreError {
    /// Builds a [`StoreError::Rejected`] from an optional server message.
    #[must_use]
    pub fn rejected(code: RejectionCode, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| code.fallback_message().to_string());
        Self::Rejected { code, message }
    }

    /// Returns `true` for the connectivity class (transport or parse failure).
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Malformed(_))
    }
}
