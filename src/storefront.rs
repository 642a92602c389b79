//! High-level storefront client flows.
//!
//! [`StorefrontClient`] binds the HTTP transport to an injected session
//! store and exposes one async method per user action: register, login,
//! list products, add to cart, fetch cart, confirm order, logout. Each
//! method performs at most one network round trip and returns a tagged
//! result the caller dispatches to UI updates; navigation and notices come
//! back as data in [`Outcome`].

use std::sync::Arc;

use crate::api::{
    Ack, AddToCartRequest, Cart, CartResponse, ConfirmOrderRequest, Credentials, LoginResponse,
    Product, ProductsResponse, RegistrationForm,
};
use crate::client::{HttpClient, RejectionCode, StoreError};
use crate::config::StoreConfig;
use crate::session::{require_login, Access, CurrentUser, Page, SessionError, SessionStore};

/// The data form of "notify the user, then navigate".
///
/// Successful flows return an `Outcome`; the embedding application shows the
/// notice (if any) and performs the navigation (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// User-facing notification to display.
    pub notice: Option<String>,
    /// Page to navigate to.
    pub goto: Option<Page>,
}

impl Outcome {
    /// An outcome that only navigates.
    #[must_use]
    pub const fn goto(page: Page) -> Self {
        Self {
            notice: None,
            goto: Some(page),
        }
    }

    /// An outcome that notifies and then navigates.
    #[must_use]
    pub fn notify_and_goto(notice: impl Into<String>, page: Page) -> Self {
        Self {
            notice: Some(notice.into()),
            goto: Some(page),
        }
    }
}

/// Client for the storefront API with an injected session store.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync`, making it safe to share across async
/// tasks. Flows hold no state between invocations beyond the session store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tienda_sdk::{ApiBaseUrl, MemorySessionStore, StoreConfig, StorefrontClient};
///
/// let config = StoreConfig::builder()
///     .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StorefrontClient::new(config, Arc::new(MemorySessionStore::new()));
/// assert!(!client.require_login(None).unwrap().is_authorized());
/// ```
#[derive(Clone)]
pub struct StorefrontClient {
    http: HttpClient,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a client for the configured API origin.
    #[must_use]
    pub fn new(config: StoreConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: HttpClient::new(config),
            session,
        }
    }

    /// Returns the injected session store.
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Gates a protected page on the cached session record.
    ///
    /// See [`require_login`] for the contract; `redirect` defaults to
    /// [`Page::Login`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store itself fails.
    pub fn require_login(&self, redirect: Option<Page>) -> Result<Access, SessionError> {
        require_login(self.session.as_ref(), redirect)
    }

    /// Registers a new account.
    ///
    /// The form is normalized (fields trimmed, email lowercased) and
    /// validated before anything is sent; a missing required field fails
    /// locally with no network call. On a server-reported success the
    /// outcome notifies the user and navigates to the login page.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Validation`] when a required field is empty
    /// - [`StoreError::Rejected`] with [`RejectionCode::RegistrationFailed`]
    ///   when the server refuses
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn register(&self, form: &RegistrationForm) -> Result<Outcome, StoreError> {
        let form = form.normalized();
        form.validate()?;

        let ack: Ack = self.http.post_json("register", &form).await?;
        if !ack.success {
            tracing::warn!(email = %form.email, "registration rejected");
            return Err(StoreError::rejected(
                RejectionCode::RegistrationFailed,
                ack.message,
            ));
        }

        Ok(Outcome::notify_and_goto(
            "Cuenta creada con éxito. Ahora inicia sesión.",
            Page::Login,
        ))
    }

    /// Logs in and caches the returned user record.
    ///
    /// The record is cached if and only if the response reports success and
    /// includes a user; the outcome then navigates to the main service page.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Validation`] when email or password is empty
    /// - [`StoreError::Rejected`] with [`RejectionCode::InvalidCredentials`]
    ///   when the server refuses or omits the user record
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn login(&self, credentials: &Credentials) -> Result<Outcome, StoreError> {
        let credentials = credentials.normalized();
        credentials.validate()?;

        let response: LoginResponse = self.http.post_json("login", &credentials).await?;
        match response {
            LoginResponse {
                success: true,
                user: Some(user),
                ..
            } => {
                self.session.set(&user)?;
                tracing::debug!(user_id = user.id, "session cached");
                Ok(Outcome::goto(Page::Service))
            }
            LoginResponse { message, .. } => {
                tracing::warn!(email = %credentials.email, "login rejected");
                Err(StoreError::rejected(
                    RejectionCode::InvalidCredentials,
                    message,
                ))
            }
        }
    }

    /// Fetches the product set for a category.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Rejected`] with [`RejectionCode::ProductsFailed`]
    ///   when the server refuses
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn products(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let response: ProductsResponse =
            self.http.get_json("productos", &[("tipo", category)]).await?;
        if !response.success {
            return Err(StoreError::rejected(
                RejectionCode::ProductsFailed,
                response.message,
            ));
        }
        Ok(response.products)
    }

    /// Adds one unit of a product to the current user's cart.
    ///
    /// Requires a cached user; without one no request is issued and the
    /// error carries the login redirect. On success the outcome navigates to
    /// the order detail page.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotLoggedIn`] when no user is cached
    /// - [`StoreError::Rejected`] with [`RejectionCode::CartUpdateFailed`]
    ///   when the server refuses
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn add_to_cart(&self, product_id: u64) -> Result<Outcome, StoreError> {
        let user = self.current_user()?;

        let request = AddToCartRequest::single(user.id, product_id);
        let ack: Ack = self.http.post_json("carrito", &request).await?;
        if !ack.success {
            tracing::warn!(user_id = user.id, product_id, "cart addition rejected");
            return Err(StoreError::rejected(
                RejectionCode::CartUpdateFailed,
                ack.message,
            ));
        }

        Ok(Outcome::goto(Page::OrderDetail))
    }

    /// Fetches the current user's cart.
    ///
    /// Nothing is cached locally; every call re-fetches the aggregated view
    /// from the server.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotLoggedIn`] when no user is cached
    /// - [`StoreError::Rejected`] with [`RejectionCode::CartLoadFailed`]
    ///   when the server refuses
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn cart(&self) -> Result<Cart, StoreError> {
        let user = self.current_user()?;

        let path = format!("carrito/{}", user.id);
        let response: CartResponse = self.http.get_json(&path, &[]).await?;
        if !response.success {
            return Err(StoreError::rejected(
                RejectionCode::CartLoadFailed,
                response.message,
            ));
        }

        Ok(Cart {
            items: response.items,
            total: response.total,
        })
    }

    /// Confirms the current user's cart as an order.
    ///
    /// Requires a cached user; without one no request is issued. On success
    /// the outcome notifies the user and navigates to the main service page.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotLoggedIn`] when no user is cached
    /// - [`StoreError::Rejected`] with [`RejectionCode::OrderFailed`] when
    ///   the server refuses
    /// - [`StoreError::Transport`] / [`StoreError::Malformed`] on
    ///   connectivity failure
    pub async fn confirm_order(&self) -> Result<Outcome, StoreError> {
        let user = self.current_user()?;

        let request = ConfirmOrderRequest { usuario_id: user.id };
        let ack: Ack = self.http.post_json("pedidos", &request).await?;
        if !ack.success {
            tracing::warn!(user_id = user.id, "order confirmation rejected");
            return Err(StoreError::rejected(RejectionCode::OrderFailed, ack.message));
        }

        Ok(Outcome::notify_and_goto(
            "Pedido confirmado con éxito. ¡Gracias!",
            Page::Service,
        ))
    }

    /// Clears the session cache and navigates to the login page.
    ///
    /// No network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store cannot be cleared.
    pub fn logout(&self) -> Result<Outcome, SessionError> {
        self.session.clear()?;
        Ok(Outcome::goto(Page::Login))
    }

    /// Reads the cached user, mapping absence to a login redirect.
    fn current_user(&self) -> Result<CurrentUser, StoreError> {
        self.session
            .get()?
            .ok_or(StoreError::NotLoggedIn {
                redirect: Page::Login,
            })
    }
}
