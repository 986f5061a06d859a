//! API key authentication.
//!
//! Clients authenticate with an `Authorization: ApiKey <key>` header:
//!
//! - [`get_api_key`] parses the header into the raw key
//! - [`AuthenticatedUser`] is an axum extractor that parses the header and
//!   resolves the key to a user through the configured [`UserStore`]
//!
//! ## Usage
//!
//! ```ignore
//! async fn handler(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
//!     Json(user)
//! }
//! ```
//!
//! [`UserStore`]: crate::store::UserStore

mod extractor;
mod header;

pub use extractor::{AuthenticatedUser, generate_api_key};
pub use header::{API_KEY_SCHEME, AuthError, get_api_key};
