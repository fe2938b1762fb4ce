//! Credential authentication core.
//!
//! Resolves a user record through a repository port and checks the supplied
//! password against the stored one, producing an `Authentication` on success.
//! Adapters implement the repository port; an in-memory implementation ships
//! for tests and examples.
//!
//! The stored password is compared by exact string equality. Hashing and
//! timing-safe comparison are left to a hardened deployment.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use auth_service::domain::auth::models::{User, UserId};
//! use auth_service::domain::auth::ports::AuthServicePort;
//! use auth_service::domain::auth::service::AuthService;
//! use auth_service::outbound::repositories::user::InMemoryUserRepository;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repository = InMemoryUserRepository::new();
//! repository
//!     .insert(User::new(
//!         UserId::new("alice".to_string()).unwrap(),
//!         "secret".to_string(),
//!     ))
//!     .await;
//!
//! let service = AuthService::new(Arc::new(repository));
//!
//! let auth = service.authenticate("alice", "secret").await.unwrap();
//! assert_eq!(auth.id().as_str(), "alice");
//!
//! assert!(service.authenticate("alice", "guess").await.is_err());
//! # }
//! ```

pub mod domain;
pub mod outbound;

pub use domain::auth;
pub use outbound::repositories;
