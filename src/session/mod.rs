//! Principal lifecycle between login and logout
//!
//! A [`Principal`](crate::access::Principal) is created at login and
//! destroyed at logout; in between it lives in a [`Session`] keyed by an
//! opaque token. Storage is behind the [`SessionStore`] trait so the
//! in-memory store can be swapped for a shared backend.

mod manager;
mod memory;
mod store;

pub use manager::SessionManager;
pub use memory::MemorySessionStore;
pub use store::{Session, SessionStore};
