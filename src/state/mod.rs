//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so individual components can
//! depend on small focused models; each is provided as an `RwSignal`
//! context from the app root. The route guard lives here too since its
//! decision is a pure function of auth state.

pub mod auth;
pub mod guard;
pub mod toast;
