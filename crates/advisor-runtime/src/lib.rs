//! Advisor Runtime: sensor sampling and the re-evaluation loop
//!
//! Collaborators around the engine that need state: the latest sensor
//! readings, one [`Advisor`] per config entry, and the single consumer that
//! turns state-change notifications into published recommendations.
//!
//! # Flow
//!
//! ```text
//! state change ─┐
//!               ├→ mpsc → AdvisorRuntime ─→ StateStore → Advisor::recompute → StatePublisher
//! options ──────┘          (drain batch)
//! ```

pub mod advisor;
pub mod error;
pub mod publish;
pub mod runtime;
pub mod store;

pub use advisor::Advisor;
pub use error::RuntimeError;
pub use publish::{InMemoryPublisher, StatePublisher};
pub use runtime::{AdvisorRuntime, RuntimeHandle, RuntimeMessage, DEFAULT_CAPACITY, DEFAULT_LOCALES_DIR};
pub use store::StateStore;
