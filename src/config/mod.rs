//! Configuration access subsystem.
//!
//! # Data Flow
//! ```text
//! config.properties (first directory in the search list that has it)
//!     → resource.rs (locate & read)
//!     → properties.rs (parse key/value lines)
//!     → ConfigSnapshot (immutable)
//!     → held by ConfigProvider, shared via Arc
//!
//! On set_properties / reload:
//!     → new ConfigSnapshot built
//!     → atomic swap of the current snapshot
//!     → readers see the old or the new snapshot, never a mix
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable; changes swap a whole snapshot
//! - The resource is read once, on first lookup or an explicit load
//! - Lookups fail fast: absent and blank values are both "not set"

pub mod global;
pub mod properties;
pub mod provider;
pub mod resource;
pub mod snapshot;

pub use provider::ConfigProvider;
pub use resource::{ResourceLocator, RESOURCE_NAME};
pub use snapshot::ConfigSnapshot;
