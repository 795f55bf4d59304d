//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config subsystem produces:
//!     → tracing events (load, replace, load failure)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;
