//! Filesystem primitives for cljup
//!
//! Locked appends and atomic writes for user-owned files, checksums for
//! downloaded artifacts, and the single-run lock.

pub mod checksum;
pub mod error;
pub mod io;
pub mod lock;
pub mod path;

pub use error::{Error, Result};
pub use lock::RunLock;
pub use path::{expand_home, strip_trailing_components};
