//! Project-wide exports for easy access.

pub use crate::settings::*;
pub use crate::util::*;
pub use atomic_float::AtomicF64;
pub use log::{debug, info};
