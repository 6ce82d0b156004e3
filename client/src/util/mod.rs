//! Small helpers shared across pages and components.

pub mod confirm;
pub mod format;
pub mod guard;
pub mod storage;
