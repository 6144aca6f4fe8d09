//! Stat model.
//!
//! ```text
//! [ Base Stats (stored) ] + [ Σ Equipment Bonus ] → [ Effective Stats (computed) ]
//! ```
//!
//! Only base stats are stored. Effective stats are recomputed from the
//! outfit every time they are read.

pub mod bonus;
pub mod core;

pub use bonus::StatBonus;
pub use self::core::{StatChanges, Stats};
