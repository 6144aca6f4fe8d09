//! Collaborator seams consumed by the core.
//!
//! Everything non-deterministic or interactive enters through here: the
//! random source, the input prompt, and the observer that receives battle
//! narration for rendering.

pub mod observer;
pub mod prompt;
pub mod rng;

pub use observer::{BattleEvent, BattleObserver};
pub use prompt::{AutoPilot, Prompt, ScriptedPrompt, Selection, choose};
pub use rng::{PcgRng, RandomSource};
