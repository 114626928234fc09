//! Stashwise — stash advisor engine for a survival-extraction game
//! companion tool.
//!
//! Given an item catalog, a static upgrade tree, a player's progression
//! record, and a stash snapshot, the advisor tells the player per item
//! whether to keep, sell, recycle, or use it, with a reason and a priority.
//! The progression record is the only mutable state; everything downstream
//! is a pure function of it plus the static data.

pub mod shared;
pub mod progression;
pub mod advisor;
pub mod data;
pub mod save;
