//! Change notifications
//!
//! Published by the floor service after every successful mutation so the
//! dashboard can re-render from a fresh snapshot.

pub mod payload;
pub use payload::*;
