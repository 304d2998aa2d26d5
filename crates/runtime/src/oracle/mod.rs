//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `game-core` oracle traits. The data is
//! immutable at runtime; dynamic state lives in the slot store and the
//! snapshot repositories.
mod catalog;

pub use catalog::CatalogOracleImpl;
