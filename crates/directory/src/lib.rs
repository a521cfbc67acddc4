//! `gestmat-directory` — organisational units of the mairie.

pub mod direction;

pub use direction::Direction;
