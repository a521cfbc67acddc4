//! `gestmat-requests` — material request records.

pub mod request;

pub use request::MaterialRequest;
