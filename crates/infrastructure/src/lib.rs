//! Ferrous SD Infrastructure Layer
pub mod discovery;
pub mod dns;
