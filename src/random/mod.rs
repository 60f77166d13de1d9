//! Random key generation.
//!
//! Keys are convenience material for a pedagogical cipher; the generator
//! is not meant to produce security-critical secrets.

pub mod key_generator;
