//! # nebula-entity
//!
//! Domain entity models for the NebulaShare client. Every struct in this
//! crate mirrors a wire object served by the backend or a client-side value
//! object derived from one. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize` with the backend's camelCase field names.

pub mod file;
pub mod share;
pub mod user;
