//! Accounts domain layer: entities, subscription lifecycle, password hashing

pub mod entities;
pub mod password;
pub mod state;
