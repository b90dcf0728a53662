//! Domain layer for payments

pub mod entities;
pub mod state;
