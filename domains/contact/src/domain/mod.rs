//! Domain layer for contact messages

pub mod entities;
