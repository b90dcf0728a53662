//! HTTP handlers for the Contact domain

pub mod messages;
