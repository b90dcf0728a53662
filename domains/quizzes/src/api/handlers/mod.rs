//! HTTP handlers for the Quiz domain

pub mod submissions;
