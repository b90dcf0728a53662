//! Router-level integration tests
//!
//! Everything except `accounts_db` runs without a database; `accounts_db`
//! needs `TEST_DATABASE_URL` and is `#[ignore]`d by default.

#![allow(dead_code)]

mod accounts_db;
mod admin_gate;
mod auth_flow;
mod common;
mod contact;
