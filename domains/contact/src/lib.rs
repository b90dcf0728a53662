//! Contact domain: public contact form and admin inbox

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::ContactMessage;
pub use repository::{ContactRepositories, MessageRepository};

pub use api::routes;
pub use api::ContactState;
