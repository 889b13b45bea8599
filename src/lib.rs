//! catalogd - an in-memory product catalog service
//!
//! CRUD over product records behind a REST API, with category filtering,
//! name search, pagination, category statistics, and an API-key gate on
//! mutating operations.

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
