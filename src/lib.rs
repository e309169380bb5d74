//! Core library for the QOTD service.
//!
//! This crate exposes the domain types, persistence layer, query/rotation
//! services, webhook notifier, daily scheduler and HTTP routes used by the
//! quote-of-the-day web application.

pub mod db;
pub mod domain;
pub mod models;
pub mod notifier;
pub mod repository;
pub mod routes;
pub mod scheduler;
pub mod schema;
pub mod services;
