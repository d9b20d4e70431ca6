//! # sweetshop-entity
//!
//! Domain entity models for the Sweet Shop. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod sweet;
pub mod user;
