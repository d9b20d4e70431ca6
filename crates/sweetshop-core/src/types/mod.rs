//! Core type definitions used across the Sweet Shop workspace.

pub mod id;

pub use id::*;
