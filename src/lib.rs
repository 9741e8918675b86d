//! Cifra - Trace-format enumeration constants and frozen definition namespaces
//!
//! This library publishes the named constants of an OTF2-style trace format
//! as read-only groupings: a prefix-built sentinel namespace, a fixed
//! registry of enumeration categories, and an ordered export manifest for
//! introspection tooling. Everything is constructed once and immutable for
//! the process lifetime.

pub mod cli;
pub mod error;
pub mod json_output;
pub mod namespace;
pub mod native;
pub mod registry;
