//! # Domain Models
//!
//! Pure domain types shared by every `PackHub` crate (`serde`, `bitflags`, `strum` only).
//! No I/O, networking, or heavy logic: data and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
pub mod version;
