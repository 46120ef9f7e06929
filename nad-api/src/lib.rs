//! HTTP client for the NAD amplifier control bridge
//!
//! This crate carries commands to the bridge and hands raw wire replies
//! back. It knows nothing about device state; the `nad-session` crate
//! owns reconciliation and the `nad-codec` crate owns value semantics.

pub mod client;
pub mod error;
pub mod wire;

pub use client::NadClient;
pub use error::{ApiError, Result};
pub use wire::{WireCommand, WireReply};
