//! Phosphor Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040, etc.). This enables the panel driver and
//! application code to run on different hardware platforms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (phosphor-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phosphor-matrix (panel driver)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phosphor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phosphor-hal-rp2040                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The HD-0158 panel bus is write-only - twelve output lines, nothing to
//! read back - so only the output side of GPIO is abstracted here.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
