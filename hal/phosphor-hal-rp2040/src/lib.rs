//! RP2040-specific HAL for the Phosphor sign firmware
//!
//! This crate provides RP2040 implementations of the shared `phosphor-hal`
//! traits on top of embassy-rp GPIO.

#![no_std]

pub mod gpio;

pub use gpio::RpOutputPin;
