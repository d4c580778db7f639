// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ws2812-core
pub use ws2812_core::{LedEffect, LedError, LedStrip, hsv_to_rgb, run_effect};
