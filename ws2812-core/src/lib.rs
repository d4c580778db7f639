//! WS2812 Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Farb-Logik, Effekte und den Strip-Trait.

#![no_std]

pub mod color;
pub mod dispatcher;
pub mod effects;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use color::{hsv_to_rgb, parse_hex_color, scale};
pub use dispatcher::run_effect;
pub use traits::{LedError, LedStrip};
pub use types::{Continuous, EffectRun, LedEffect, OneShot};
