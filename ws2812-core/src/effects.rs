//! Effekt-Renderer
//!
//! Jeder Renderer schreibt über den [`LedStrip`] Trait und taktet sich
//! selbst über einen async Delay. Fehler des Treibers werden sofort
//! weitergereicht, es gibt keinen Retry.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::color::{hsv_to_rgb, scale};
use crate::traits::{LedError, LedStrip};
use crate::types::{Continuous, OneShot};

/// Timeout für refresh/clear in Millisekunden
pub const REFRESH_TIMEOUT_MS: u32 = 100;

/// Pause pro Helligkeitsstufe beim Atmen (256 Stufen × 2 ≈ 5,12 s)
pub const BREATHE_STEP_MS: u32 = 10;

/// Pause pro Helligkeitsstufe beim Aufhellen (256 Stufen ≈ 5,12 s)
pub const FADE_IN_STEP_MS: u32 = 20;

pub const BLINK_SLOW_MS: u32 = 500;
pub const BLINK_FAST_MS: u32 = 100;

/// Pause nach jedem der drei Regenbogen-Durchgänge
pub const RAINBOW_PASS_MS: u32 = 80;

/// Pause nach einer vollen Regenbogen-Rotation
pub const RAINBOW_ROTATE_MS: u32 = 100;

/// Farbton-Vorschub pro Rotation in Grad
pub const RAINBOW_HUE_STEP: u32 = 60;

/// Anzahl der verschränkten Pixel-Gruppen (index % 3)
const RAINBOW_GROUPS: usize = 3;

/// Setzt Pixel 0 auf `color` und überträgt
pub fn on<S: LedStrip>(strip: &mut S, color: RGB8) -> Result<(), LedError> {
    strip.set_pixel(0, color)?;
    strip.refresh(REFRESH_TIMEOUT_MS)
}

/// Schaltet alle Pixel aus
pub fn off<S: LedStrip>(strip: &mut S) -> Result<(), LedError> {
    strip.clear(REFRESH_TIMEOUT_MS)
}

/// Schreibt eine Helligkeitsstufe und wartet `step_ms`
async fn ramp_step<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
    color: RGB8,
    level: u8,
    step_ms: u32,
) -> Result<(), LedError> {
    strip.set_pixel(0, scale(color, level))?;
    strip.refresh(REFRESH_TIMEOUT_MS)?;
    delay.delay_ms(step_ms).await;
    Ok(())
}

/// Ein Atem-Zyklus: 0 → 255 → 0 in linearen Stufen
pub async fn breathe<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
    color: RGB8,
) -> Result<(), LedError> {
    for level in 0..=u8::MAX {
        ramp_step(strip, delay, color, level, BREATHE_STEP_MS).await?;
    }
    for level in (0..=u8::MAX).rev() {
        ramp_step(strip, delay, color, level, BREATHE_STEP_MS).await?;
    }
    Ok(())
}

/// Hellt von 0 auf volle Helligkeit auf
pub async fn fade_in<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
    color: RGB8,
) -> Result<(), LedError> {
    for level in 0..=u8::MAX {
        ramp_step(strip, delay, color, level, FADE_IN_STEP_MS).await?;
    }
    Ok(())
}

/// Blinkt endlos mit `dwell_ms` an und `dwell_ms` aus
pub async fn blink<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
    color: RGB8,
    dwell_ms: u32,
) -> Result<Infallible, LedError> {
    loop {
        on(strip, color)?;
        delay.delay_ms(dwell_ms).await;
        off(strip)?;
        delay.delay_ms(dwell_ms).await;
    }
}

/// Farbton eines Pixels im Regenbogen
///
/// `index * 360 / count + rotation`, das Ergebnis wird von
/// [`hsv_to_rgb`] modulo 360 genommen.
pub fn rainbow_hue(index: usize, count: usize, rotation: u32) -> u32 {
    if count == 0 {
        return rotation;
    }
    (index * 360 / count) as u32 + rotation
}

/// Regenbogen-Lauflicht über den ganzen Strip
///
/// Drei Durchgänge pro Rotation, jeder schreibt nur die Pixel mit
/// `index % 3 == pass`. Danach rückt der Farbton um 60° weiter.
pub async fn rainbow_chase<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
) -> Result<Infallible, LedError> {
    let count = strip.len();
    let mut rotation = 0;

    loop {
        for pass in 0..RAINBOW_GROUPS {
            for index in (pass..count).step_by(RAINBOW_GROUPS) {
                let hue = rainbow_hue(index, count, rotation);
                strip.set_pixel(index, hsv_to_rgb(hue, 100, 100))?;
            }
            strip.refresh(REFRESH_TIMEOUT_MS)?;
            delay.delay_ms(RAINBOW_PASS_MS).await;
        }
        rotation = (rotation + RAINBOW_HUE_STEP) % 360;
        delay.delay_ms(RAINBOW_ROTATE_MS).await;
    }
}

impl OneShot {
    /// Rendert einen Durchlauf des Effekts
    pub async fn render<S: LedStrip, D: DelayNs>(
        self,
        strip: &mut S,
        delay: &mut D,
        color: RGB8,
    ) -> Result<(), LedError> {
        match self {
            OneShot::On => on(strip, color),
            OneShot::Off => off(strip),
            OneShot::Breathe => breathe(strip, delay, color).await,
            OneShot::FadeIn => fade_in(strip, delay, color).await,
        }
    }
}

impl Continuous {
    /// Rendert den Effekt endlos, kehrt nur mit Fehler zurück
    pub async fn render<S: LedStrip, D: DelayNs>(
        self,
        strip: &mut S,
        delay: &mut D,
        color: RGB8,
    ) -> Result<Infallible, LedError> {
        match self {
            Continuous::BlinkSlow => blink(strip, delay, color, BLINK_SLOW_MS).await,
            Continuous::BlinkFast => blink(strip, delay, color, BLINK_FAST_MS).await,
            Continuous::Rainbow => rainbow_chase(strip, delay).await,
        }
    }
}
