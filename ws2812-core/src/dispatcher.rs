//! Effekt-Dispatcher
//!
//! Löscht den Strip und führt den gewählten Effekt nach seinem
//! [`EffectRun`] Plan aus.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::effects::REFRESH_TIMEOUT_MS;
use crate::traits::{LedError, LedStrip};
use crate::types::{EffectRun, LedEffect};

/// Pause zwischen zwei Durchläufen eines wiederholten Effekts
pub const REPEAT_PAUSE_MS: u32 = 10;

/// Führt `effect` mit `color` auf dem Strip aus
///
/// - `Once`: rendert einmal und gibt `Ok(())` zurück, der Aufrufer hält den Zustand
/// - `Repeating`: rendert endlos mit kurzer Pause dazwischen
/// - `Continuous`: der Renderer selbst läuft endlos
///
/// Kehrt bei den letzten beiden nur mit einem Fehler zurück.
/// Vor dem ersten Pixel-Schreibzugriff wird der Strip immer gelöscht.
pub async fn run_effect<S: LedStrip, D: DelayNs>(
    strip: &mut S,
    delay: &mut D,
    effect: LedEffect,
    color: RGB8,
) -> Result<(), LedError> {
    strip.clear(REFRESH_TIMEOUT_MS)?;

    match effect.run() {
        EffectRun::Once(shot) => shot.render(strip, delay, color).await,
        EffectRun::Repeating(shot) => loop {
            shot.render(strip, delay, color).await?;
            delay.delay_ms(REPEAT_PAUSE_MS).await;
        },
        EffectRun::Continuous(continuous) => {
            let never = continuous.render(strip, delay, color).await?;
            match never {}
        }
    }
}
