// LED Control Task - Steuert den WS2812 Strip über RMT Peripheral
use defmt::{error, info};
use embassy_time::Delay;
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;
use ws2812_core::{LedEffect, LedError, LedStrip, parse_hex_color, run_effect};

use crate::config::{LED_COLOR, LED_COUNT, LED_EFFECT, LED_GPIO_PIN, RMT_CLOCK_MHZ};
use crate::hal::RmtLedStrip;

/// Gewählter Effekt und Farbe aus der Build-Konfiguration
///
/// Gibt `None` zurück (mit Log-Ausgabe) wenn ein Wert ungültig ist.
pub fn selection_from_config() -> Option<(LedEffect, RGB8)> {
    let Ok(effect) = LedEffect::try_from(LED_EFFECT) else {
        error!("Unknown LED_EFFECT: {}", LED_EFFECT);
        return None;
    };
    let Some(color) = parse_hex_color(LED_COLOR) else {
        error!("Invalid LED_COLOR: {}", LED_COLOR);
        return None;
    };
    Some((effect, color))
}

/// LED Control Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Führt den Effekt über den Dispatcher aus. Kehrt nur zurück, wenn
/// ein einmaliger Effekt fertig ist (`Ok`) oder der Treiber einen
/// Fehler meldet (`Err`).
///
/// # Parameter
/// - `strip`: LED Strip (Hardware oder Mock)
/// - `effect`: Gewählter Effekt
/// - `color`: Effekt-Farbe (Regenbogen ignoriert sie)
pub async fn led_control_logic<S: LedStrip>(
    strip: &mut S,
    effect: LedEffect,
    color: RGB8,
) -> Result<(), LedError> {
    info!(
        "LED: starting {} with rgb ({}, {}, {}) on {} pixel(s)",
        effect,
        color.r,
        color.g,
        color.b,
        strip.len()
    );

    // Async Delay: gibt CPU an andere Tasks zurück
    let mut delay = Delay;
    run_effect(strip, &mut delay, effect, color).await
}

/// LED Control Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// `led_control_logic()` auf. Ungültige Konfiguration oder fehlgeschlagene
/// Initialisierung verhindern den Start; Treiberfehler im Betrieb sind fatal.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn led_control_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    let Some((effect, color)) = selection_from_config() else {
        error!("LED: invalid configuration, task not started");
        return;
    };

    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware initialisieren: RmtLedStrip kapselt RMT + SmartLED
    let mut strip = match RmtLedStrip::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(strip) => strip,
        Err(e) => {
            error!("LED: install WS2812 driver on GPIO{} failed: {}", LED_GPIO_PIN, e);
            return;
        }
    };
    info!("LED: WS2812 driver ready on GPIO{}", LED_GPIO_PIN);

    match led_control_logic(&mut strip, effect, color).await {
        Ok(()) => {
            info!("LED: {} done, holding state", effect);
            // Strip bleibt im Besitz des Tasks, LED hält den letzten Wert
            core::future::pending::<()>().await;
        }
        Err(e) => {
            // Jeder Treiberfehler ist fatal → esp-backtrace hält das System an
            defmt::panic!("LED: driver call failed: {}", e);
        }
    }
}
