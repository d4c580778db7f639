// RMT LED-Strip Treiber
//
// Implementiert den LedStrip Trait aus ws2812-core für das ESP32 RMT
// Peripheral. Pixel werden gepuffert und erst bei refresh() übertragen.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;
use ws2812_core::{LedError, LedStrip};

use crate::config::{LED_BUFFER_SIZE, LED_COUNT};

/// Real Hardware LED Strip
///
/// Nutzt ESP32 RMT Peripheral (Channel 0) um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der RMT-Puffer wird im Task erstellt und als Parameter
/// übergeben statt im Constructor allokiert.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    pixels: [RGB8; LED_COUNT],
}

impl<'a> RmtLedStrip<'a> {
    /// Erstellt einen neuen RmtLedStrip
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InitFailed` zurück wenn RMT nicht konfiguriert werden kann
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self {
            led,
            pixels: [RGB8::default(); LED_COUNT],
        })
    }

    fn transmit(&mut self) -> Result<(), LedError> {
        self.led
            .write(self.pixels)
            .map_err(|_| LedError::WriteFailed)
    }
}

impl LedStrip for RmtLedStrip<'_> {
    fn len(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        let pixel = self.pixels.get_mut(index).ok_or(LedError::InvalidIndex)?;
        *pixel = color;
        Ok(())
    }

    // RMT überträgt blockierend, LED_COUNT × 30 µs liegt weit unter jedem Timeout
    fn refresh(&mut self, _timeout_ms: u32) -> Result<(), LedError> {
        self.transmit()
    }

    fn clear(&mut self, _timeout_ms: u32) -> Result<(), LedError> {
        self.pixels = [RGB8::default(); LED_COUNT];
        self.transmit()
    }
}
