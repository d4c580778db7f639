//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Hardware-Aufruf (Übertragung an den Strip) fehlgeschlagen
    WriteFailed,
    /// Pixel-Index liegt außerhalb des Strips
    InvalidIndex,
    /// Peripheral konnte nicht konfiguriert werden
    InitFailed,
}

/// Trait für einen adressierbaren LED-Strip (WS2812/Neopixel)
///
/// `set_pixel` schreibt nur in den Puffer, erst `refresh` überträgt
/// die Werte an die Hardware.
///
/// # Implementierungen
/// - **Production:** RmtLedStrip (ESP32 RMT Peripheral)
/// - **Testing:** MockLedStrip (in-memory Mock)
pub trait LedStrip: Send {
    /// Anzahl der Pixel im Strip
    fn len(&self) -> usize;

    /// `true` wenn der Strip keine Pixel hat
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Setzt die Farbe eines Pixels im Puffer
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidIndex` zurück wenn `index >= len()`
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError>;

    /// Überträgt den Puffer an die LEDs
    ///
    /// `timeout_ms` begrenzt, wie lange die Übertragung blockieren darf.
    fn refresh(&mut self, timeout_ms: u32) -> Result<(), LedError>;

    /// Setzt alle Pixel auf Schwarz und überträgt sofort
    fn clear(&mut self, timeout_ms: u32) -> Result<(), LedError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::InvalidIndex => defmt::write!(fmt, "InvalidIndex"),
            LedError::InitFailed => defmt::write!(fmt, "InitFailed"),
        }
    }
}
