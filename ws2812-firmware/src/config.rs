// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Hardware
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
/// Muss zum Peripheral passen, das `main` an den LED-Task übergibt
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

/// RMT Puffer-Größe: 24 Pulse pro LED (3 Farben × 8 Bit) + 1 End-Marker
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// Effekt-Auswahl
// ============================================================================

/// Effekt-Name (off, on, breathe, fade-in, blink-slow, blink-fast, rainbow)
/// Wird zur Build-Zeit aus der Environment Variable LED_EFFECT geladen
/// Default: "breathe"
pub const LED_EFFECT: &str = match option_env!("LED_EFFECT") {
    Some(effect) => effect,
    None => "breathe",
};

/// Effekt-Farbe als Hex (RRGGBB oder #RRGGBB)
/// Wird zur Build-Zeit aus der Environment Variable LED_COLOR geladen
/// Default: Rot
pub const LED_COLOR: &str = match option_env!("LED_COLOR") {
    Some(color) => color,
    None => "FF0000",
};
