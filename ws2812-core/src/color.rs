//! Farb-Logik ohne Hardware-Dependencies
//!
//! HSV → RGB Konvertierung, lineare Helligkeits-Skalierung und
//! Parsen von Hex-Farben aus der Build-Konfiguration.

use rgb::RGB8;

/// Konvertiert einen HSV-Farbwert in RGB (Hexagon-Modell)
///
/// - `hue`: Farbton in Grad, wird modulo 360 genommen
/// - `saturation`: Sättigung in Prozent (0-100, größere Werte → 100)
/// - `value`: Helligkeit in Prozent (0-100, größere Werte → 100)
///
/// Ganzzahl-Arithmetik, Nachkommastellen werden abgeschnitten.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use ws2812_core::hsv_to_rgb;
/// assert_eq!(hsv_to_rgb(0, 100, 100), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(hsv_to_rgb(480, 100, 100), RGB8 { r: 0, g: 255, b: 0 });
/// ```
pub fn hsv_to_rgb(hue: u32, saturation: u32, value: u32) -> RGB8 {
    let hue = hue % 360;
    let saturation = saturation.min(100);
    let value = value.min(100);

    let max = value * 255 / 100;
    let min = max * (100 - saturation) / 100;

    let sector = hue / 60;
    let offset = hue % 60;

    // Anpassung innerhalb des 60°-Sektors
    let adj = (max - min) * offset / 60;

    let (r, g, b) = match sector {
        0 => (max, min + adj, min),
        1 => (max - adj, max, min),
        2 => (min, max, min + adj),
        3 => (min, max - adj, max),
        4 => (min + adj, min, max),
        _ => (max, min, max - adj),
    };

    // max <= 255, alle Kanäle liegen in [min, max]
    RGB8 {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}

/// Skaliert jeden Kanal linear mit `level / 255`
///
/// `level = 255` lässt die Farbe unverändert, `level = 0` ergibt Schwarz.
pub fn scale(color: RGB8, level: u8) -> RGB8 {
    let channel = |c: u8| (u16::from(c) * u16::from(level) / 255) as u8;
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Parst eine Hex-Farbe im Format `RRGGBB` oder `#RRGGBB`
///
/// Groß-/Kleinschreibung egal. Gibt `None` bei ungültiger Eingabe.
pub fn parse_hex_color(text: &str) -> Option<RGB8> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    Some(RGB8 {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primary_colors() {
        assert_eq!(hsv_to_rgb(0, 100, 100), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120, 100, 100), RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240, 100, 100), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hsv_secondary_colors() {
        assert_eq!(hsv_to_rgb(60, 100, 100), RGB8 { r: 255, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(180, 100, 100), RGB8 { r: 0, g: 255, b: 255 });
        assert_eq!(hsv_to_rgb(300, 100, 100), RGB8 { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn test_hsv_mid_sector() {
        // Sektor 0, halber Weg: g = 255 * 30 / 60
        assert_eq!(hsv_to_rgb(30, 100, 100), RGB8 { r: 255, g: 127, b: 0 });
        // Sektor 5 (Fallback-Zweig)
        assert_eq!(hsv_to_rgb(330, 100, 100), RGB8 { r: 255, g: 0, b: 128 });
    }

    #[test]
    fn test_hsv_black_when_value_zero() {
        assert_eq!(hsv_to_rgb(200, 100, 0), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_hsv_clamps_out_of_range_percent() {
        assert_eq!(hsv_to_rgb(0, 250, 999), hsv_to_rgb(0, 100, 100));
    }

    #[test]
    fn test_scale_endpoints() {
        let color = RGB8 { r: 200, g: 100, b: 1 };
        assert_eq!(scale(color, 255), color);
        assert_eq!(scale(color, 0), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(scale(color, 128), RGB8 { r: 100, g: 50, b: 0 });
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("FF0000"), Some(RGB8 { r: 255, g: 0, b: 0 }));
        assert_eq!(parse_hex_color("#00ff7f"), Some(RGB8 { r: 0, g: 255, b: 127 }));
        assert_eq!(parse_hex_color("FF00"), None);
        assert_eq!(parse_hex_color("GG0000"), None);
        assert_eq!(parse_hex_color("#ÄÄ00"), None);
    }
}
