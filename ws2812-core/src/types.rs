//! Core Types für LED-Steuerung
//!
//! Effekt-Auswahl und Ablauf-Plan ohne Hardware-Dependencies

/// LED-Effekt, wird einmal beim Start gewählt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedEffect {
    /// LED aus
    Off,
    /// LED dauerhaft an
    On,
    /// Atmen: hoch- und wieder herunterdimmen
    Breathe,
    /// Langsam aufhellen
    FadeIn,
    /// Langsames Blinken (500 ms)
    BlinkSlow,
    /// Schnelles Blinken (100 ms)
    BlinkFast,
    /// Regenbogen-Lauflicht
    Rainbow,
}

/// Effekte, die nach einem Durchlauf zurückkehren
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    On,
    Off,
    Breathe,
    FadeIn,
}

/// Effekte, die nie zurückkehren (außer mit Fehler)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuous {
    BlinkSlow,
    BlinkFast,
    Rainbow,
}

/// Ablauf-Plan eines Effekts - entscheidet der Dispatcher, nicht der Renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectRun {
    /// Einmal rendern, danach Zustand halten
    Once(OneShot),
    /// Nach jedem Durchlauf erneut rendern
    Repeating(OneShot),
    /// Renderer läuft endlos
    Continuous(Continuous),
}

impl LedEffect {
    /// Alle Effekte in Deklarations-Reihenfolge
    pub const ALL: [LedEffect; 7] = [
        LedEffect::Off,
        LedEffect::On,
        LedEffect::Breathe,
        LedEffect::FadeIn,
        LedEffect::BlinkSlow,
        LedEffect::BlinkFast,
        LedEffect::Rainbow,
    ];

    /// Name wie in der Build-Konfiguration (`LED_EFFECT`)
    pub const fn name(self) -> &'static str {
        match self {
            LedEffect::Off => "off",
            LedEffect::On => "on",
            LedEffect::Breathe => "breathe",
            LedEffect::FadeIn => "fade-in",
            LedEffect::BlinkSlow => "blink-slow",
            LedEffect::BlinkFast => "blink-fast",
            LedEffect::Rainbow => "rainbow",
        }
    }

    /// Ablauf-Plan des Effekts
    ///
    /// Nur Breathe wird wiederholt, On/Off/FadeIn halten ihren Endzustand.
    pub const fn run(self) -> EffectRun {
        match self {
            LedEffect::Off => EffectRun::Once(OneShot::Off),
            LedEffect::On => EffectRun::Once(OneShot::On),
            LedEffect::FadeIn => EffectRun::Once(OneShot::FadeIn),
            LedEffect::Breathe => EffectRun::Repeating(OneShot::Breathe),
            LedEffect::BlinkSlow => EffectRun::Continuous(Continuous::BlinkSlow),
            LedEffect::BlinkFast => EffectRun::Continuous(Continuous::BlinkFast),
            LedEffect::Rainbow => EffectRun::Continuous(Continuous::Rainbow),
        }
    }
}

impl core::convert::TryFrom<&str> for LedEffect {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        LedEffect::ALL
            .into_iter()
            .find(|effect| effect.name().eq_ignore_ascii_case(name.trim()))
            .ok_or(())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedEffect {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LedEffect {{ {} }}", self.name())
    }
}
