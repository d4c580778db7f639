// Hardware Abstraction Layer (HAL) Module
//
// Konkrete Hardware-Implementierungen der Traits aus ws2812-core.
// Mock-Implementierungen für Tests liegen in ws2812-tests.

pub mod led_strip;

pub use led_strip::RmtLedStrip;
