// Task-Modul: Enthält alle Embassy Tasks
//
// Aktuell nur der LED-Task; er besitzt den Strip exklusiv.

pub mod led_control;

// Re-export Tasks für einfachen Import
pub use led_control::led_control_task;
