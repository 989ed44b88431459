// Task-Modul: Enthält alle Embassy Tasks
//
// Der LED-Task besitzt den LedStrip exklusiv. Die Animationen blockieren,
// daher läuft der Strip in einem eigenen Task.

pub mod led_show;

// Re-export Tasks für einfachen Import
pub use led_show::led_show_task;
