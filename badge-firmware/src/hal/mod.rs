// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus badge-core,
// damit die Animations-Logik auf dem Host getestet werden kann.

pub mod led_writer;

pub use led_writer::RmtStripDriver;
