//! OctaView Frontend
//!
//! eframe/egui application shell: settings bar, viewport render-to-texture,
//! and renderer preferences persistence.

pub mod app;
pub mod preferences;
pub mod viewport;

pub use app::OctaViewApp;
