//! Cortex TUI - terminal presentation of the Cortex AI Platform
//!
//! Six pages behind a navigation bar:
//! - Home, with headline stats and feature cards
//! - Architecture, with a clickable component diagram and details panel
//! - Security, with layered controls and compliance status
//! - CI/CD, with an expandable pipeline stage list
//! - Monitoring, with a metric category selector
//! - Implementation, with tabbed code examples and copy-to-clipboard
//!
//! Narrow terminals collapse the navigation links into a drawer.

pub mod app;
pub mod clipboard;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};
