//! Modular dashboard implementation
//!
//! Presentation-only state and the panel renderers

pub mod components;
pub mod renderer;
pub mod state;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
