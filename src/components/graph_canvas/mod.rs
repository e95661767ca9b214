//! Force-directed canvas renderer for the assembled graph.
//!
//! Renders the dataset on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Node and link hit-testing for hover and selection
//!
//! The component is presentation-only: it reports clicks and hover
//! transitions through callbacks and owns no selection state itself.

mod component;
mod render;
mod state;

pub use component::GraphCanvas;
pub use state::HitTarget;
