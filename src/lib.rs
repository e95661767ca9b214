//! ai-universe: interactive force-directed explorer for the AI tool landscape.
//!
//! This crate renders a graph of AI tools and their synergies on an HTML
//! canvas, with client-side filtering, selection details, and a remote data
//! source that falls back to a built-in catalog when unavailable.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod catalog;
pub mod components;
pub mod filter;
pub mod graph;
pub mod source;
pub mod view;

pub use components::universe::AiUniverse;
pub use graph::{GraphData, GraphLink, GraphNode};
pub use source::SourceConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ai-universe: logging initialized");
}

/// Build the source configuration from the page URL. `?api=true` switches
/// the resolver into API mode.
fn source_config_from_location() -> SourceConfig {
	let mut config = SourceConfig::default();
	if let Some(window) = web_sys::window() {
		if let Ok(search) = window.location().search() {
			config.api_mode = search.contains("api=true");
		}
	}
	config
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = source_config_from_location();
	info!(
		"ai-universe: starting in {} mode",
		if config.api_mode { "api" } else { "direct" }
	);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="AI Universe" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AiUniverse config=config />
	}
}
