//! UI components: the universe shell, canvas renderer, and chrome panels.

pub mod controls;
pub mod details;
pub mod graph_canvas;
pub mod legend;
pub mod universe;

use crate::view::HoverAffordance;

/// Hover affordance backed by the document body cursor style.
pub struct DocumentCursor;

impl HoverAffordance for DocumentCursor {
	fn set_interactive(&self) {
		set_body_cursor("pointer");
	}

	fn restore_default(&self) {
		set_body_cursor("default");
	}
}

fn set_body_cursor(value: &str) {
	if let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	{
		let _ = body.style().set_property("cursor", value);
	}
}
