//! Interaction state: selection, hover affordance, and panel visibility.
//!
//! Selection is mutually exclusive (node xor link); selecting one clears the
//! other. Hover transitions never touch global display state directly; the
//! presentation layer hands the core a [`HoverAffordance`] capability and the
//! core invokes it on every transition, so the pointer can never be left
//! stuck in the interactive shape.

use crate::graph::{GraphLink, GraphNode};

/// Capability for signalling that the pointer is over something clickable.
/// Implemented by the presentation layer (e.g. against the document cursor
/// style); the core only calls through it.
pub trait HoverAffordance {
	/// Pointer entered a hoverable node or link.
	fn set_interactive(&self);
	/// Pointer is over empty space; restore the default pointer.
	fn restore_default(&self);
}

/// The current selection, at most one of node or link.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
	#[default]
	None,
	Node(GraphNode),
	Link(GraphLink),
}

impl Selection {
	/// The selected node, if the selection is a node.
	pub fn node(&self) -> Option<&GraphNode> {
		match self {
			Selection::Node(n) => Some(n),
			_ => None,
		}
	}

	/// The selected link, if the selection is a link.
	pub fn link(&self) -> Option<&GraphLink> {
		match self {
			Selection::Link(l) => Some(l),
			_ => None,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Selection::None)
	}
}

/// Selection plus hover tracking. Reset to empty on every fresh data load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	pub selection: Selection,
	hovering: bool,
}

impl InteractionState {
	/// Select a node, clearing any link selection.
	pub fn select_node(&mut self, node: GraphNode) {
		self.selection = Selection::Node(node);
	}

	/// Select a link, clearing any node selection.
	pub fn select_link(&mut self, link: GraphLink) {
		self.selection = Selection::Link(link);
	}

	/// Clear both selections.
	pub fn clear_selection(&mut self) {
		self.selection = Selection::None;
	}

	/// Return to the idle view state on a fresh dataset: no selection, no
	/// hover, default pointer.
	pub fn reset(&mut self, affordance: &dyn HoverAffordance) {
		self.clear_selection();
		self.set_hovering(false, affordance);
	}

	/// Record a hover transition and drive the affordance. Called on every
	/// transition, including a direct hand-off from one hoverable to
	/// another, so the affordance always reflects the latest state.
	pub fn set_hovering(&mut self, hovering: bool, affordance: &dyn HoverAffordance) {
		if hovering {
			affordance.set_interactive();
		} else {
			affordance.restore_default();
		}
		self.hovering = hovering;
	}

	pub fn is_hovering(&self) -> bool {
		self.hovering
	}
}

/// Visibility flags for the chrome panels. Independent booleans with no
/// cross-dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
	/// Filter/controls side panel expanded.
	pub controls_expanded: bool,
	/// Statistics sub-panel shown inside the controls.
	pub show_stats: bool,
	/// Category legend shown.
	pub legend_visible: bool,
}

impl Default for PanelState {
	fn default() -> Self {
		Self {
			controls_expanded: false,
			show_stats: false,
			legend_visible: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use crate::catalog::{Category, ConnectionType};
	use crate::graph::{GraphLink, GraphNode};

	use super::*;

	fn node(id: u32) -> GraphNode {
		GraphNode {
			id,
			name: format!("tool-{id}"),
			description: String::new(),
			category: Category::Other,
			popularity: 50.0,
			connections: 5,
			monthly_users: 0,
			url: "#".to_string(),
			rank: id,
			val: 1.0,
			color: "#6B7280".to_string(),
			possible_connections: Vec::new(),
		}
	}

	fn link() -> GraphLink {
		GraphLink {
			source: 1,
			target: 2,
			strength: 0.5,
			kind: ConnectionType::Functional,
			description: None,
			color: "rgba(255, 255, 255, 0.3)".to_string(),
		}
	}

	/// Records every affordance call so tests can assert on transitions.
	#[derive(Default)]
	struct RecordingAffordance {
		calls: RefCell<Vec<&'static str>>,
	}

	impl HoverAffordance for RecordingAffordance {
		fn set_interactive(&self) {
			self.calls.borrow_mut().push("interactive");
		}

		fn restore_default(&self) {
			self.calls.borrow_mut().push("default");
		}
	}

	#[test]
	fn selection_is_mutually_exclusive() {
		let mut state = InteractionState::default();
		assert!(state.selection.is_none());

		state.select_node(node(1));
		assert!(state.selection.node().is_some());
		assert!(state.selection.link().is_none());

		state.select_link(link());
		assert!(state.selection.node().is_none());
		assert!(state.selection.link().is_some());

		state.select_node(node(2));
		assert_eq!(state.selection.node().map(|n| n.id), Some(2));
		assert!(state.selection.link().is_none());

		state.clear_selection();
		assert!(state.selection.is_none());
	}

	#[test]
	fn hover_transitions_always_drive_the_affordance() {
		let affordance = RecordingAffordance::default();
		let mut state = InteractionState::default();

		state.set_hovering(true, &affordance);
		assert!(state.is_hovering());
		// Hand-off straight from one hoverable to another.
		state.set_hovering(true, &affordance);
		state.set_hovering(false, &affordance);
		assert!(!state.is_hovering());

		assert_eq!(
			*affordance.calls.borrow(),
			vec!["interactive", "interactive", "default"]
		);
	}

	#[test]
	fn fresh_data_reset_clears_selection_and_hover() {
		let affordance = RecordingAffordance::default();
		let mut state = InteractionState::default();
		state.select_node(node(1));
		state.set_hovering(true, &affordance);

		state.reset(&affordance);

		assert!(state.selection.is_none());
		assert!(!state.is_hovering());
		assert_eq!(affordance.calls.borrow().last(), Some(&"default"));
	}

	#[test]
	fn panel_flags_are_independent() {
		let mut panels = PanelState::default();
		assert!(panels.legend_visible);
		assert!(!panels.controls_expanded);

		panels.show_stats = true;
		panels.legend_visible = false;
		assert!(!panels.controls_expanded);

		panels.controls_expanded = true;
		assert!(panels.show_stats);
		assert!(!panels.legend_visible);
	}
}
