//! Node and link shapes consumed by the graph renderer.

use crate::catalog::{Category, ConnectionType};

/// One entry in a node's precomputed connection list: the other endpoint of
/// a synergy touching the node.
#[derive(Clone, Debug, PartialEq)]
pub struct PossibleConnection {
	/// Id of the other endpoint.
	pub id: u32,
	/// Name of the other endpoint, or `"Unknown"` for a dangling reference.
	pub name: String,
	pub kind: ConnectionType,
	pub description: Option<String>,
}

/// A renderable node: every tool field plus derived visual attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: u32,
	pub name: String,
	pub description: String,
	pub category: Category,
	pub popularity: f64,
	/// Degree hint carried through from the tool record; may legitimately
	/// differ from `possible_connections.len()`.
	pub connections: u32,
	pub monthly_users: u64,
	pub url: String,
	pub rank: u32,
	/// Visual size, always >= 1.
	pub val: f64,
	/// Hex color derived from the category.
	pub color: String,
	/// One entry per synergy touching this node, in synergy declaration order.
	pub possible_connections: Vec<PossibleConnection>,
}

/// A renderable link. `source`/`target` are tool ids; the renderer resolves
/// them against the node set.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: u32,
	pub target: u32,
	pub strength: f64,
	pub kind: ConnectionType,
	pub description: Option<String>,
	pub color: String,
}

/// The complete dataset handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
