//! Remote API record shapes and their normalization into catalog form.
//!
//! The API is treated as optional and unreliable: every field beyond the id
//! and name may be absent, and absent fields take the documented defaults.
//! Normalized records run through the shared assembler so remote data obeys
//! the same invariants as the built-in catalog.

use serde::Deserialize;

use crate::catalog::{Catalog, Category, ConnectionType, Synergy, Tool};

/// Record count requested by the direct-mode probe.
pub const PROBE_LIMIT: u32 = 5;

/// Minimum probe node count for the remote source to be preferred over the
/// built-in catalog.
pub const PROBE_MIN_NODES: usize = 50;

/// Node limit for the full fetch.
pub const NODE_LIMIT: u32 = 100;

/// Edge limit for the full fetch.
pub const EDGE_LIMIT: u32 = 200;

/// Minimum time the loading state stays visible when falling back, so the
/// transition is perceptible rather than a flash.
pub const FALLBACK_DELAY_MS: i32 = 500;

const DEFAULT_DESCRIPTION: &str = "AI Tool";
const DEFAULT_POPULARITY: f64 = 50.0;
const DEFAULT_CONNECTIONS: u32 = 5;
const DEFAULT_MONTHLY_USERS: u64 = 100_000;
const DEFAULT_URL: &str = "#";
const DEFAULT_STRENGTH: f64 = 0.5;

/// `GET /graph/nodes` response body.
#[derive(Debug, Deserialize)]
pub struct RemoteNodes {
	pub nodes: Vec<RemoteNode>,
}

/// One node as the API reports it.
#[derive(Debug, Deserialize)]
pub struct RemoteNode {
	pub id: u32,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub macro_domain: Option<String>,
	#[serde(default)]
	pub popularity: Option<f64>,
	#[serde(default)]
	pub degree: Option<u32>,
	#[serde(default)]
	pub monthly_users: Option<u64>,
	#[serde(default)]
	pub url: Option<String>,
}

/// `GET /graph/edges` response body.
#[derive(Debug, Deserialize)]
pub struct RemoteEdges {
	pub edges: Vec<RemoteEdge>,
}

/// One edge as the API reports it.
#[derive(Debug, Deserialize)]
pub struct RemoteEdge {
	pub tool_id_1: u32,
	pub tool_id_2: u32,
	#[serde(default)]
	pub strength: Option<f64>,
	#[serde(default)]
	pub edge_type: Option<String>,
}

/// Normalize remote records into catalog form.
///
/// `rank` is assigned as the 1-based position in the response order; the API
/// has no rank field of its own. Unrecognized `macro_domain`/`edge_type`
/// values degrade to `OTHER`/`functional` instead of failing the load.
pub fn normalize(nodes: Vec<RemoteNode>, edges: Vec<RemoteEdge>) -> Catalog {
	let tools = nodes
		.into_iter()
		.enumerate()
		.map(|(index, node)| Tool {
			id: node.id,
			name: node.name,
			description: node
				.description
				.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
			category: node
				.macro_domain
				.as_deref()
				.and_then(Category::parse)
				.unwrap_or(Category::Other),
			popularity: node.popularity.unwrap_or(DEFAULT_POPULARITY),
			connections: node.degree.unwrap_or(DEFAULT_CONNECTIONS),
			monthly_users: node.monthly_users.unwrap_or(DEFAULT_MONTHLY_USERS),
			url: node.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
			rank: index as u32 + 1,
		})
		.collect();

	let synergies = edges
		.into_iter()
		.map(|edge| Synergy {
			source: edge.tool_id_1,
			target: edge.tool_id_2,
			strength: edge.strength.unwrap_or(DEFAULT_STRENGTH),
			kind: edge
				.edge_type
				.as_deref()
				.and_then(ConnectionType::parse)
				.unwrap_or(ConnectionType::Functional),
			description: None,
		})
		.collect();

	Catalog { tools, synergies }
}

#[cfg(test)]
mod tests {
	use crate::graph::{LinkColorStrategy, assemble_with};

	use super::*;

	fn bare_node(id: u32, name: &str) -> RemoteNode {
		RemoteNode {
			id,
			name: name.to_string(),
			description: None,
			macro_domain: None,
			popularity: None,
			degree: None,
			monthly_users: None,
			url: None,
		}
	}

	#[test]
	fn absent_fields_take_documented_defaults() {
		let catalog = normalize(vec![bare_node(7, "Mystery")], Vec::new());
		let tool = &catalog.tools[0];
		assert_eq!(tool.description, "AI Tool");
		assert_eq!(tool.category, Category::Other);
		assert_eq!(tool.popularity, 50.0);
		assert_eq!(tool.connections, 5);
		assert_eq!(tool.monthly_users, 100_000);
		assert_eq!(tool.url, "#");
	}

	#[test]
	fn rank_is_response_position_not_a_remote_field() {
		let catalog = normalize(
			vec![bare_node(40, "c"), bare_node(2, "a"), bare_node(9, "b")],
			Vec::new(),
		);
		let ranks: Vec<u32> = catalog.tools.iter().map(|t| t.rank).collect();
		assert_eq!(ranks, vec![1, 2, 3]);
	}

	#[test]
	fn unknown_enum_values_degrade_to_defaults() {
		let mut node = bare_node(1, "x");
		node.macro_domain = Some("ROBOTICS".to_string());
		let edge = RemoteEdge {
			tool_id_1: 1,
			tool_id_2: 1,
			strength: None,
			edge_type: Some("mystery".to_string()),
		};
		let catalog = normalize(vec![node], vec![edge]);
		assert_eq!(catalog.tools[0].category, Category::Other);
		assert_eq!(catalog.synergies[0].kind, ConnectionType::Functional);
		assert_eq!(catalog.synergies[0].strength, 0.5);
	}

	#[test]
	fn known_macro_domains_map_through() {
		let mut node = bare_node(1, "x");
		node.macro_domain = Some("COMPUTER_VISION".to_string());
		node.popularity = Some(77.0);
		node.degree = Some(12);
		let catalog = normalize(vec![node], Vec::new());
		assert_eq!(catalog.tools[0].category, Category::ComputerVision);
		assert_eq!(catalog.tools[0].popularity, 77.0);
		assert_eq!(catalog.tools[0].connections, 12);
	}

	#[test]
	fn remote_links_use_the_uniform_color() {
		let catalog = normalize(
			vec![bare_node(1, "a"), bare_node(2, "b")],
			vec![RemoteEdge {
				tool_id_1: 1,
				tool_id_2: 2,
				strength: Some(0.8),
				edge_type: Some("complementary".to_string()),
			}],
		);
		let data = assemble_with(&catalog, LinkColorStrategy::Uniform);
		assert_eq!(data.links[0].color, "rgba(255, 255, 255, 0.3)");
		assert_eq!(data.links[0].kind, ConnectionType::Complementary);
		// The shared assembler still builds possible connections.
		assert_eq!(data.nodes[0].possible_connections.len(), 1);
		assert_eq!(data.nodes[0].possible_connections[0].name, "b");
	}

	#[test]
	fn response_bodies_parse_from_json() {
		let nodes: RemoteNodes = serde_json::from_str(
			r#"{"nodes": [{"id": 1, "name": "ChatGPT", "macro_domain": "NLP", "degree": 3}]}"#,
		)
		.unwrap();
		assert_eq!(nodes.nodes.len(), 1);
		assert_eq!(nodes.nodes[0].degree, Some(3));

		let edges: RemoteEdges =
			serde_json::from_str(r#"{"edges": [{"tool_id_1": 1, "tool_id_2": 2}]}"#).unwrap();
		assert_eq!(edges.edges[0].tool_id_2, 2);
		assert!(edges.edges[0].edge_type.is_none());
	}
}
