//! Catalog records to renderer contract.

use std::collections::HashMap;

use crate::catalog::{Catalog, node_size};

use super::types::{GraphData, GraphLink, GraphNode, PossibleConnection};

/// Placeholder endpoint name for a synergy referencing a missing tool id.
const UNKNOWN_ENDPOINT: &str = "Unknown";

/// How link colors are derived. Catalog data uses the type palette; remote
/// data historically shipped a single translucent white. Kept selectable per
/// data source rather than silently unified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkColorStrategy {
	/// Per-type palette from [`crate::catalog::ConnectionType::color`].
	#[default]
	ByType,
	/// One fixed translucent white for every link.
	Uniform,
}

/// Fixed link color used by [`LinkColorStrategy::Uniform`].
pub(crate) const UNIFORM_LINK_COLOR: &str = "rgba(255, 255, 255, 0.3)";

/// Assemble the rendering contract from a catalog, with type-derived link
/// colors.
pub fn assemble(catalog: &Catalog) -> GraphData {
	assemble_with(catalog, LinkColorStrategy::ByType)
}

/// Assemble with an explicit link color strategy.
///
/// Pure and deterministic: node order follows tool order, link order follows
/// synergy order, and each node's `possible_connections` preserves synergy
/// declaration order.
pub fn assemble_with(catalog: &Catalog, link_colors: LinkColorStrategy) -> GraphData {
	let names: HashMap<u32, &str> = catalog
		.tools
		.iter()
		.map(|t| (t.id, t.name.as_str()))
		.collect();

	let nodes = catalog
		.tools
		.iter()
		.map(|tool| {
			let possible_connections = catalog
				.synergies
				.iter()
				.filter(|s| s.source == tool.id || s.target == tool.id)
				.map(|s| {
					let other = if s.source == tool.id { s.target } else { s.source };
					PossibleConnection {
						id: other,
						name: names
							.get(&other)
							.map_or_else(|| UNKNOWN_ENDPOINT.to_string(), |n| (*n).to_string()),
						kind: s.kind,
						description: s.description.clone(),
					}
				})
				.collect();

			GraphNode {
				id: tool.id,
				name: tool.name.clone(),
				description: tool.description.clone(),
				category: tool.category,
				popularity: tool.popularity,
				connections: tool.connections,
				monthly_users: tool.monthly_users,
				url: tool.url.clone(),
				rank: tool.rank,
				val: node_size(tool.popularity, tool.connections).max(1.0),
				color: tool.category.color().to_string(),
				possible_connections,
			}
		})
		.collect();

	let links = catalog
		.synergies
		.iter()
		.map(|s| GraphLink {
			source: s.source,
			target: s.target,
			strength: s.strength,
			kind: s.kind,
			description: s.description.clone(),
			color: match link_colors {
				LinkColorStrategy::ByType => s.kind.color().to_string(),
				LinkColorStrategy::Uniform => UNIFORM_LINK_COLOR.to_string(),
			},
		})
		.collect();

	GraphData { nodes, links }
}
