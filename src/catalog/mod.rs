//! Static reference dataset of AI tools and their synergies.
//!
//! The catalog is immutable, built once at startup, and injected by reference
//! into the assembler and the data source resolver. It also owns the pure
//! derivation functions: node sizing and the category / connection-type color
//! palettes, including their fallback behavior for unrecognized values.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

mod data;

/// Neutral gray returned for any category string outside the enumerated set.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6B7280";

/// Translucent neutral gray for unrecognized connection types.
pub const FALLBACK_CONNECTION_COLOR: &str = "rgba(156, 163, 175, 0.4)";

/// Classification of a tool. Mirrors the `macro_domain` values the remote
/// API reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
	Nlp,
	ComputerVision,
	Coding,
	Other,
	Audio,
	Video,
	Productivity,
	Business,
}

impl Category {
	/// All categories, in legend order.
	pub const ALL: [Category; 8] = [
		Category::Nlp,
		Category::ComputerVision,
		Category::Coding,
		Category::Other,
		Category::Audio,
		Category::Video,
		Category::Productivity,
		Category::Business,
	];

	/// The wire/display identifier (e.g. `COMPUTER_VISION`).
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Nlp => "NLP",
			Category::ComputerVision => "COMPUTER_VISION",
			Category::Coding => "CODING",
			Category::Other => "OTHER",
			Category::Audio => "AUDIO",
			Category::Video => "VIDEO",
			Category::Productivity => "PRODUCTIVITY",
			Category::Business => "BUSINESS",
		}
	}

	/// Human-readable legend label.
	pub fn label(self) -> &'static str {
		match self {
			Category::Nlp => "Natural Language Processing",
			Category::ComputerVision => "Computer Vision",
			Category::Coding => "Coding & Development",
			Category::Other => "Other AI Tools",
			Category::Audio => "Audio & Music",
			Category::Video => "Video & Animation",
			Category::Productivity => "Productivity",
			Category::Business => "Business & Marketing",
		}
	}

	/// Fixed palette color for this category.
	pub fn color(self) -> &'static str {
		match self {
			Category::Nlp => "#4F46E5",
			Category::ComputerVision => "#DC2626",
			Category::Coding => "#059669",
			Category::Other => "#7C3AED",
			Category::Audio => "#EA580C",
			Category::Video => "#DB2777",
			Category::Productivity => "#2563EB",
			Category::Business => "#0891B2",
		}
	}

	/// Parse a wire identifier. `None` for anything outside the enumerated set.
	pub fn parse(s: &str) -> Option<Self> {
		Category::ALL.into_iter().find(|c| c.as_str() == s)
	}
}

/// Color for an arbitrary category string, degrading to
/// [`FALLBACK_CATEGORY_COLOR`] instead of failing.
pub fn category_color(name: &str) -> &'static str {
	Category::parse(name).map_or(FALLBACK_CATEGORY_COLOR, Category::color)
}

/// The nature of a synergy between two tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
	Complementary,
	Competitive,
	Functional,
	Workflow,
}

impl ConnectionType {
	/// Wire/display identifier (lowercase).
	pub fn as_str(self) -> &'static str {
		match self {
			ConnectionType::Complementary => "complementary",
			ConnectionType::Competitive => "competitive",
			ConnectionType::Functional => "functional",
			ConnectionType::Workflow => "workflow",
		}
	}

	/// Fixed palette color for this connection type.
	pub fn color(self) -> &'static str {
		match self {
			ConnectionType::Complementary => "rgba(34, 197, 94, 0.6)",
			ConnectionType::Competitive => "rgba(239, 68, 68, 0.6)",
			ConnectionType::Functional => "rgba(59, 130, 246, 0.6)",
			ConnectionType::Workflow => "rgba(168, 85, 247, 0.6)",
		}
	}

	/// Parse a wire identifier. `None` for anything outside the enumerated set.
	pub fn parse(s: &str) -> Option<Self> {
		[
			ConnectionType::Complementary,
			ConnectionType::Competitive,
			ConnectionType::Functional,
			ConnectionType::Workflow,
		]
		.into_iter()
		.find(|t| t.as_str() == s)
	}
}

/// Color for an arbitrary connection-type string, degrading to
/// [`FALLBACK_CONNECTION_COLOR`] instead of failing.
pub fn connection_color(name: &str) -> &'static str {
	ConnectionType::parse(name).map_or(FALLBACK_CONNECTION_COLOR, ConnectionType::color)
}

/// Visual size for a node. Monotonic in both inputs; the natural log dampens
/// high connection counts relative to popularity. Zero connections contribute
/// nothing (`ln(1) = 0`).
pub fn node_size(popularity: f64, connections: u32) -> f64 {
	1.0 + (popularity / 100.0) * 3.0 + (f64::from(connections) + 1.0).ln() * 0.5
}

/// A single AI tool record.
#[derive(Clone, Debug, PartialEq)]
pub struct Tool {
	/// Unique positive identifier.
	pub id: u32,
	pub name: String,
	pub description: String,
	pub category: Category,
	/// 0–100.
	pub popularity: f64,
	/// Precomputed degree hint. Independently sourced; not required to match
	/// the number of synergy records touching this tool.
	pub connections: u32,
	pub monthly_users: u64,
	pub url: String,
	/// Dense 1-based ordering by importance.
	pub rank: u32,
}

/// A typed, weighted relationship between two tools. Undirected in meaning,
/// stored as an ordered pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Synergy {
	pub source: u32,
	pub target: u32,
	/// 0–1.
	pub strength: f64,
	pub kind: ConnectionType,
	pub description: Option<String>,
}

/// The immutable reference dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
	pub tools: Vec<Tool>,
	pub synergies: Vec<Synergy>,
}

impl Catalog {
	/// The built-in dataset, constructed once and shared by reference.
	pub fn builtin() -> &'static Catalog {
		static CATALOG: OnceLock<Catalog> = OnceLock::new();
		CATALOG.get_or_init(data::builtin)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn category_colors_resolve_and_fall_back() {
		assert_eq!(category_color("NLP"), "#4F46E5");
		assert_eq!(category_color("BUSINESS"), "#0891B2");
		for bogus in ["", "nlp", "ROBOTICS", "Computer_Vision"] {
			assert_eq!(category_color(bogus), FALLBACK_CATEGORY_COLOR);
		}
	}

	#[test]
	fn connection_colors_resolve_and_fall_back() {
		assert_eq!(connection_color("workflow"), "rgba(168, 85, 247, 0.6)");
		for bogus in ["", "COMPLEMENTARY", "rivalry"] {
			assert_eq!(connection_color(bogus), FALLBACK_CONNECTION_COLOR);
		}
	}

	#[test]
	fn node_size_is_at_least_one() {
		assert_eq!(node_size(0.0, 0), 1.0);
		for tool in &Catalog::builtin().tools {
			assert!(node_size(tool.popularity, tool.connections) >= 1.0);
		}
	}

	#[test]
	fn node_size_is_monotonic() {
		assert!(node_size(50.0, 10) < node_size(60.0, 10));
		assert!(node_size(50.0, 10) < node_size(50.0, 11));
		// The log term grows slower than the popularity term.
		let by_connections = node_size(50.0, 40) - node_size(50.0, 10);
		let by_popularity = node_size(90.0, 10) - node_size(50.0, 10);
		assert!(by_connections < by_popularity);
	}

	#[test]
	fn builtin_catalog_is_internally_consistent() {
		let catalog = Catalog::builtin();
		let ids: HashSet<u32> = catalog.tools.iter().map(|t| t.id).collect();
		assert_eq!(ids.len(), catalog.tools.len(), "tool ids must be unique");

		let ranks: HashSet<u32> = catalog.tools.iter().map(|t| t.rank).collect();
		assert_eq!(ranks.len(), catalog.tools.len(), "ranks must be unique");

		for synergy in &catalog.synergies {
			assert!(ids.contains(&synergy.source));
			assert!(ids.contains(&synergy.target));
			assert!((0.0..=1.0).contains(&synergy.strength));
		}

		for tool in &catalog.tools {
			assert!((0.0..=100.0).contains(&tool.popularity));
		}
	}

	#[test]
	fn category_round_trips_through_wire_names() {
		for category in Category::ALL {
			assert_eq!(Category::parse(category.as_str()), Some(category));
		}
		for kind in [
			ConnectionType::Complementary,
			ConnectionType::Competitive,
			ConnectionType::Functional,
			ConnectionType::Workflow,
		] {
			assert_eq!(ConnectionType::parse(kind.as_str()), Some(kind));
		}
	}
}
