//! Client-side filtering over the assembled graph.
//!
//! A [`FilterState`] is a composable predicate over nodes: search text,
//! category set, and two inclusive ranges. Links are never filtered on their
//! own; a link is visible iff both endpoints pass. Every filter change
//! recomputes the visible set and statistics in full; there is no
//! incremental state to invalidate.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::catalog::Category;
use crate::graph::{GraphData, GraphNode};

/// An empty selected-category set disables category filtering entirely
/// rather than matching nothing. Deliberate UX default, not an oversight.
pub const EMPTY_CATEGORIES_MATCH_ALL: bool = true;

/// Inclusive popularity bounds of the unrestricted filter.
pub const POPULARITY_BOUNDS: (f64, f64) = (0.0, 100.0);

/// Inclusive connection-count bounds of the unrestricted filter.
pub const CONNECTIONS_BOUNDS: (u32, u32) = (0, 50);

/// Which end of a range control changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeEnd {
	Min,
	Max,
}

/// The four filter dimensions. Updating one dimension never disturbs the
/// others; range updates replace the whole pair.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
	/// Case-insensitive substring match against name or description.
	pub search_term: String,
	/// Empty set means no category restriction (see
	/// [`EMPTY_CATEGORIES_MATCH_ALL`]).
	pub categories: BTreeSet<Category>,
	/// Inclusive `(min, max)` popularity window.
	pub popularity_range: (f64, f64),
	/// Inclusive `(min, max)` window over the degree hint.
	pub connections_range: (u32, u32),
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			search_term: String::new(),
			categories: BTreeSet::new(),
			popularity_range: POPULARITY_BOUNDS,
			connections_range: CONNECTIONS_BOUNDS,
		}
	}
}

impl FilterState {
	/// Restore all four dimensions to their unrestricted defaults in one
	/// atomic update.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Add or remove a category from the selected set.
	pub fn toggle_category(&mut self, category: Category) {
		if !self.categories.remove(&category) {
			self.categories.insert(category);
		}
	}

	/// Replace one end of the popularity window.
	pub fn set_popularity(&mut self, end: RangeEnd, value: f64) {
		let (min, max) = self.popularity_range;
		self.popularity_range = match end {
			RangeEnd::Min => (value, max),
			RangeEnd::Max => (min, value),
		};
	}

	/// Replace one end of the connections window.
	pub fn set_connections(&mut self, end: RangeEnd, value: u32) {
		let (min, max) = self.connections_range;
		self.connections_range = match end {
			RangeEnd::Min => (value, max),
			RangeEnd::Max => (min, value),
		};
	}

	/// Does a node pass every dimension of this filter?
	pub fn matches(&self, node: &GraphNode) -> bool {
		let category_ok = (EMPTY_CATEGORIES_MATCH_ALL && self.categories.is_empty())
			|| self.categories.contains(&node.category);

		let (pop_min, pop_max) = self.popularity_range;
		let (conn_min, conn_max) = self.connections_range;

		category_ok
			&& node.popularity >= pop_min
			&& node.popularity <= pop_max
			&& node.connections >= conn_min
			&& node.connections <= conn_max
			&& self.matches_search(node)
	}

	fn matches_search(&self, node: &GraphNode) -> bool {
		if self.search_term.is_empty() {
			return true;
		}
		let needle = self.search_term.to_lowercase();
		node.name.to_lowercase().contains(&needle)
			|| node.description.to_lowercase().contains(&needle)
	}
}

/// Aggregate statistics over a filtered graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStatistics {
	/// Node count before filtering.
	pub total_nodes: usize,
	/// Node count after filtering.
	pub filtered_count: usize,
	/// Visible link count.
	pub total_links: usize,
	/// Mean popularity of visible nodes, rounded. Zero when nothing is
	/// visible.
	pub avg_popularity: u32,
	/// Mean degree hint of visible nodes, rounded.
	pub avg_connections: u32,
	/// Visible-node count per category; zero-count categories are omitted.
	pub category_distribution: BTreeMap<Category, usize>,
}

/// A filtered view of the graph plus its statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredGraph {
	pub data: GraphData,
	pub stats: GraphStatistics,
}

/// Apply a filter to the full assembled graph.
pub fn apply(full: &GraphData, filter: &FilterState) -> FilteredGraph {
	let nodes: Vec<GraphNode> = full
		.nodes
		.iter()
		.filter(|n| filter.matches(n))
		.cloned()
		.collect();

	let visible: HashSet<u32> = nodes.iter().map(|n| n.id).collect();
	let links = full
		.links
		.iter()
		.filter(|l| visible.contains(&l.source) && visible.contains(&l.target))
		.cloned()
		.collect::<Vec<_>>();

	let mut category_distribution = BTreeMap::new();
	for node in &nodes {
		*category_distribution.entry(node.category).or_insert(0) += 1;
	}

	let count = nodes.len();
	let (avg_popularity, avg_connections) = if count == 0 {
		(0, 0)
	} else {
		let pop: f64 = nodes.iter().map(|n| n.popularity).sum();
		let conn: f64 = nodes.iter().map(|n| f64::from(n.connections)).sum();
		(
			(pop / count as f64).round() as u32,
			(conn / count as f64).round() as u32,
		)
	};

	let stats = GraphStatistics {
		total_nodes: full.nodes.len(),
		filtered_count: count,
		total_links: links.len(),
		avg_popularity,
		avg_connections,
		category_distribution,
	};

	FilteredGraph {
		data: GraphData { nodes, links },
		stats,
	}
}

#[cfg(test)]
mod tests {
	use crate::catalog::Catalog;
	use crate::graph::assemble;

	use super::*;

	fn full() -> GraphData {
		assemble(Catalog::builtin())
	}

	#[test]
	fn default_filter_passes_everything() {
		let data = full();
		let filtered = apply(&data, &FilterState::default());
		assert_eq!(filtered.data.nodes.len(), data.nodes.len());
		assert_eq!(filtered.data.links.len(), data.links.len());
	}

	#[test]
	fn empty_category_set_means_no_restriction() {
		let data = full();
		let mut filter = FilterState::default();
		assert!(filter.categories.is_empty());
		assert_eq!(apply(&data, &filter).stats.filtered_count, data.nodes.len());

		filter.toggle_category(Category::Audio);
		let only_audio = apply(&data, &filter);
		assert!(only_audio.data.nodes.iter().all(|n| n.category == Category::Audio));
		assert!(only_audio.stats.filtered_count < data.nodes.len());
	}

	#[test]
	fn search_is_case_insensitive_over_name_and_description() {
		let data = full();
		let mut filter = FilterState::default();

		filter.search_term = "chatgpt".to_string();
		let by_name = apply(&data, &filter);
		assert!(by_name.data.nodes.iter().any(|n| n.name == "ChatGPT"));

		filter.search_term = "IMAGE GENERATION".to_string();
		let by_description = apply(&data, &filter);
		assert!(by_description.stats.filtered_count >= 2);
		assert!(by_description.data.nodes.iter().all(|n| {
			n.name.to_lowercase().contains("image generation")
				|| n.description.to_lowercase().contains("image generation")
		}));
	}

	#[test]
	fn ranges_are_inclusive() {
		let data = full();
		let mut filter = FilterState::default();
		filter.set_popularity(RangeEnd::Min, 98.0);
		filter.set_popularity(RangeEnd::Max, 98.0);
		let filtered = apply(&data, &filter);
		assert_eq!(filtered.stats.filtered_count, 1);
		assert_eq!(filtered.data.nodes[0].name, "ChatGPT");
	}

	#[test]
	fn links_require_both_endpoints_visible() {
		let data = full();
		let mut filter = FilterState::default();
		filter.toggle_category(Category::Coding);
		let filtered = apply(&data, &filter);

		let visible: std::collections::HashSet<u32> =
			filtered.data.nodes.iter().map(|n| n.id).collect();
		assert!(!filtered.data.links.is_empty());
		for link in &filtered.data.links {
			assert!(visible.contains(&link.source));
			assert!(visible.contains(&link.target));
		}
		assert!(filtered.data.links.len() < data.links.len());
	}

	#[test]
	fn partial_updates_leave_other_dimensions_alone() {
		let mut filter = FilterState::default();
		filter.search_term = "voice".to_string();
		filter.toggle_category(Category::Audio);

		filter.set_connections(RangeEnd::Max, 30);
		assert_eq!(filter.search_term, "voice");
		assert!(filter.categories.contains(&Category::Audio));
		assert_eq!(filter.connections_range, (0, 30));
		assert_eq!(filter.popularity_range, POPULARITY_BOUNDS);
	}

	#[test]
	fn reset_restores_documented_defaults() {
		let mut filter = FilterState::default();
		filter.reset();
		assert_eq!(filter, FilterState::default());

		filter.search_term = "x".to_string();
		filter.toggle_category(Category::Nlp);
		filter.set_popularity(RangeEnd::Min, 40.0);
		filter.set_connections(RangeEnd::Max, 10);
		filter.reset();

		assert!(filter.search_term.is_empty());
		assert!(filter.categories.is_empty());
		assert_eq!(filter.popularity_range, POPULARITY_BOUNDS);
		assert_eq!(filter.connections_range, CONNECTIONS_BOUNDS);
	}

	#[test]
	fn filtering_is_idempotent() {
		let data = full();
		let mut filter = FilterState::default();
		filter.search_term = "ai".to_string();
		filter.set_popularity(RangeEnd::Min, 80.0);

		let once = apply(&data, &filter);
		let twice = apply(&once.data, &filter);
		assert_eq!(once.data.nodes, twice.data.nodes);
		assert_eq!(once.data.links, twice.data.links);
	}

	#[test]
	fn statistics_are_consistent_with_the_visible_set() {
		let data = full();
		for term in ["", "ai", "code", "zzz-no-match"] {
			let mut filter = FilterState::default();
			filter.search_term = term.to_string();
			let filtered = apply(&data, &filter);

			assert_eq!(filtered.stats.filtered_count, filtered.data.nodes.len());
			assert_eq!(filtered.stats.total_links, filtered.data.links.len());
			assert_eq!(filtered.stats.total_nodes, data.nodes.len());
			let sum: usize = filtered.stats.category_distribution.values().sum();
			assert_eq!(sum, filtered.stats.filtered_count);
			assert!(filtered.stats.category_distribution.values().all(|&c| c > 0));
		}
	}

	#[test]
	fn empty_result_yields_zeroed_averages() {
		let data = full();
		let mut filter = FilterState::default();
		filter.search_term = "no such tool anywhere".to_string();
		let filtered = apply(&data, &filter);
		assert_eq!(filtered.stats.filtered_count, 0);
		assert_eq!(filtered.stats.avg_popularity, 0);
		assert_eq!(filtered.stats.avg_connections, 0);
		assert!(filtered.stats.category_distribution.is_empty());
	}
}
