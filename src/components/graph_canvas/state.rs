//! Simulation state and interaction tracking for the graph canvas.
//!
//! Wraps the `force_graph` physics simulation with per-node visual data,
//! a pan/zoom view transform, and hit-testing for nodes and links. Hits
//! are reported as indices into the dataset the state was built from.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::GraphData;

/// Screen-space radius of a node with `val == 1.0` at zoom 1.
const NODE_RADIUS_SCALE: f64 = 4.0;

/// Graph-space tolerance for link hit-testing.
const LINK_HIT_DISTANCE: f64 = 4.0;

/// Seed circle radius for initial node placement.
const SEED_RADIUS: f64 = 100.0;

/// Visual attributes attached to each simulated node.
#[derive(Clone, Debug, Default)]
pub struct NodeVisual {
	pub label: String,
	pub color: String,
	/// Base radius in graph units, already scaled by the node's `val`.
	pub radius: f64,
	/// Index of this node in the source dataset.
	pub index: usize,
}

/// Visual attributes attached to each simulated edge.
#[derive(Clone, Debug, Default)]
pub struct LinkVisual {
	pub color: String,
	pub strength: f64,
	/// Index of this link in the source dataset.
	pub index: usize,
}

/// What the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
	Node(usize),
	Link(usize),
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Core canvas state combining physics simulation with interaction tracking.
///
/// Created when the component mounts and rebuilt whenever the dataset
/// changes, then mutated each frame by the animation loop.
pub struct GraphState {
	pub graph: ForceGraph<NodeVisual, LinkVisual>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<HitTarget>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx, usize)>,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			// Seed on a circle around the center; the simulation takes over
			// from there.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + SEED_RADIUS * angle.cos()) as f32,
				(height / 2.0 + SEED_RADIUS * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual {
					label: node.name.clone(),
					color: node.color.clone(),
					radius: NODE_RADIUS_SCALE * node.val,
					index: i,
				},
			});
			id_to_idx.insert(node.id, idx);
		}

		for (i, link) in data.links.iter().enumerate() {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(
					src,
					tgt,
					EdgeData {
						user_data: LinkVisual {
							color: link.color.clone(),
							strength: link.strength,
							index: i,
						},
					},
				);
				edges.push((src, tgt, i));
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Simulation index of the node under the pointer, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit_radius = node.data.user_data.radius + 2.0;
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// What the pointer is over, nodes winning over links.
	pub fn hit_test(&self, sx: f64, sy: f64) -> Option<HitTarget> {
		if let Some(idx) = self.node_at_position(sx, sy) {
			let mut data_index = None;
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					data_index = Some(node.data.user_data.index);
				}
			});
			return data_index.map(HitTarget::Node);
		}

		let (gx, gy) = self.screen_to_graph(sx, sy);
		let tolerance = LINK_HIT_DISTANCE / self.transform.k.max(0.1);
		let mut positions: HashMap<DefaultNodeIdx, (f64, f64)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});

		let mut best: Option<(f64, usize)> = None;
		for &(src, tgt, link_index) in &self.edges {
			let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(&src), positions.get(&tgt))
			else {
				continue;
			};
			let dist = segment_distance(gx, gy, x1, y1, x2, y2);
			if dist < tolerance && best.is_none_or(|(d, _)| dist < d) {
				best = Some((dist, link_index));
			}
		}
		best.map(|(_, index)| HitTarget::Link(index))
	}

	/// Data index of the hovered node, used by the renderer for the ring.
	pub fn hovered_node_index(&self) -> Option<usize> {
		match self.hovered {
			Some(HitTarget::Node(i)) => Some(i),
			_ => None,
		}
	}

	/// Data index of the hovered link.
	pub fn hovered_link_index(&self) -> Option<usize> {
		match self.hovered {
			Some(HitTarget::Link(i)) => Some(i),
			_ => None,
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Distance from a point to a line segment.
fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < f64::EPSILON {
		0.0
	} else {
		(((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	let (ex, ey) = (px - cx, py - cy);
	(ex * ex + ey * ey).sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segment_distance_handles_endpoints_and_midpoint() {
		// Horizontal segment from (0,0) to (10,0).
		assert_eq!(segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
		assert_eq!(segment_distance(-4.0, 0.0, 0.0, 0.0, 10.0, 0.0), 4.0);
		assert_eq!(segment_distance(13.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0);
	}

	#[test]
	fn segment_distance_degenerate_segment_is_point_distance() {
		assert_eq!(segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
	}
}
