//! Canvas drawing for the graph.
//!
//! Drawing order per frame: background, links, then nodes, then the hover
//! ring and label on top. Link and node positions come straight from the
//! simulation; the view transform handles pan and zoom.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::GraphState;

const BACKGROUND_COLOR: &str = "#000000";
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.85)";
const HOVER_RING_COLOR: &str = "rgba(255, 255, 255, 0.8)";

/// Minimum on-screen node radius below which labels are culled.
const LABEL_MIN_RADIUS: f64 = 3.0;

/// Renders the complete graph to the canvas.
pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx);
	draw_nodes(state, ctx);

	ctx.restore();
}

fn draw_links(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let hovered = state.hovered_link_index();

	state.graph.visit_edges(|n1, n2, edge| {
		let link = &edge.user_data;
		let is_hovered = hovered == Some(link.index);

		// Stronger synergies draw thicker; hover widens further.
		let mut width = (link.strength * 2.0).max(0.5) / k;
		if is_hovered {
			width *= 1.8;
		}

		ctx.set_stroke_style_str(&link.color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let hovered = state.hovered_node_index();
	let label_font = format!("{:.1}px sans-serif", 11.0 / k);

	state.graph.visit_nodes(|node| {
		let visual = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = hovered == Some(visual.index);
		let radius = if is_hovered {
			visual.radius * 1.2
		} else {
			visual.radius
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&visual.color);
		ctx.fill();

		if is_hovered {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(HOVER_RING_COLOR);
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		if radius * k >= LABEL_MIN_RADIUS {
			ctx.set_fill_style_str(LABEL_COLOR);
			ctx.set_font(&label_font);
			let _ = ctx.fill_text(&visual.label, x + radius + 4.0 / k, y + 3.0 / k);
		}
	});
}
