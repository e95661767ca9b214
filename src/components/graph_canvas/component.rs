//! Leptos component wrapping the graph canvas.
//!
//! The component creates a fullscreen canvas and wires up mouse/wheel event
//! handlers for node dragging, panning, zooming, and click/hover reporting.
//! An animation loop runs via `requestAnimationFrame`, calling the physics
//! simulation and renderer each frame. The simulation is rebuilt whenever
//! the `data` signal changes; the view transform survives rebuilds so a
//! filter tweak does not reset pan and zoom.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::graph::GraphData;

use super::render;
use super::state::{GraphState, HitTarget};

/// A mousedown awaiting resolution into a click or a drag.
struct Press {
	x: f64,
	y: f64,
	target: Option<HitTarget>,
	moved: bool,
}

/// Movement threshold in pixels separating a click from a drag.
const CLICK_SLOP: f64 = 4.0;

/// Simulation state plus the in-flight press, shared between the event
/// handlers and the animation loop.
struct CanvasContext {
	state: GraphState,
	press: Option<Press>,
}

/// Renders the interactive graph on a fullscreen canvas.
///
/// All interpretation of clicks lives in the parent: the component reports
/// node clicks, link clicks, background clicks, and hover transitions
/// through callbacks and keeps no selection of its own.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	on_node_click: Callback<usize>,
	on_link_click: Callback<usize>,
	on_background_click: Callback<()>,
	on_hover_change: Callback<bool>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(CanvasContext {
			state: GraphState::new(&data.get_untracked(), w, h),
			press: None,
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if c.state.animation_running {
					c.state.tick(0.016);
				}
				render::render(&c.state, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Rebuild the simulation when the dataset changes, carrying the view
	// transform over so filtering does not jump the viewport.
	let context_data = context.clone();
	Effect::new(move |_| {
		let dataset = data.get();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			let transform = c.state.transform.clone();
			let (w, h) = (c.state.width, c.state.height);
			c.state = GraphState::new(&dataset, w, h);
			c.state.transform = transform;
			c.press = None;
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let target = c.state.hit_test(x, y);
			c.press = Some(Press {
				x,
				y,
				target,
				moved: false,
			});

			if let Some(idx) = c.state.node_at_position(x, y) {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if let Some(ref mut press) = c.press {
				if (x - press.x).abs() > CLICK_SLOP || (y - press.y).abs() > CLICK_SLOP {
					press.moved = true;
				}
			}

			if !c.state.drag.active && !c.state.pan.active {
				let hit = c.state.hit_test(x, y);
				if hit.is_some() != c.state.hovered.is_some() {
					on_hover_change.run(hit.is_some());
				}
				c.state.hovered = hit;
			}

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					let (dx, dy) = (
						(x - c.state.drag.start_x) / c.state.transform.k,
						(y - c.state.drag.start_y) / c.state.transform.k,
					);
					let (nx, ny) = (
						c.state.drag.node_start_x + dx as f32,
						c.state.drag.node_start_y + dy as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.is_anchor = true;
						}
					});
				}
			}
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;

			if let Some(press) = c.press.take() {
				if !press.moved {
					match press.target {
						Some(HitTarget::Node(index)) => on_node_click.run(index),
						Some(HitTarget::Link(index)) => on_link_click.run(index),
						None => on_background_click.run(()),
					}
				}
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.press = None;
			if c.state.hovered.is_some() {
				on_hover_change.run(false);
			}
			c.state.hovered = None;
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block;"
		/>
	}
}
