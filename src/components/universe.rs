//! The universe shell: data loading, filtering, and selection wiring.
//!
//! Owns the reactive plumbing between the resolver, the filter engine, the
//! canvas, and the chrome panels. The canvas reports raw click and hover
//! events; this component interprets them against the visible dataset.

use leptos::prelude::*;

use crate::components::DocumentCursor;
use crate::components::controls::GraphControls;
use crate::components::details::DetailsPanel;
use crate::components::graph_canvas::GraphCanvas;
use crate::components::legend::Legend;
use crate::filter::{self, FilterState, FilteredGraph};
use crate::source::{SourceConfig, use_graph_data};
use crate::view::{InteractionState, PanelState};

/// Top-level interactive view over the AI tool graph.
#[component]
pub fn AiUniverse(config: SourceConfig) -> impl IntoView {
	let handle = use_graph_data(config);
	let filter = RwSignal::new(FilterState::default());
	let interaction = RwSignal::new(InteractionState::default());
	let panels = RwSignal::new(PanelState::default());

	let filtered = Memo::new(move |_| {
		handle
			.data
			.get()
			.map(|data| filter::apply(&data, &filter.get()))
			.unwrap_or_else(FilteredGraph::default)
	});
	let visible = Signal::derive(move || filtered.get().data);
	let stats = Signal::derive(move || filtered.get().stats);

	// A fresh dataset invalidates the whole view state, panels included.
	Effect::new(move |_| {
		let _ = handle.data.get();
		interaction.update(|s| s.reset(&DocumentCursor));
		panels.set(PanelState::default());
	});

	let on_node_click = Callback::new(move |index: usize| {
		if let Some(node) = visible.get_untracked().nodes.get(index).cloned() {
			interaction.update(|s| s.select_node(node));
		}
	});
	let on_link_click = Callback::new(move |index: usize| {
		if let Some(link) = visible.get_untracked().links.get(index).cloned() {
			interaction.update(|s| s.select_link(link));
		}
	});
	let on_background_click = Callback::new(move |()| {
		interaction.update(|s| s.clear_selection());
	});
	let on_hover_change = Callback::new(move |hovering: bool| {
		interaction.update(|s| s.set_hovering(hovering, &DocumentCursor));
	});

	view! {
		<div class="ai-universe">
			{move || {
				match handle.data.get() {
					Some(dataset) if dataset.nodes.is_empty() => {
						let payload = handle
							.raw_payload
							.get()
							.unwrap_or_else(|| format!("{dataset:#?}"));
						view! { <EmptyState payload=payload /> }.into_any()
					}
					_ => {
						view! {
							<GraphCanvas
								data=visible
								on_node_click=on_node_click
								on_link_click=on_link_click
								on_background_click=on_background_click
								on_hover_change=on_hover_change
							/>
							<GraphControls filter=filter stats=stats panels=panels />
							<DetailsPanel interaction=interaction />
							<Legend panels=panels />
						}
							.into_any()
					}
				}
			}}
			{move || {
				handle
					.loading
					.get()
					.then(|| {
						view! {
							<div class="loading-overlay">
								<p>"Loading the AI universe..."</p>
							</div>
						}
					})
			}}
			{move || {
				handle
					.error
					.get()
					.map(|message| {
						view! {
							<div class="error-banner">
								<span>{message}</span>
								<button on:click=move |_| handle.refetch.run(())>"Retry"</button>
							</div>
						}
					})
			}}
		</div>
	}
}

/// Terminal state when the resolved dataset has no nodes at all. Shows the
/// offending server response instead of an empty canvas.
#[component]
fn EmptyState(payload: String) -> impl IntoView {
	view! {
		<div class="empty-state">
			<h2>"No graph data available"</h2>
			<pre>{payload}</pre>
		</div>
	}
}
