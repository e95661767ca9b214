//! Collapsible filter controls and the statistics sub-panel.
//!
//! Every control writes straight into the shared [`FilterState`] signal;
//! the filtered graph and statistics recompute reactively from there.

use leptos::prelude::*;

use crate::catalog::Category;
use crate::filter::{CONNECTIONS_BOUNDS, FilterState, GraphStatistics, POPULARITY_BOUNDS, RangeEnd};
use crate::view::PanelState;

/// Filter panel. Collapsed to a single toggle button by default.
#[component]
pub fn GraphControls(
	filter: RwSignal<FilterState>,
	#[prop(into)] stats: Signal<GraphStatistics>,
	panels: RwSignal<PanelState>,
) -> impl IntoView {
	let toggle_panel = move |_| panels.update(|p| p.controls_expanded = !p.controls_expanded);

	view! {
		<div class="graph-controls">
			<button class="controls-toggle" on:click=toggle_panel>
				{move || {
					if panels.get().controls_expanded { "Filters ▲" } else { "Filters ▼" }
				}}
			</button>
			{move || {
				panels
					.get()
					.controls_expanded
					.then(|| view! { <ControlsBody filter=filter stats=stats panels=panels /> })
			}}
		</div>
	}
}

#[component]
fn ControlsBody(
	filter: RwSignal<FilterState>,
	#[prop(into)] stats: Signal<GraphStatistics>,
	panels: RwSignal<PanelState>,
) -> impl IntoView {
	view! {
		<div class="controls-body">
			<input
				type="text"
				class="search-input"
				placeholder="Search tools..."
				prop:value=move || filter.get().search_term
				on:input=move |ev| {
					let term = event_target_value(&ev);
					filter.update(|f| f.search_term = term);
				}
			/>

			<div class="category-filters">
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<button
								class="category-toggle"
								class:active=move || filter.get().categories.contains(&category)
								style=format!("--category-color: {};", category.color())
								on:click=move |_| filter.update(|f| f.toggle_category(category))
							>
								{category.label()}
							</button>
						}
					})
					.collect_view()}
			</div>

			<RangeControl
				label="Popularity"
				min=POPULARITY_BOUNDS.0
				max=POPULARITY_BOUNDS.1
				value=Signal::derive(move || filter.get().popularity_range)
				on_change=Callback::new(move |(end, value)| {
					filter.update(|f| f.set_popularity(end, value))
				})
			/>
			<RangeControl
				label="Connections"
				min=f64::from(CONNECTIONS_BOUNDS.0)
				max=f64::from(CONNECTIONS_BOUNDS.1)
				value=Signal::derive(move || {
					let (lo, hi) = filter.get().connections_range;
					(f64::from(lo), f64::from(hi))
				})
				on_change=Callback::new(move |(end, value): (RangeEnd, f64)| {
					filter.update(|f| f.set_connections(end, value as u32))
				})
			/>

			<button class="reset-button" on:click=move |_| filter.update(FilterState::reset)>
				"Reset filters"
			</button>

			<button
				class="stats-toggle"
				on:click=move |_| panels.update(|p| p.show_stats = !p.show_stats)
			>
				{move || if panels.get().show_stats { "Hide statistics" } else { "Show statistics" }}
			</button>
			{move || panels.get().show_stats.then(|| view! { <StatsPanel stats=stats /> })}
		</div>
	}
}

/// A min/max slider pair over one inclusive range.
#[component]
fn RangeControl(
	label: &'static str,
	min: f64,
	max: f64,
	#[prop(into)] value: Signal<(f64, f64)>,
	on_change: Callback<(RangeEnd, f64)>,
) -> impl IntoView {
	let parse = |ev: &web_sys::Event| event_target_value(ev).parse::<f64>().ok();

	view! {
		<div class="range-control">
			<label>
				{label} ": "
				{move || {
					let (lo, hi) = value.get();
					format!("{lo:.0} - {hi:.0}")
				}}
			</label>
			<input
				type="range"
				min=min
				max=max
				prop:value=move || value.get().0
				on:input=move |ev| {
					if let Some(v) = parse(&ev) {
						on_change.run((RangeEnd::Min, v));
					}
				}
			/>
			<input
				type="range"
				min=min
				max=max
				prop:value=move || value.get().1
				on:input=move |ev| {
					if let Some(v) = parse(&ev) {
						on_change.run((RangeEnd::Max, v));
					}
				}
			/>
		</div>
	}
}

#[component]
fn StatsPanel(#[prop(into)] stats: Signal<GraphStatistics>) -> impl IntoView {
	view! {
		<div class="stats-panel">
			<dl>
				<dt>"Visible tools"</dt>
				<dd>
					{move || {
						let s = stats.get();
						format!("{} / {}", s.filtered_count, s.total_nodes)
					}}
				</dd>
				<dt>"Visible links"</dt>
				<dd>{move || stats.get().total_links}</dd>
				<dt>"Avg popularity"</dt>
				<dd>{move || format!("{}%", stats.get().avg_popularity)}</dd>
				<dt>"Avg connections"</dt>
				<dd>{move || stats.get().avg_connections}</dd>
			</dl>
			<ul class="category-distribution">
				{move || {
					stats
						.get()
						.category_distribution
						.into_iter()
						.map(|(category, count)| {
							view! { <li>{format!("{}: {count}", category.label())}</li> }
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
