//! Details panel for the current selection.
//!
//! Shows a tool card when a node is selected and a connection card when a
//! link is selected. At most one card is visible at a time because the
//! selection itself is exclusive.

use leptos::prelude::*;

use crate::graph::{GraphLink, GraphNode};
use crate::view::{InteractionState, Selection};

/// How many possible connections the tool card lists before truncating.
const CONNECTION_PREVIEW_LIMIT: usize = 5;

fn format_monthly_users(count: u64) -> String {
	format!("{:.1}M", count as f64 / 1_000_000.0)
}

/// Selection-driven details panel. Renders nothing while the selection is
/// empty.
#[component]
pub fn DetailsPanel(interaction: RwSignal<InteractionState>) -> impl IntoView {
	let close = move |_| interaction.update(|s| s.clear_selection());

	move || match interaction.get().selection {
		Selection::None => None,
		Selection::Node(node) => Some(view! { <NodeCard node=node on_close=close /> }.into_any()),
		Selection::Link(link) => Some(view! { <LinkCard link=link on_close=close /> }.into_any()),
	}
}

#[component]
fn NodeCard(node: GraphNode, on_close: impl Fn(()) + Copy + 'static) -> impl IntoView {
	let connections = node.possible_connections.clone();
	let shown: Vec<_> = connections
		.iter()
		.take(CONNECTION_PREVIEW_LIMIT)
		.cloned()
		.collect();
	let hidden = connections.len().saturating_sub(CONNECTION_PREVIEW_LIMIT);

	view! {
		<div class="details-panel node-details">
			<button class="close-button" on:click=move |_| on_close(())>
				"×"
			</button>
			<h2>{node.name.clone()}</h2>
			<p class="description">{node.description.clone()}</p>
			<dl>
				<dt>"Category"</dt>
				<dd>{node.category.label()}</dd>
				<dt>"Popularity"</dt>
				<dd>{format!("{:.0}%", node.popularity)}</dd>
				<dt>"Connections"</dt>
				<dd>{node.connections}</dd>
				<dt>"Monthly users"</dt>
				<dd>{format_monthly_users(node.monthly_users)}</dd>
			</dl>
			{(!shown.is_empty()).then(|| {
				view! {
					<div class="possible-connections">
						<h3>"Possible connections"</h3>
						<ul>
							{shown
								.into_iter()
								.map(|c| {
									view! {
										<li>
											<span class="connection-name">{c.name}</span>
											<span class="connection-kind">{c.kind.as_str()}</span>
										</li>
									}
								})
								.collect_view()}
						</ul>
						{(hidden > 0)
							.then(|| view! { <p class="more">{format!("+{hidden} more")}</p> })}
					</div>
				}
			})}
		</div>
	}
}

#[component]
fn LinkCard(link: GraphLink, on_close: impl Fn(()) + Copy + 'static) -> impl IntoView {
	view! {
		<div class="details-panel link-details">
			<button class="close-button" on:click=move |_| on_close(())>
				"×"
			</button>
			<h2>"Connection"</h2>
			<dl>
				<dt>"Type"</dt>
				<dd>{link.kind.as_str()}</dd>
				<dt>"Strength"</dt>
				<dd>{format!("{:.0}%", link.strength * 100.0)}</dd>
			</dl>
			{link
				.description
				.clone()
				.map(|d| view! { <p class="description">{d}</p> })}
		</div>
	}
}
