//! Dismissible category legend.

use leptos::prelude::*;

use crate::catalog::Category;
use crate::view::PanelState;

/// Legend mapping each category color to its display label. Hidden once
/// dismissed; visibility lives in [`PanelState`].
#[component]
pub fn Legend(panels: RwSignal<PanelState>) -> impl IntoView {
	move || {
		panels.get().legend_visible.then(|| {
			view! {
				<div class="legend">
					<button
						class="close-button"
						on:click=move |_| panels.update(|p| p.legend_visible = false)
					>
						"×"
					</button>
					<h3>"Categories"</h3>
					<ul>
						{Category::ALL
							.into_iter()
							.map(|category| {
								view! {
									<li>
										<span
											class="swatch"
											style=format!("background-color: {};", category.color())
										/>
										{category.label()}
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			}
		})
	}
}
