//! Load-time source selection with catalog fallback.
//!
//! State machine per load: `Idle -> Loading -> {Ready, Failed}`, where
//! `Failed` immediately collapses into `Ready` on catalog data while keeping
//! the triggering error message around for display. Loads are identified by
//! a monotonic generation token; a completion whose generation is no longer
//! current is dropped, so a rapid mode toggle or refetch can never overwrite
//! newer data with a stale response.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::graph::{GraphData, LinkColorStrategy, assemble, assemble_with};

use super::error::SourceError;
use super::remote::{
	EDGE_LIMIT, NODE_LIMIT, PROBE_LIMIT, PROBE_MIN_NODES, RemoteEdges, RemoteNodes, normalize,
};
use super::transport::{Transport, WebTransport};

/// Resolver configuration, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
	/// `true`: fetch the API directly at full limits (API mode).
	/// `false`: probe first and prefer the catalog unless the remote
	/// dataset is big enough (direct mode).
	pub api_mode: bool,
	/// Base URL of the graph API.
	pub base_url: String,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			api_mode: false,
			base_url: "/api".to_string(),
		}
	}
}

/// Reactive handle the presentation layer consumes.
#[derive(Clone, Copy)]
pub struct GraphDataHandle {
	/// The current dataset; `None` only before the first load completes.
	pub data: ReadSignal<Option<GraphData>>,
	/// `true` while a load is in flight.
	pub loading: ReadSignal<bool>,
	/// Diagnostic message from the most recent load, shown as a non-fatal
	/// notice; the graph keeps rendering from catalog data regardless.
	pub error: ReadSignal<Option<String>>,
	/// Raw response body kept when the resolved dataset has no nodes, so
	/// the empty state can show what the server actually sent.
	pub raw_payload: ReadSignal<Option<String>>,
	/// Manually start a new load.
	pub refetch: Callback<()>,
}

/// What one load resolved to. `data` is always renderable; `error` carries
/// the message when the remote path failed and the catalog stood in, and
/// `raw` the offending response body when the dataset came back empty.
struct LoadOutcome {
	data: GraphData,
	error: Option<String>,
	raw: Option<String>,
}

impl LoadOutcome {
	fn fallback(catalog: &Catalog, err: &SourceError) -> Self {
		Self {
			data: assemble(catalog),
			error: Some(err.to_string()),
			raw: None,
		}
	}

	fn fetched(data: GraphData, raw_nodes_body: String) -> Self {
		let raw = data.nodes.is_empty().then_some(raw_nodes_body);
		Self {
			data,
			error: None,
			raw,
		}
	}
}

/// Create the resolver and kick off the initial load.
pub fn use_graph_data(config: SourceConfig) -> GraphDataHandle {
	let (data, set_data) = signal(None);
	let (loading, set_loading) = signal(true);
	let (error, set_error) = signal(None);
	let (raw_payload, set_raw) = signal(None);
	let config = StoredValue::new(config);
	let generation = StoredValue::new(0u64);

	let start = move || {
		let current = generation
			.try_update_value(|g| {
				*g += 1;
				*g
			})
			.unwrap_or(0);
		set_loading.set(true);

		spawn_local(async move {
			let cfg = config.get_value();
			let outcome = load_dataset(&cfg, &WebTransport).await;

			if generation.try_get_value() != Some(current) {
				debug!("ai-universe: dropping stale load result (generation {current})");
				return;
			}

			info!(
				"ai-universe: dataset ready: {} nodes, {} links",
				outcome.data.nodes.len(),
				outcome.data.links.len()
			);
			set_data.set(Some(outcome.data));
			set_error.set(outcome.error);
			set_raw.set(outcome.raw);
			set_loading.set(false);
		});
	};

	start();

	GraphDataHandle {
		data,
		loading,
		error,
		raw_payload,
		refetch: Callback::new(move |()| start()),
	}
}

/// Resolve a dataset. Always succeeds; failures fall back to the catalog.
async fn load_dataset<T: Transport>(config: &SourceConfig, transport: &T) -> LoadOutcome {
	let catalog = Catalog::builtin();

	if config.api_mode {
		return match fetch_full(&config.base_url, transport).await {
			Ok((data, raw)) => LoadOutcome::fetched(data, raw),
			Err(err) => {
				warn!("ai-universe: api fetch failed ({err}), using built-in catalog");
				LoadOutcome::fallback(catalog, &err)
			}
		};
	}

	match probe(&config.base_url, transport).await {
		Ok(count) => {
			info!("ai-universe: probe found {count} remote nodes, fetching full dataset");
			match fetch_full(&config.base_url, transport).await {
				Ok((data, raw)) => LoadOutcome::fetched(data, raw),
				Err(err) => {
					warn!("ai-universe: full fetch failed ({err}), using built-in catalog");
					LoadOutcome::fallback(catalog, &err)
				}
			}
		}
		Err(err) => {
			info!("ai-universe: {err}, using built-in catalog");
			transport.settle().await;
			LoadOutcome::fallback(catalog, &err)
		}
	}
}

/// Small-limit request deciding whether the remote source is worth using.
async fn probe<T: Transport>(base: &str, transport: &T) -> Result<usize, SourceError> {
	let body = transport
		.get(&format!("{base}/graph/nodes?limit={PROBE_LIMIT}"))
		.await?;
	let payload: RemoteNodes = serde_json::from_str(&body)?;
	let got = payload.nodes.len();
	if got >= PROBE_MIN_NODES {
		Ok(got)
	} else {
		Err(SourceError::InsufficientData {
			got,
			need: PROBE_MIN_NODES,
		})
	}
}

/// Fetch nodes and edges at full limits and normalize them. Remote links use
/// the uniform color strategy. The raw nodes body rides along for the
/// empty-dataset diagnostics.
async fn fetch_full<T: Transport>(
	base: &str,
	transport: &T,
) -> Result<(GraphData, String), SourceError> {
	let nodes_body = transport
		.get(&format!("{base}/graph/nodes?limit={NODE_LIMIT}"))
		.await?;
	let nodes: RemoteNodes = serde_json::from_str(&nodes_body)?;

	let edges_body = transport
		.get(&format!("{base}/graph/edges?limit={EDGE_LIMIT}"))
		.await?;
	let edges: RemoteEdges = serde_json::from_str(&edges_body)?;

	let catalog = normalize(nodes.nodes, edges.edges);
	Ok((
		assemble_with(&catalog, LinkColorStrategy::Uniform),
		nodes_body,
	))
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;

	/// Canned-response transport recording every request it serves.
	#[derive(Default)]
	struct StubTransport {
		responses: HashMap<String, String>,
		requests: RefCell<Vec<String>>,
	}

	impl StubTransport {
		fn route(mut self, url: &str, body: &str) -> Self {
			self.responses.insert(url.to_string(), body.to_string());
			self
		}

		fn requests(&self) -> Vec<String> {
			self.requests.borrow().clone()
		}
	}

	impl Transport for StubTransport {
		async fn get(&self, url: &str) -> Result<String, SourceError> {
			self.requests.borrow_mut().push(url.to_string());
			self.responses
				.get(url)
				.cloned()
				.ok_or_else(|| SourceError::Fetch(format!("no route for {url}")))
		}
	}

	fn nodes_body(count: usize) -> String {
		let nodes: Vec<String> = (1..=count)
			.map(|i| format!(r#"{{"id": {i}, "name": "tool-{i}"}}"#))
			.collect();
		format!(r#"{{"nodes": [{}]}}"#, nodes.join(","))
	}

	fn direct_config() -> SourceConfig {
		SourceConfig::default()
	}

	fn api_config() -> SourceConfig {
		SourceConfig {
			api_mode: true,
			..SourceConfig::default()
		}
	}

	fn catalog_data() -> GraphData {
		assemble(Catalog::builtin())
	}

	#[tokio::test]
	async fn probe_below_threshold_falls_back_to_catalog() {
		let transport =
			StubTransport::default().route("/api/graph/nodes?limit=5", &nodes_body(3));

		let outcome = load_dataset(&direct_config(), &transport).await;

		assert_eq!(outcome.data, catalog_data());
		let message = outcome.error.unwrap();
		assert!(message.contains("3 nodes"), "unexpected message: {message}");
		assert!(message.contains("need 50"));
		// The full fetch was never issued.
		assert_eq!(transport.requests(), vec!["/api/graph/nodes?limit=5"]);
	}

	#[tokio::test]
	async fn probe_at_threshold_issues_full_fetch() {
		let transport = StubTransport::default()
			.route("/api/graph/nodes?limit=5", &nodes_body(50))
			.route("/api/graph/nodes?limit=100", &nodes_body(60))
			.route("/api/graph/edges?limit=200", r#"{"edges": []}"#);

		let outcome = load_dataset(&direct_config(), &transport).await;

		assert_eq!(outcome.data.nodes.len(), 60);
		assert!(outcome.error.is_none());
		assert_eq!(
			transport.requests(),
			vec![
				"/api/graph/nodes?limit=5",
				"/api/graph/nodes?limit=100",
				"/api/graph/edges?limit=200",
			]
		);
	}

	#[tokio::test]
	async fn full_fetch_failure_after_good_probe_falls_back() {
		let transport =
			StubTransport::default().route("/api/graph/nodes?limit=5", &nodes_body(50));

		let outcome = load_dataset(&direct_config(), &transport).await;

		assert_eq!(outcome.data, catalog_data());
		assert!(outcome.error.is_some());
	}

	#[tokio::test]
	async fn malformed_probe_body_falls_back_with_parse_error() {
		let transport =
			StubTransport::default().route("/api/graph/nodes?limit=5", "not json at all");

		let outcome = load_dataset(&direct_config(), &transport).await;

		assert_eq!(outcome.data, catalog_data());
		assert!(outcome.error.unwrap().contains("malformed response"));
	}

	#[tokio::test]
	async fn api_mode_skips_the_probe() {
		let transport = StubTransport::default()
			.route("/api/graph/nodes?limit=100", &nodes_body(2))
			.route("/api/graph/edges?limit=200", r#"{"edges": []}"#);

		let outcome = load_dataset(&api_config(), &transport).await;

		assert_eq!(outcome.data.nodes.len(), 2);
		assert!(outcome.error.is_none());
		assert!(
			transport
				.requests()
				.iter()
				.all(|url| !url.ends_with("limit=5"))
		);
	}

	#[tokio::test]
	async fn api_mode_failure_surfaces_error_over_catalog_data() {
		let transport = StubTransport::default();

		let outcome = load_dataset(&api_config(), &transport).await;

		assert_eq!(outcome.data, catalog_data());
		assert!(outcome.error.unwrap().contains("network request failed"));
	}

	#[tokio::test]
	async fn empty_remote_dataset_keeps_the_raw_body() {
		let transport = StubTransport::default()
			.route("/api/graph/nodes?limit=100", r#"{"nodes": []}"#)
			.route("/api/graph/edges?limit=200", r#"{"edges": []}"#);

		let outcome = load_dataset(&api_config(), &transport).await;

		assert!(outcome.data.nodes.is_empty());
		assert!(outcome.error.is_none());
		assert_eq!(outcome.raw.as_deref(), Some(r#"{"nodes": []}"#));
	}

	#[tokio::test]
	async fn non_empty_dataset_carries_no_raw_body() {
		let transport = StubTransport::default()
			.route("/api/graph/nodes?limit=100", &nodes_body(2))
			.route("/api/graph/edges?limit=200", r#"{"edges": []}"#);

		let outcome = load_dataset(&api_config(), &transport).await;

		assert!(outcome.raw.is_none());
	}
}
