//! Data source resolution: remote API with catalog fallback.
//!
//! At load time the resolver decides between the remote graph API and the
//! built-in catalog, produces the same `{nodes, links}` shape either way,
//! and exposes `{data, loading, error}` plus a manual refetch to the
//! presentation layer. Every failure path terminates in a renderable
//! dataset; nothing here is fatal.

mod error;
mod remote;
mod resolver;
mod transport;

pub use error::SourceError;
pub use remote::{
	EDGE_LIMIT, FALLBACK_DELAY_MS, NODE_LIMIT, PROBE_LIMIT, PROBE_MIN_NODES, RemoteEdge,
	RemoteNode, normalize,
};
pub use resolver::{GraphDataHandle, SourceConfig, use_graph_data};
