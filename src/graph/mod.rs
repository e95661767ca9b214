//! The rendering contract and the assembler that produces it.
//!
//! [`GraphData`] is the shape the force-directed renderer consumes: nodes
//! carrying derived visual attributes (`val`, `color`) and links resolvable
//! against node ids. Assembly is pure; identical input always yields
//! identical output in catalog declaration order.

mod assemble;
mod types;

pub use assemble::{LinkColorStrategy, assemble, assemble_with};
pub use types::{GraphData, GraphLink, GraphNode, PossibleConnection};
