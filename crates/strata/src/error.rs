//! Error types for rule compilation and z-index queries.

use thiserror::Error;

use crate::layer::{Capacity, LayerId};

/// Errors produced while compiling a rule set.
///
/// Compile errors are terminal: no partial allocation is ever exposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompileError {
	/// The ordering rules contain a cycle, so no valid allocation exists.
	#[error("ordering rules form a cycle: {}", cycle_path(.layers))]
	RuleConflict {
		/// Layers participating in the detected cycle.
		///
		/// Always at least two entries; a self-referencing rule reports the
		/// same layer twice. When several cycles exist, which one is
		/// reported is an artifact of component emission order.
		layers: Vec<LayerId>,
	},
}

/// Errors produced by [`StackProvider`](crate::StackProvider) queries.
///
/// Query errors are local to the single call; the provider stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryError {
	/// The queried layer does not appear in any rule.
	#[error("no layer named \"{layer}\"")]
	AbsentLayer {
		/// The unknown layer name as queried.
		layer: LayerId,
	},

	/// The stacking sub-index does not fit in the layer's capacity.
	#[error("layer \"{layer}\" holds {capacity} item(s), got index {index}")]
	IndexOutOfBounds {
		/// The queried layer.
		layer: LayerId,
		/// The rejected sub-index.
		index: u32,
		/// The layer's configured capacity.
		capacity: Capacity,
	},
}

/// Renders a cycle as `a -> b -> a`, closing the loop back to its first
/// member unless the reported participants already do.
fn cycle_path(layers: &[LayerId]) -> String {
	let mut path: Vec<&str> = layers.iter().map(LayerId::as_str).collect();
	if let (Some(first), Some(last)) = (path.first().copied(), path.last().copied())
		&& first != last
	{
		path.push(first);
	}
	path.join(" -> ")
}
