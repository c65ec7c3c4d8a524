//! Dependency graph construction from ordering rules.

use indexmap::IndexMap;

use crate::layer::{Capacity, LayerId};
use crate::rule::Rule;

/// The dependency graph induced by a rule list.
///
/// `below` maps each layer to the layers it must render above, in rule
/// declaration order with duplicates preserved. `capacities` doubles as the
/// registry of every referenced layer: its key order is the first-seen order
/// across the rule list, and that order is what every later stage iterates
/// in.
#[derive(Debug, Clone, Default)]
pub(crate) struct RuleGraph {
	below: IndexMap<LayerId, Vec<LayerId>>,
	capacities: IndexMap<LayerId, Capacity>,
}

impl RuleGraph {
	/// Builds the graph in one pass over the rules.
	///
	/// No validation happens here: a layer referenced on only one side of
	/// any rule is a legal leaf or root.
	pub(crate) fn build(rules: &[Rule], overrides: &IndexMap<LayerId, Capacity>) -> Self {
		let mut graph = Self::default();
		for rule in rules {
			graph
				.below
				.entry(rule.upper.clone())
				.or_default()
				.push(rule.lower.clone());
			graph.register(&rule.lower, overrides);
			graph.register(&rule.upper, overrides);
		}
		graph
	}

	fn register(&mut self, layer: &LayerId, overrides: &IndexMap<LayerId, Capacity>) {
		if !self.capacities.contains_key(layer) {
			// zero is not a meaningful capacity; clamp once at registration
			let capacity = overrides.get(layer).copied().unwrap_or(1).max(1);
			self.capacities.insert(layer.clone(), capacity);
		}
	}

	/// Number of distinct layers referenced by any rule.
	pub(crate) fn len(&self) -> usize {
		self.capacities.len()
	}

	/// Distinct layers in first-seen order.
	pub(crate) fn layers(&self) -> impl Iterator<Item = &LayerId> {
		self.capacities.keys()
	}

	/// The layer at vertex index `index`, in first-seen order.
	pub(crate) fn layer_at(&self, index: usize) -> Option<&LayerId> {
		self.capacities.get_index(index).map(|(layer, _)| layer)
	}

	/// Slot count for `layer`, defaulting to 1 for unregistered names.
	pub(crate) fn capacity(&self, layer: &LayerId) -> Capacity {
		self.capacities.get(layer).copied().unwrap_or(1)
	}

	/// Edge lists as declared: upper layer to the layers below it.
	pub(crate) fn edge_lists(&self) -> impl Iterator<Item = (&LayerId, &[LayerId])> {
		self.below.iter().map(|(upper, lowers)| (upper, lowers.as_slice()))
	}

	/// Index-based adjacency in first-seen vertex order, edges pointing
	/// from each upper layer to its lowers.
	pub(crate) fn index_adjacency(&self) -> Vec<Vec<usize>> {
		let mut adj = vec![Vec::new(); self.capacities.len()];
		for (upper, lowers) in &self.below {
			let Some(u) = self.capacities.get_index_of(upper) else {
				continue;
			};
			for lower in lowers {
				if let Some(v) = self.capacities.get_index_of(lower) {
					adj[u].push(v);
				}
			}
		}
		adj
	}

	/// Vertex index of `layer`, if it was referenced by any rule.
	pub(crate) fn index_of(&self, layer: &LayerId) -> Option<usize> {
		self.capacities.get_index_of(layer)
	}

	/// Capacities in first-seen order, keyed by layer.
	pub(crate) fn capacities(&self) -> &IndexMap<LayerId, Capacity> {
		&self.capacities
	}

	/// Consumes the graph, keeping only the capacity table.
	pub(crate) fn into_capacities(self) -> IndexMap<LayerId, Capacity> {
		self.capacities
	}
}
