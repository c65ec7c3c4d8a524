//! Minimal base-index assignment over the proven-acyclic rule graph.

use indexmap::IndexMap;

use crate::graph::RuleGraph;
use crate::layer::{Capacity, LayerId, ZIndex};

/// Assigns every layer the minimal base index consistent with its
/// dependencies: 0 for layers with no lowers, otherwise the maximum of
/// `lower_base + lower_capacity` over all direct lowers. Equivalent to a
/// longest-path computation weighted by capacities; memoization bounds the
/// work to `O(layers + edges)`.
///
/// Seeded layers keep their given base and are never recomputed, even when
/// that breaks minimality for layers above them.
///
/// Runs on an explicit work stack so arbitrarily long rule chains cannot
/// exhaust the call stack.
pub(crate) fn allocate(
	graph: &RuleGraph,
	seeds: &IndexMap<LayerId, ZIndex>,
) -> IndexMap<LayerId, ZIndex> {
	let n = graph.len();
	let adj = graph.index_adjacency();
	let capacities: Vec<Capacity> = graph.capacities().values().copied().collect();

	let mut memo: Vec<Option<ZIndex>> = vec![None; n];
	for (layer, base) in seeds {
		if let Some(v) = graph.index_of(layer) {
			memo[v] = Some(*base);
		}
	}

	for root in 0..n {
		if memo[root].is_some() {
			continue;
		}
		// post-order: a vertex is finalized only after all of its lowers
		let mut stack: Vec<(usize, bool)> = vec![(root, false)];
		while let Some((v, expanded)) = stack.pop() {
			if memo[v].is_some() {
				continue;
			}
			if expanded {
				let base = adj[v]
					.iter()
					.map(|&lower| memo[lower].unwrap_or(0) + capacities[lower])
					.max()
					.unwrap_or(0);
				memo[v] = Some(base);
			} else {
				stack.push((v, true));
				for &lower in adj[v].iter().rev() {
					if memo[lower].is_none() {
						stack.push((lower, false));
					}
				}
			}
		}
	}

	graph
		.layers()
		.enumerate()
		.map(|(v, layer)| (layer.clone(), memo[v].unwrap_or(0)))
		.collect()
}
