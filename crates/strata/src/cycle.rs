//! Cycle detection over the rule graph.
//!
//! Allocation walks the graph recursively, so the graph must be proven
//! acyclic first. Detection runs Tarjan's strongly-connected-components
//! decomposition with an explicit frame stack; call-stack depth stays
//! constant no matter how deep the rule chains go, while visitation and
//! component emission order match the recursive formulation.

use crate::graph::RuleGraph;
use crate::layer::LayerId;

const UNVISITED: usize = usize::MAX;

/// Finds one cycle in the rule graph, if any exists.
///
/// Returns the participating layers of the first non-trivial strongly
/// connected component in emission order. A direct self-referencing rule
/// short-circuits the full decomposition and reports the layer twice.
pub(crate) fn find_cycle(graph: &RuleGraph) -> Option<Vec<LayerId>> {
	for (upper, lowers) in graph.edge_lists() {
		if lowers.contains(upper) {
			return Some(vec![upper.clone(), upper.clone()]);
		}
	}

	let n = graph.len();
	if n == 0 {
		return None;
	}

	let adj = graph.index_adjacency();
	let mut tarjan = Tarjan::new(n);
	for v in 0..n {
		if tarjan.index[v] == UNVISITED {
			tarjan.run(&adj, v);
		}
	}

	// Every component a singleton: certainly acyclic, skip the scan.
	if tarjan.components.len() == n {
		return None;
	}

	tarjan
		.components
		.iter()
		.find(|component| component.len() > 1)
		.map(|component| {
			component
				.iter()
				.filter_map(|&v| graph.layer_at(v).cloned())
				.collect()
		})
}

struct Tarjan {
	index: Vec<usize>,
	low: Vec<usize>,
	on_stack: Vec<bool>,
	stack: Vec<usize>,
	next_index: usize,
	components: Vec<Vec<usize>>,
}

impl Tarjan {
	fn new(n: usize) -> Self {
		Self {
			index: vec![UNVISITED; n],
			low: vec![0; n],
			on_stack: vec![false; n],
			stack: Vec::new(),
			next_index: 0,
			components: Vec::new(),
		}
	}

	fn discover(&mut self, v: usize) {
		self.index[v] = self.next_index;
		self.low[v] = self.next_index;
		self.next_index += 1;
		self.stack.push(v);
		self.on_stack[v] = true;
	}

	/// One depth-first pass from `root` over explicit frames of
	/// `(vertex, next child to examine)`.
	fn run(&mut self, adj: &[Vec<usize>], root: usize) {
		self.discover(root);
		let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

		while let Some(frame) = frames.last_mut() {
			let (v, cursor) = *frame;
			if let Some(&w) = adj[v].get(cursor) {
				frame.1 += 1;
				if self.index[w] == UNVISITED {
					self.discover(w);
					frames.push((w, 0));
				} else if self.on_stack[w] {
					self.low[v] = self.low[v].min(self.index[w]);
				}
			} else {
				frames.pop();
				if self.low[v] == self.index[v] {
					let mut component = Vec::new();
					while let Some(w) = self.stack.pop() {
						self.on_stack[w] = false;
						component.push(w);
						if w == v {
							break;
						}
					}
					self.components.push(component);
				}
				if let Some(&(parent, _)) = frames.last() {
					self.low[parent] = self.low[parent].min(self.low[v]);
				}
			}
		}
	}
}
