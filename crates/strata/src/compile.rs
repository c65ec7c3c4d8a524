//! Compilation entry points.
//!
//! One fallible pipeline does all the work: build the rule graph, prove it
//! acyclic, allocate bases, wrap the result. [`StackBuilder::compile`] and
//! the free [`compile`] are thin panicking adapters over the `try_` pair
//! for rule tables known valid at startup.

use indexmap::IndexMap;
use tracing::debug;

use crate::alloc::allocate;
use crate::cycle::find_cycle;
use crate::error::CompileError;
use crate::graph::RuleGraph;
use crate::layer::{Capacity, LayerId, ZIndex};
use crate::provider::StackProvider;
use crate::rule::Rule;

/// Collects ordering rules, capacity overrides, and predefined bases, then
/// compiles them into a [`StackProvider`].
#[derive(Debug, Clone, Default)]
pub struct StackBuilder {
	rules: Vec<Rule>,
	capacities: IndexMap<LayerId, Capacity>,
	predefined: IndexMap<LayerId, ZIndex>,
}

impl StackBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one ordering rule: `lower` renders strictly below `upper`.
	pub fn rule(mut self, lower: impl Into<LayerId>, upper: impl Into<LayerId>) -> Self {
		self.rules.push(Rule::new(lower, upper));
		self
	}

	/// Adds a batch of rules, in order.
	pub fn rules<I>(mut self, rules: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Rule>,
	{
		self.rules.extend(rules.into_iter().map(Into::into));
		self
	}

	/// Reserves `capacity` stacking slots for `layer`.
	///
	/// Layers default to a single slot; zero is treated as 1. Overrides for
	/// layers no rule ends up referencing are ignored.
	pub fn capacity(mut self, layer: impl Into<LayerId>, capacity: Capacity) -> Self {
		self.capacities.insert(layer.into(), capacity);
		self
	}

	/// Fixes the base index of `layer` before allocation.
	///
	/// Seeded layers are never recomputed, even when the seed breaks
	/// minimality for the layers stacked above them.
	pub fn predefined(mut self, layer: impl Into<LayerId>, base: ZIndex) -> Self {
		self.predefined.insert(layer.into(), base);
		self
	}

	/// Compiles the collected rules into a provider.
	///
	/// Fails with [`CompileError::RuleConflict`] when the rules contain a
	/// cycle; no partial allocation is produced in that case.
	pub fn try_compile(self) -> Result<StackProvider, CompileError> {
		let graph = RuleGraph::build(&self.rules, &self.capacities);
		debug!(rules = self.rules.len(), layers = graph.len(), "built layer rule graph");

		if let Some(layers) = find_cycle(&graph) {
			return Err(CompileError::RuleConflict { layers });
		}

		let bases = allocate(&graph, &self.predefined);
		debug!(layers = bases.len(), "allocated layer bases");
		Ok(StackProvider::new(bases, graph.into_capacities()))
	}

	/// Compiles the collected rules into a provider.
	///
	/// # Panics
	///
	/// Panics when the rules contain an ordering cycle. Use
	/// [`Self::try_compile`] when the rule set is not trusted.
	pub fn compile(self) -> StackProvider {
		match self.try_compile() {
			Ok(provider) => provider,
			Err(err) => panic!("{err}"),
		}
	}
}

/// Compiles a plain rule list with default capacities and no seeds.
pub fn try_compile<I>(rules: I) -> Result<StackProvider, CompileError>
where
	I: IntoIterator,
	I::Item: Into<Rule>,
{
	StackBuilder::new().rules(rules).try_compile()
}

/// Compiles a plain rule list with default capacities and no seeds.
///
/// # Panics
///
/// Panics when the rules contain an ordering cycle. Use [`try_compile`]
/// when the rule set is not trusted.
pub fn compile<I>(rules: I) -> StackProvider
where
	I: IntoIterator,
	I::Item: Into<Rule>,
{
	StackBuilder::new().rules(rules).compile()
}
