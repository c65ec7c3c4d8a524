//! Z-index allocation from declarative layer ordering rules.
//!
//! Rendering code that positions popups, panels, and overlays needs a total
//! order over its stacking layers, but the requirements arrive as local
//! pairwise facts ("notifications sit above panels"). This crate compiles
//! those pairwise rules into a minimal, non-overlapping base index per
//! layer, with optional per-layer capacity for stacking several items
//! inside one layer. Compilation happens once; the resulting
//! [`StackProvider`] is immutable and answers any number of queries.
//!
//! ```
//! use strata::StackBuilder;
//!
//! let stack = StackBuilder::new()
//! 	.rule("background", "content")
//! 	.rule("content", "modal")
//! 	.capacity("modal", 4)
//! 	.compile();
//!
//! assert_eq!(stack.get("background"), 0);
//! assert_eq!(stack.get("content"), 1);
//! assert_eq!(stack.get_at("modal", 3), 5);
//! ```
//!
//! Cyclic rules fail compilation with [`CompileError::RuleConflict`];
//! queries on unknown layers or past a layer's capacity fail with
//! [`QueryError`] (or panic, in the `get` convenience variants). The
//! numeric output is an opaque ordering key; how a renderer consumes it is
//! its own business.

mod alloc;
mod compile;
mod cycle;
mod error;
mod graph;
mod layer;
mod provider;
mod rule;

pub use compile::{StackBuilder, compile, try_compile};
pub use error::{CompileError, QueryError};
pub use layer::{Capacity, LayerId, ZIndex};
pub use provider::StackProvider;
pub use rule::Rule;
