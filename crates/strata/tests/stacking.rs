//! End-to-end compilation and query behavior.

use strata::{CompileError, QueryError, StackBuilder, compile, try_compile};

#[test]
fn chain_allocates_contiguous_bases() {
	let stack = compile([("bg", "content"), ("content", "modal")]);
	assert_eq!(stack.get("bg"), 0);
	assert_eq!(stack.get("content"), 1);
	assert_eq!(stack.get_at("modal", 0), 2);
}

#[test]
fn widest_dependency_decides_the_base() {
	let stack = StackBuilder::new()
		.rule("a", "b")
		.rule("c", "b")
		.capacity("a", 2)
		.capacity("c", 3)
		.compile();
	assert_eq!(stack.get("b"), 3);
}

#[test]
fn every_rule_is_satisfied_in_a_mixed_layout() {
	let rules = [
		("bg", "doc"),
		("doc", "panels"),
		("doc", "popups"),
		("panels", "modal"),
		("popups", "modal"),
		("modal", "notifications"),
	];
	let stack = StackBuilder::new()
		.rules(rules)
		.capacity("popups", 6)
		.capacity("notifications", 3)
		.compile();

	for (lower, upper) in rules {
		let cap = stack.capacity(lower).expect("referenced layer has a capacity");
		assert!(
			stack.get(upper) >= stack.get(lower) + cap,
			"rule ({lower}, {upper}) violated"
		);
	}
}

#[test]
fn sub_indices_stay_inside_one_layer() {
	let stack = StackBuilder::new()
		.rule("bg", "toasts")
		.rule("toasts", "modal")
		.capacity("toasts", 8)
		.compile();

	for i in 0..8 {
		let z = stack.get_at("toasts", i);
		assert!(z >= stack.get("toasts"));
		assert!(z < stack.get("modal"));
	}
	assert!(matches!(
		stack.try_get_at("toasts", 8),
		Err(QueryError::IndexOutOfBounds { capacity: 8, index: 8, .. })
	));
}

#[test]
fn unreferenced_layers_are_not_allocated() {
	let stack = StackBuilder::new()
		.rule("a", "b")
		.capacity("ghost", 7)
		.predefined("ghost", 40)
		.compile();
	assert_eq!(stack.len(), 2);
	assert!(!stack.contains("ghost"));
	assert!(matches!(
		stack.try_get("ghost"),
		Err(QueryError::AbsentLayer { .. })
	));
}

#[test]
fn bases_round_trip_as_seeds() {
	let rules = [
		("bg", "doc"),
		("doc", "panels"),
		("doc", "popups"),
		("popups", "modal"),
	];
	let first = StackBuilder::new().rules(rules).capacity("popups", 4).compile();

	let mut reseeded = StackBuilder::new().rules(rules).capacity("popups", 4);
	for (layer, base) in first.bases() {
		reseeded = reseeded.predefined(layer, base);
	}
	let second = reseeded.compile();

	for layer in first.layers() {
		assert_eq!(first.try_get(layer), second.try_get(layer));
	}
}

#[test]
fn conflict_reports_layers_within_the_true_cycle() {
	let err = try_compile([("a", "b"), ("b", "c"), ("c", "a"), ("bg", "a")]).unwrap_err();
	let CompileError::RuleConflict { layers } = err;
	assert!(layers.len() >= 2);
	for layer in &layers {
		assert!(["a", "b", "c"].contains(&layer.as_str()), "{layer} outside the cycle");
	}
}

#[test]
fn recompiling_identical_input_is_deterministic() {
	let rules = [("bg", "doc"), ("doc", "modal"), ("doc", "popups")];
	let first = compile(rules);
	let second = compile(rules);
	assert_eq!(first.bases(), second.bases());
}

#[test]
fn provider_is_shareable_across_threads() {
	let stack = compile([("bg", "content"), ("content", "modal")]);
	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				assert_eq!(stack.get("modal"), 2);
			});
		}
	});
}
