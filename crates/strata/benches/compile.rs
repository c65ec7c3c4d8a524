use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use strata::{Rule, StackBuilder, try_compile};

fn chain_rules(len: usize) -> Vec<Rule> {
	(0..len)
		.map(|i| Rule::new(format!("l{i}"), format!("l{}", i + 1)))
		.collect()
}

/// Alternating fan-out/fan-in between consecutive rows of layers.
fn diamond_rules(rows: usize, width: usize) -> Vec<Rule> {
	let mut rules = Vec::new();
	for row in 0..rows {
		for i in 0..width {
			rules.push(Rule::new(format!("r{row}w{i}"), format!("hub{row}")));
			rules.push(Rule::new(format!("hub{row}"), format!("r{}w{i}", row + 1)));
		}
	}
	rules
}

fn bench_compile_chain(c: &mut Criterion) {
	let rules = chain_rules(500);
	c.bench_function("compile_chain_500", |b| {
		b.iter(|| try_compile(black_box(rules.clone())))
	});
}

fn bench_compile_diamonds(c: &mut Criterion) {
	let rules = diamond_rules(40, 8);
	c.bench_function("compile_diamonds_40x8", |b| {
		b.iter(|| try_compile(black_box(rules.clone())))
	});
}

fn bench_query(c: &mut Criterion) {
	let stack = StackBuilder::new()
		.rules(chain_rules(500))
		.capacity("l250", 16)
		.compile();
	c.bench_function("query_mid_chain", |b| {
		b.iter(|| stack.try_get_at(black_box("l250"), black_box(7)))
	});
}

criterion_group!(benches, bench_compile_chain, bench_compile_diamonds, bench_query);
criterion_main!(benches);
