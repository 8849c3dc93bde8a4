use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use inventory::{Money, OrderLine, Product, Store};

fn make_store(size: usize) -> Store {
    (0..size)
        .map(|i| Product::new(format!("Item {i}"), Money::from_cents(999), 1_000_000).unwrap())
        .collect()
}

fn bench_buy(c: &mut Criterion) {
    c.bench_function("inventory/buy", |b| {
        b.iter_batched(
            || Product::new("Widget", Money::from_units(10), 1_000_000).unwrap(),
            |mut product| product.buy(3).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_order_ten_lines(c: &mut Criterion) {
    let store = make_store(100);
    let lines: Vec<OrderLine> = store
        .products()
        .iter()
        .step_by(10)
        .map(|p| OrderLine::new(p.id(), 2))
        .collect();

    c.bench_function("inventory/order_10_lines", |b| {
        b.iter_batched(
            || store.clone(),
            |mut store| store.order(&lines).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_list_active_products(c: &mut Criterion) {
    let mut store = make_store(1_000);
    let depleted: Vec<OrderLine> = store
        .products()
        .iter()
        .step_by(2)
        .map(|p| OrderLine::new(p.id(), 1_000_000))
        .collect();
    store.order(&depleted).unwrap();

    c.bench_function("inventory/get_all_products_1000", |b| {
        b.iter(|| store.get_all_products().len());
    });
}

criterion_group!(
    benches,
    bench_buy,
    bench_order_ten_lines,
    bench_list_active_products,
);
criterion_main!(benches);
