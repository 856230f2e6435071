use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use salesdash_core::{OrderId, ProductId};
use salesdash_products::{InMemoryProductCatalog, Product};
use salesdash_reporting::{
    DashboardConfig, DashboardService, FixedClock, InMemoryOrderSource, Period, compute_summary,
    order_lines, sales_over_time, top_products,
};
use salesdash_sales::{Order, OrderLine, OrderState};

const PRODUCTS: usize = 50;

fn catalog(products: &[ProductId]) -> InMemoryProductCatalog {
    products
        .iter()
        .enumerate()
        .map(|(i, id)| Product::new(*id, format!("Product {i}")))
        .collect()
}

/// Deterministic snapshot: orders spread over the last year, 1-4 lines each.
fn snapshot(count: usize, products: &[ProductId]) -> Vec<Order> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let states = [OrderState::Draft, OrderState::Sale, OrderState::Done, OrderState::Cancel];

    (0..count)
        .map(|i| {
            let created_at = base + Duration::minutes((i as i64 * 37) % (365 * 24 * 60));
            let mut order = Order::new(
                OrderId::new(),
                states[i % states.len()],
                Decimal::new((i as i64 % 10_000) + 100, 2),
            )
            .with_created_at(created_at)
            .with_write_at(created_at + Duration::minutes((i as i64 % 600) + 1));

            for l in 0..(1 + i % 4) {
                let product = products[(i * 7 + l) % products.len()];
                let line = OrderLine::new(product, Decimal::from((i + l) % 12 + 1))
                    .expect("generated quantities are positive");
                order = order.with_line(line);
            }
            order
        })
        .collect()
}

fn bench_compute_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_summary");
    let products: Vec<ProductId> = (0..PRODUCTS).map(|_| ProductId::new()).collect();

    for count in [100, 1_000, 10_000, 100_000].iter() {
        let orders = snapshot(*count, &products);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("orders", count), &orders, |b, orders| {
            b.iter(|| black_box(compute_summary(black_box(orders))));
        });
    }

    group.finish();
}

fn bench_top_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_products");
    let products: Vec<ProductId> = (0..PRODUCTS).map(|_| ProductId::new()).collect();
    let names = catalog(&products);

    for count in [100, 1_000, 10_000, 100_000].iter() {
        let orders = snapshot(*count, &products);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("orders", count), &orders, |b, orders| {
            b.iter(|| black_box(top_products(order_lines(black_box(orders)), &names, 3)));
        });
    }

    group.finish();
}

fn bench_sales_over_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_over_time");
    let products: Vec<ProductId> = (0..PRODUCTS).map(|_| ProductId::new()).collect();
    let orders = snapshot(10_000, &products);

    for period in [Period::Month, Period::Year].iter() {
        group.bench_with_input(
            BenchmarkId::new("10k_orders", period.as_str()),
            period,
            |b, &period| {
                b.iter(|| black_box(sales_over_time(black_box(&orders), period)));
            },
        );
    }

    group.finish();
}

fn bench_full_dashboard(c: &mut Criterion) {
    let products: Vec<ProductId> = (0..PRODUCTS).map(|_| ProductId::new()).collect();
    let orders = snapshot(10_000, &products);
    let svc = DashboardService::new(
        InMemoryOrderSource::new(orders),
        catalog(&products),
        DashboardConfig::default(),
    )
    .with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap()));

    c.bench_function("dashboard_year_10k_orders", |b| {
        b.iter(|| black_box(svc.get_dashboard(black_box("year")).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_compute_summary,
    bench_top_products,
    bench_sales_over_time,
    bench_full_dashboard
);
criterion_main!(benches);
