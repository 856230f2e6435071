use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use salesdash_core::ValueObject;
use salesdash_sales::{Order, OrderState};

/// Dashboard KPI block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub cancelled_orders: u64,
    pub new_orders: u64,
    pub average_processing_time_hours: f64,
    pub average_quantity_per_order: f64,
    pub total_revenue: Decimal,
}

impl ValueObject for SummaryMetrics {}

/// Reduce an order snapshot (already filtered to the reporting window) into KPIs.
///
/// Processing time is only averaged over terminal orders (`done`, `cancel`)
/// that carry both timestamps; other terminal orders are skipped for that
/// average alone. Empty inputs give an all-zero summary.
pub fn compute_summary(orders: &[Order]) -> SummaryMetrics {
    let mut cancelled_orders = 0u64;
    let mut new_orders = 0u64;
    let mut total_processing_hours = 0.0f64;
    let mut timed_orders = 0u64;
    let mut total_revenue = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;

    for order in orders {
        match order.state {
            OrderState::Cancel => cancelled_orders += 1,
            OrderState::Sale => new_orders += 1,
            OrderState::Draft | OrderState::Done => {}
        }

        if order.state.is_terminal() {
            match order.processing_hours() {
                Ok(hours) => {
                    total_processing_hours += hours;
                    timed_orders += 1;
                }
                Err(reason) => {
                    tracing::debug!(order_id = %order.id, %reason, "order skipped for processing time");
                }
            }
        }

        total_revenue += order.total_amount;
        total_quantity += order.total_quantity();
    }

    let average_processing_time_hours = if timed_orders > 0 {
        total_processing_hours / timed_orders as f64
    } else {
        0.0
    };

    let average_quantity_per_order = if orders.is_empty() {
        0.0
    } else {
        total_quantity
            .checked_div(Decimal::from(orders.len()))
            .and_then(|avg| avg.to_f64())
            .unwrap_or(0.0)
    };

    SummaryMetrics {
        cancelled_orders,
        new_orders,
        average_processing_time_hours,
        average_quantity_per_order,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use salesdash_core::{OrderId, ProductId};
    use salesdash_sales::OrderLine;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn test_order(state: OrderState, amount: Decimal, qty: Decimal) -> Order {
        Order::new(OrderId::new(), state, amount)
            .with_created_at(test_time())
            .with_write_at(test_time())
            .with_line(OrderLine::new(ProductId::new(), qty).unwrap())
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let summary = compute_summary(&[]);
        assert_eq!(summary, SummaryMetrics::default());
        assert_eq!(summary.cancelled_orders, 0);
        assert_eq!(summary.new_orders, 0);
        assert_eq!(summary.average_processing_time_hours, 0.0);
        assert_eq!(summary.average_quantity_per_order, 0.0);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
    }

    #[test]
    fn cancelled_and_new_orders_example() {
        let cancelled = test_order(OrderState::Cancel, dec!(100), dec!(5))
            .with_write_at(test_time() + Duration::hours(2));
        let sold = test_order(OrderState::Sale, dec!(50), dec!(3));

        let summary = compute_summary(&[cancelled, sold]);

        assert_eq!(summary.cancelled_orders, 1);
        assert_eq!(summary.new_orders, 1);
        assert_eq!(summary.average_processing_time_hours, 2.0);
        assert_eq!(summary.total_revenue, dec!(150));
        assert_eq!(summary.average_quantity_per_order, 4.0);
    }

    #[test]
    fn processing_time_averages_only_timed_terminal_orders() {
        let done_3h = test_order(OrderState::Done, dec!(10), dec!(1))
            .with_write_at(test_time() + Duration::hours(3));
        let cancel_1h = test_order(OrderState::Cancel, dec!(10), dec!(1))
            .with_write_at(test_time() + Duration::hours(1));
        let mut done_untimed = test_order(OrderState::Done, dec!(10), dec!(1));
        done_untimed.write_at = None;
        let draft_long = test_order(OrderState::Draft, dec!(10), dec!(1))
            .with_write_at(test_time() + Duration::hours(100));

        let summary = compute_summary(&[done_3h, cancel_1h, done_untimed, draft_long]);

        assert_eq!(summary.average_processing_time_hours, 2.0);
        assert_eq!(summary.cancelled_orders, 1);
        assert_eq!(summary.new_orders, 0);
        assert_eq!(summary.total_revenue, dec!(40));
        assert_eq!(summary.average_quantity_per_order, 1.0);
    }

    #[test]
    fn no_timed_orders_gives_zero_average_not_nan() {
        let mut done = test_order(OrderState::Done, dec!(10), dec!(2));
        done.created_at = None;

        let summary = compute_summary(&[done]);
        assert_eq!(summary.average_processing_time_hours, 0.0);
        assert_eq!(summary.average_quantity_per_order, 2.0);
    }

    #[test]
    fn orders_without_lines_still_count_towards_average_quantity() {
        let with_lines = test_order(OrderState::Sale, dec!(10), dec!(6));
        let mut without_lines = test_order(OrderState::Sale, dec!(5), dec!(0));
        without_lines.lines.clear();

        let summary = compute_summary(&[with_lines, without_lines]);
        assert_eq!(summary.average_quantity_per_order, 3.0);
        assert_eq!(summary.new_orders, 2);
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let json = serde_json::to_value(compute_summary(&[])).unwrap();
        for key in [
            "cancelledOrders",
            "newOrders",
            "averageProcessingTimeHours",
            "averageQuantityPerOrder",
            "totalRevenue",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn state_strategy() -> impl Strategy<Value = OrderState> {
            prop_oneof![
                Just(OrderState::Draft),
                Just(OrderState::Sale),
                Just(OrderState::Done),
                Just(OrderState::Cancel),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: counters never exceed the snapshot size, averages stay
            /// non-negative, and recomputing gives the same result.
            #[test]
            fn summary_is_bounded_and_idempotent(
                rows in prop::collection::vec(
                    (state_strategy(), 0u32..100_000u32, 0u32..50u32, 0i64..500i64),
                    0..40,
                )
            ) {
                let orders: Vec<Order> = rows
                    .iter()
                    .map(|(state, cents, qty, minutes)| {
                        test_order(*state, Decimal::new(*cents as i64, 2), Decimal::from(*qty))
                            .with_write_at(test_time() + Duration::minutes(*minutes))
                    })
                    .collect();

                let first = compute_summary(&orders);
                let second = compute_summary(&orders);

                prop_assert_eq!(&first, &second);
                prop_assert!(first.cancelled_orders + first.new_orders <= orders.len() as u64);
                prop_assert!(first.average_processing_time_hours >= 0.0);
                prop_assert!(first.average_quantity_per_order >= 0.0);
                prop_assert!(first.total_revenue >= Decimal::ZERO);
            }
        }
    }
}
