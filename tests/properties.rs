//! Property tests for the divider and the bill distributor.
//!
//! Hours are generated in quarter-hour steps and drawers as whole-bill
//! counts, which is what an operator can actually enter.

use proptest::prelude::*;
use rust_decimal::Decimal;

use gratuity_engine::calculation::{
    assign_bills, build_allocations, compute_distribution, compute_division,
};
use gratuity_engine::config::{EngineConfig, LeftoverPolicy};
use gratuity_engine::models::{DenominationInventory, Worker};

fn crew_strategy() -> impl Strategy<Value = Vec<Worker>> {
    // 0.25h to 16h per worker
    prop::collection::vec(1u32..=64, 1..=20).prop_map(|quarters| {
        quarters
            .into_iter()
            .enumerate()
            .map(|(index, q)| {
                Worker::new(index, format!("worker {index}"), Decimal::new(i64::from(q) * 25, 2))
            })
            .collect()
    })
}

fn drawer_strategy() -> impl Strategy<Value = DenominationInventory> {
    // one count per default denomination: 100, 50, 20, 10, 5, 2, 1
    prop::collection::vec(0u32..=12, 7)
        .prop_filter("drawer must hold at least one bill", |counts| {
            counts.iter().any(|&c| c > 0)
        })
        .prop_map(|counts| {
            let config = EngineConfig::default();
            let pairs: Vec<(u32, u32)> = config
                .denominations()
                .face_values()
                .iter()
                .copied()
                .zip(counts)
                .collect();
            DenominationInventory::from_counts(config.denominations(), pairs)
                .expect("default denominations")
        })
}

fn hourly_rate(crew: &[Worker], drawer: &DenominationInventory) -> Decimal {
    let total_hours: Decimal = crew.iter().map(|w| w.hours).sum();
    drawer.total_cash() / total_hours
}

proptest! {
    #[test]
    fn test_targets_never_exceed_cash_and_fall_short_by_less_than_one_per_worker(
        crew in crew_strategy(),
        drawer in drawer_strategy(),
    ) {
        let cash = drawer.total_cash();
        let allocations =
            build_allocations(&crew, hourly_rate(&crew, &drawer), drawer.counts()).unwrap();
        let targets: Decimal = allocations.iter().map(|a| a.target).sum();

        prop_assert!(targets <= cash);
        prop_assert!(cash - targets < Decimal::from(crew.len()));
    }

    #[test]
    fn test_no_worker_is_paid_past_their_target(
        crew in crew_strategy(),
        drawer in drawer_strategy(),
    ) {
        let mut allocations =
            build_allocations(&crew, hourly_rate(&crew, &drawer), drawer.counts()).unwrap();
        assign_bills(&mut allocations, &drawer).unwrap();

        for allocation in &allocations {
            prop_assert!(allocation.assigned_total <= allocation.target);
            prop_assert_eq!(allocation.bills.total(), allocation.assigned_total);
        }
    }

    #[test]
    fn test_leftover_stays_within_cash(
        crew in crew_strategy(),
        drawer in drawer_strategy(),
    ) {
        let cash = drawer.total_cash();
        let mut allocations =
            build_allocations(&crew, hourly_rate(&crew, &drawer), drawer.counts()).unwrap();
        let summary = assign_bills(&mut allocations, &drawer).unwrap();
        let leftover = cash - summary.assigned_total;

        prop_assert!(leftover >= Decimal::ZERO);
        prop_assert!(leftover <= cash);
        prop_assert_eq!(summary.unassigned.total(), leftover);
    }

    #[test]
    fn test_distribution_is_repeatable(
        crew in crew_strategy(),
        drawer in drawer_strategy(),
        flat in any::<bool>(),
    ) {
        let config = if flat {
            EngineConfig::default().with_leftover_policy(LeftoverPolicy::FlatAllowance)
        } else {
            EngineConfig::default()
        };

        let first = compute_distribution(&crew, &drawer, &config);
        let second = compute_distribution(&crew, &drawer, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_division_is_cent_exact_within_rounding_drift(
        crew in crew_strategy(),
        cents in 1i64..=500_000,
    ) {
        let total = Decimal::new(cents, 2);
        let result = compute_division(&crew, Some(total)).unwrap();

        for entry in &result.per_worker {
            prop_assert!(entry.amount.scale() <= 2);
        }
        let drift = (result.total_paid - total).abs();
        prop_assert!(drift <= Decimal::new(5, 3) * Decimal::from(crew.len()));
    }
}
