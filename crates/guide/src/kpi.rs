//! Maintenance KPI calculator.
//!
//! Each KPI is a single division guarded by a positivity check on its
//! denominator. A KPI whose guard fails, or whose arithmetic overflows,
//! is left out of the report rather than reported as zero. Results are
//! rounded half away from zero to two decimal places; a value too large
//! to carry two places is left out as well.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Raw figures for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiInputs {
    /// Total uptime, hours.
    pub uptime: Decimal,
    pub failures: Decimal,
    /// Total downtime, hours.
    pub downtime: Decimal,
    pub repairs: Decimal,
    pub maintenance_cost: Decimal,
    /// Total output (MWh, tons, ...).
    pub output: Decimal,
    pub scheduled_jobs: Decimal,
    pub completed_on_time: Decimal,
    pub planned_budget: Decimal,
    pub actual_spend: Decimal,
}

impl Default for KpiInputs {
    fn default() -> Self {
        KpiInputs {
            uptime: Decimal::from(1000),
            failures: Decimal::from(5),
            downtime: Decimal::from(50),
            repairs: Decimal::from(5),
            maintenance_cost: Decimal::from(15000),
            output: Decimal::from(1000),
            scheduled_jobs: Decimal::from(120),
            completed_on_time: Decimal::from(108),
            planned_budget: Decimal::from(20000),
            actual_spend: Decimal::from(18500),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KpiReport {
    /// Mean time between failures, hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtbf: Option<Decimal>,
    /// Mean time to repair, hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mttr: Option<Decimal>,
    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<Decimal>,
    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_compliance: Option<Decimal>,
    /// Percent; negative means under budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_variance: Option<Decimal>,
}

impl KpiReport {
    pub fn compute(inputs: &KpiInputs) -> KpiReport {
        let hundred = Decimal::ONE_HUNDRED;
        let report = KpiReport {
            mtbf: ratio(inputs.uptime, inputs.failures),
            mttr: ratio(inputs.downtime, inputs.repairs),
            availability: inputs
                .uptime
                .checked_mul(hundred)
                .zip(inputs.uptime.checked_add(inputs.downtime))
                .and_then(|(n, total)| ratio(n, total)),
            cost_per_unit: ratio(inputs.maintenance_cost, inputs.output),
            schedule_compliance: inputs
                .completed_on_time
                .checked_mul(hundred)
                .and_then(|n| ratio(n, inputs.scheduled_jobs)),
            budget_variance: inputs
                .actual_spend
                .checked_sub(inputs.planned_budget)
                .and_then(|d| d.checked_mul(hundred))
                .and_then(|n| ratio(n, inputs.planned_budget)),
        };
        tracing::trace!(?report, "kpis computed");
        report
    }

    /// Name, value and unit of every defined KPI, in display order.
    pub fn rows(&self) -> Vec<(&'static str, Decimal, &'static str)> {
        [
            ("MTBF", self.mtbf, "hours"),
            ("MTTR", self.mttr, "hours"),
            ("Availability", self.availability, "%"),
            ("Cost per unit", self.cost_per_unit, "$"),
            ("Schedule Compliance", self.schedule_compliance, "%"),
            ("Budget Variance", self.budget_variance, "%"),
        ]
        .into_iter()
        .filter_map(|(name, value, unit)| value.map(|v| (name, v, unit)))
        .collect()
    }
}

/// `numerator / denominator` to two places, or `None` unless the
/// denominator is strictly positive and the quotient fits with two
/// places to spare.
fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator <= Decimal::ZERO {
        return None;
    }
    let mut value = numerator
        .checked_div(denominator)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    (value.scale() == 2).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn default_inputs() {
        let r = KpiReport::compute(&KpiInputs::default());
        assert_eq!(r.mtbf, Some(dec("200.00")));
        assert_eq!(r.mttr, Some(dec("10.00")));
        assert_eq!(r.availability, Some(dec("95.24")));
        assert_eq!(r.cost_per_unit, Some(dec("15.00")));
        assert_eq!(r.schedule_compliance, Some(dec("90.00")));
        assert_eq!(r.budget_variance, Some(dec("-7.50")));
        assert_eq!(r.rows().len(), 6);
    }

    #[test]
    fn values_carry_two_decimal_places() {
        let r = KpiReport::compute(&KpiInputs::default());
        assert_eq!(r.mtbf.unwrap().to_string(), "200.00");
        assert_eq!(r.budget_variance.unwrap().to_string(), "-7.50");
    }

    #[test]
    fn zero_denominators_omit_kpis() {
        let inputs = KpiInputs {
            failures: Decimal::ZERO,
            repairs: Decimal::ZERO,
            output: Decimal::ZERO,
            scheduled_jobs: Decimal::ZERO,
            planned_budget: Decimal::ZERO,
            ..KpiInputs::default()
        };
        let r = KpiReport::compute(&inputs);
        assert_eq!(r.mtbf, None);
        assert_eq!(r.mttr, None);
        assert_eq!(r.cost_per_unit, None);
        assert_eq!(r.schedule_compliance, None);
        assert_eq!(r.budget_variance, None);
        assert_eq!(r.availability, Some(dec("95.24")));
        assert_eq!(r.rows().len(), 1);
    }

    #[test]
    fn negative_denominator_omits_kpi() {
        let inputs = KpiInputs {
            failures: dec("-1"),
            ..KpiInputs::default()
        };
        assert_eq!(KpiReport::compute(&inputs).mtbf, None);
    }

    #[test]
    fn availability_needs_positive_total_time() {
        let inputs = KpiInputs {
            uptime: Decimal::ZERO,
            downtime: Decimal::ZERO,
            ..KpiInputs::default()
        };
        assert_eq!(KpiReport::compute(&inputs).availability, None);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1 / 8 = 0.125
        assert_eq!(ratio(dec("1"), dec("8")), Some(dec("0.13")));
        assert_eq!(ratio(dec("-1"), dec("8")), Some(dec("-0.13")));
    }

    #[test]
    fn overflowing_inputs_omit_kpis() {
        let inputs = KpiInputs {
            // uptime * 100 still fits; uptime + downtime does not.
            uptime: dec("792281625142643375935439503"),
            downtime: Decimal::MAX,
            actual_spend: Decimal::MAX,
            planned_budget: Decimal::MIN,
            ..KpiInputs::default()
        };
        let r = KpiReport::compute(&inputs);
        assert_eq!(r.availability, None);
        assert_eq!(r.budget_variance, None);
        assert_eq!(r.cost_per_unit, Some(dec("15.00")));
    }

    #[test]
    fn huge_quotients_are_left_out() {
        // 28 integer digits leave no room for two decimal places.
        let r = KpiReport::compute(&KpiInputs {
            uptime: Decimal::MAX,
            failures: dec("5"),
            ..KpiInputs::default()
        });
        assert_eq!(r.mtbf, None);
        let big = dec("100000000000000000000000000");
        assert_eq!(ratio(big, Decimal::ONE).map(|v| v.scale()), Some(2));
    }

    #[test]
    fn serializes_omitting_undefined() {
        let inputs = KpiInputs {
            failures: Decimal::ZERO,
            ..KpiInputs::default()
        };
        let v = serde_json::to_value(KpiReport::compute(&inputs)).unwrap();
        assert!(v.get("mtbf").is_none());
        assert_eq!(v["mttr"], "10.00");
    }
}
