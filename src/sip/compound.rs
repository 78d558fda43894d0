use crate::sip::monthly::MonthlyChange;
use chrono::NaiveDate;

//rounds a snapshot value to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//formats a month label as MM-YYYY; a date that fails to parse under M/D/YYYY
//falls back to the raw string
fn month_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y") {
        Ok(parsed) => parsed.format("%m-%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

fn step(value: f64, change: f64, contribution: f64, at_period_start: bool) -> f64 {
    if at_period_start {
        (value + contribution) * (1.0 + change)
    } else {
        value * (1.0 + change) + contribution
    }
}

//runs the fixed-contribution compounding recurrence over two parallel
//monthly-return series
//
//at-period-start: v = (v + contribution) * (1 + r)
//at-period-end:   v = v * (1 + r) + contribution
//
//each month depends on the prior accumulated value, so the loop runs in
//strict month order. the accumulators carry full precision between months;
//only the emitted snapshots are rounded. labels come from series 1's dates.
pub fn compound(
    changes1: &[MonthlyChange],
    changes2: &[MonthlyChange],
    contribution: f64,
    at_period_start: bool,
) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let months = changes1.len().min(changes2.len());
    let mut labels = Vec::with_capacity(months);
    let mut values1 = Vec::with_capacity(months);
    let mut values2 = Vec::with_capacity(months);

    let mut v1 = 0.0;
    let mut v2 = 0.0;
    for i in 0..months {
        v1 = step(v1, changes1[i].change, contribution, at_period_start);
        v2 = step(v2, changes2[i].change, contribution, at_period_start);

        labels.push(month_label(&changes1[i].date));
        values1.push(round2(v1));
        values2.push(round2(v2));
    }

    (labels, values1, values2)
}
