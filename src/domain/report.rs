use crate::domain::reservation::{round2, Reservation};
use std::collections::BTreeMap;

/// Aggregates for one (year, month) bucket, keyed by arrival date.
#[derive(Debug, PartialEq)]
pub struct MonthlyFigures {
    pub year: i32,
    pub month: u32,
    pub stays: usize,
    pub nights: i64,
    pub gross: f64,
    pub net: f64,
    pub charges: f64,
    pub gross_per_night: f64,
    pub net_per_night: f64,
}

#[derive(Debug, Default, PartialEq)]
pub struct Totals {
    pub stays: usize,
    pub nights: i64,
    pub gross: f64,
    pub net: f64,
    pub charges: f64,
    pub margin_pct: f64,
    pub gross_per_night: f64,
    pub net_per_night: f64,
}

#[derive(Debug, PartialEq)]
pub struct ClientSummary {
    pub name: String,
    pub stays: usize,
    pub nights: i64,
    pub gross: f64,
}

fn per_night(amount: f64, nights: i64) -> f64 {
    if nights == 0 {
        0.0
    } else {
        round2(amount / nights as f64)
    }
}

/// Per-month figures, sorted by (year, month) ascending.
pub fn monthly_figures(rows: &[Reservation]) -> Vec<MonthlyFigures> {
    let mut buckets: BTreeMap<(i32, u32), (usize, i64, f64, f64, f64)> = BTreeMap::new();
    for r in rows {
        let b = buckets.entry((r.year, r.month)).or_default();
        b.0 += 1;
        b.1 += r.nights;
        b.2 += r.gross_price;
        b.3 += r.net_price;
        b.4 += r.charges;
    }

    buckets
        .into_iter()
        .map(|((year, month), (stays, nights, gross, net, charges))| MonthlyFigures {
            year,
            month,
            stays,
            nights,
            gross: round2(gross),
            net: round2(net),
            charges: round2(charges),
            gross_per_night: per_night(gross, nights),
            net_per_night: per_night(net, nights),
        })
        .collect()
}

pub fn totals(rows: &[Reservation]) -> Totals {
    let nights: i64 = rows.iter().map(|r| r.nights).sum();
    let gross: f64 = rows.iter().map(|r| r.gross_price).sum();
    let net: f64 = rows.iter().map(|r| r.net_price).sum();
    let charges: f64 = rows.iter().map(|r| r.charges).sum();

    Totals {
        stays: rows.len(),
        nights,
        gross: round2(gross),
        net: round2(net),
        charges: round2(charges),
        margin_pct: if gross == 0.0 {
            0.0
        } else {
            round2(charges / gross * 100.0)
        },
        gross_per_night: per_night(gross, nights),
        net_per_night: per_night(net, nights),
    }
}

/// Per-guest history, sorted by name.
pub fn client_summaries(rows: &[Reservation]) -> Vec<ClientSummary> {
    let mut buckets: BTreeMap<String, (usize, i64, f64)> = BTreeMap::new();
    for r in rows {
        let b = buckets.entry(r.client_name.clone()).or_default();
        b.0 += 1;
        b.1 += r.nights;
        b.2 += r.gross_price;
    }

    buckets
        .into_iter()
        .map(|(name, (stays, nights, gross))| ClientSummary {
            name,
            stays,
            nights,
            gross: round2(gross),
        })
        .collect()
}
