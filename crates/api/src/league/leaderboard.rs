use std::collections::HashMap;

use infra::models::ResultRow;

/// One ranked leaderboard line. Derived on every view, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    pub mobile: String,
    pub total_points: f64,
}

/// Rank all submitters for one match: filter to the match, sum points per
/// mobile, sort descending. The sort is stable and groups are formed in
/// first-seen order, so ties keep original row order.
pub fn compute(match_id: &str, rows: &[ResultRow]) -> Vec<RankedEntry> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for row in rows.iter().filter(|r| r.match_id == match_id) {
        if !totals.contains_key(row.mobile.as_str()) {
            order.push(&row.mobile);
        }
        *totals.entry(&row.mobile).or_insert(0.0) += row.points;
    }

    let mut entries: Vec<(&str, f64)> = order
        .into_iter()
        .map(|m| (m, totals.get(m).copied().unwrap_or(0.0)))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (mobile, total_points))| RankedEntry {
            rank: index + 1,
            mobile: mobile.to_string(),
            total_points,
        })
        .collect()
}

/// Match ids present in the results log, first-seen order, deduplicated.
/// Clients use this to offer only matches that actually have results.
pub fn match_ids(rows: &[ResultRow]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for row in rows {
        if !ids.iter().any(|id| id == &row.match_id) {
            ids.push(row.match_id.clone());
        }
    }
    ids
}
