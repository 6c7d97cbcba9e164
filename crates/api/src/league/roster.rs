use std::collections::HashMap;

use infra::models::SubmissionRow;
use infra::repos::ReferenceStore;

/// One display row per logical team in the submission log.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    /// 1-based display sequence.
    pub seq: usize,
    /// `"TeamA vs TeamB"`, or `None` when the match id is not in the
    /// reference list.
    pub match_label: Option<String>,
    pub name: String,
    pub mobile: String,
    /// Selected players joined with `", "` in original row order.
    pub players: String,
}

/// Strip whitespace and the stray thousands-separator commas that
/// spreadsheet round-tripping introduces into mobile numbers. Without this,
/// the same submitter splits into separate groups.
pub fn normalize_mobile(raw: &str) -> String {
    raw.replace(',', "").trim().to_string()
}

/// Group submission rows into logical teams for read-only review.
///
/// Groups are keyed by `(match_id, name, normalized mobile)` and emitted in
/// first-seen order, with each group's players joined in row order.
pub fn summarize(rows: &[SubmissionRow], reference: &ReferenceStore) -> Vec<TeamSummary> {
    let mut order: Vec<(String, String, String)> = Vec::new();
    let mut groups: HashMap<(String, String, String), Vec<String>> = HashMap::new();

    for row in rows {
        let key = (
            row.match_id.clone(),
            row.name.clone(),
            normalize_mobile(&row.mobile),
        );
        groups
            .entry(key)
            .or_insert_with_key(|k| {
                order.push(k.clone());
                Vec::new()
            })
            .push(row.player.clone());
    }

    order
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            let players = groups.remove(&key).unwrap_or_default().join(", ");
            let (match_id, name, mobile) = key;
            TeamSummary {
                seq: index + 1,
                match_label: reference.match_label(&match_id),
                name,
                mobile,
                players,
            }
        })
        .collect()
}
