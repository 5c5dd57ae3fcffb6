//! Roster collection — raw odds input to a draw-ready field

use serde::{Deserialize, Serialize};

use crate::participant::Participant;

/// Odds budget a complete roster allocates, in whole points
pub const FULL_ALLOCATION: i64 = 100;

/// One raw roster row as collected by the input surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub odds_text: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, odds_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            odds_text: odds_text.into(),
        }
    }

    /// Parsed odds, if the text is a positive integer
    pub fn odds(&self) -> Option<u32> {
        self.odds_text
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v > 0)
            .and_then(|v| u32::try_from(v).ok())
    }
}

/// Build the draw field from raw roster rows
///
/// Rows with missing or non-positive odds are skipped. Blank names fall
/// back to `"Team N"` from the row's 1-based position, so a field entered
/// without names still produces distinct reveal captions.
pub fn collect_participants(entries: &[RosterEntry]) -> Vec<Participant> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let weight = entry.odds()?;
            let name = entry.name.trim();
            let name = if name.is_empty() {
                format!("Team {}", i + 1)
            } else {
                name.to_string()
            };
            Some(Participant::new(name, weight))
        })
        .collect()
}

/// Sum of every parseable odds value, valid or not
///
/// Mirrors the running total an input surface displays while rows are
/// still being edited, so negative entries drag the total down instead of
/// disappearing.
pub fn total_odds(entries: &[RosterEntry]) -> i64 {
    entries
        .iter()
        .filter_map(|e| e.odds_text.trim().parse::<i64>().ok())
        .sum()
}

/// A roster is drawable once every point of the odds budget is allocated
pub fn is_fully_allocated(entries: &[RosterEntry]) -> bool {
    total_odds(entries) == FULL_ALLOCATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_filters_and_defaults() {
        let entries = vec![
            RosterEntry::new("Ice Hawks", "40"),
            RosterEntry::new("Bad Row", "forty"),
            RosterEntry::new("", " 35 "),
            RosterEntry::new("Zeroes", "0"),
            RosterEntry::new("Negative", "-5"),
            RosterEntry::new("  Thunder  ", "25"),
        ];

        let field = collect_participants(&entries);

        assert_eq!(field.len(), 3);
        assert_eq!(field[0], Participant::new("Ice Hawks", 40));
        // Default name keeps the row's original position.
        assert_eq!(field[1], Participant::new("Team 3", 35));
        assert_eq!(field[2], Participant::new("Thunder", 25));
    }

    #[test]
    fn test_total_odds_counts_negatives() {
        let entries = vec![
            RosterEntry::new("A", "60"),
            RosterEntry::new("B", "-10"),
            RosterEntry::new("C", "nope"),
            RosterEntry::new("D", "50"),
        ];

        assert_eq!(total_odds(&entries), 100);
        assert!(is_fully_allocated(&entries));
    }

    #[test]
    fn test_allocation_gate() {
        let mut entries = vec![RosterEntry::new("A", "60"), RosterEntry::new("B", "30")];
        assert!(!is_fully_allocated(&entries));

        entries.push(RosterEntry::new("C", "10"));
        assert!(is_fully_allocated(&entries));
    }
}
