//! Participants and draw outcomes

use serde::{Deserialize, Serialize};

use dl_reveal::{RevealPlan, RevealTiming};

/// One entrant in a weighted draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name; never empty (blank input rows get a default name
    /// during roster collection)
    pub name: String,
    /// Winning odds in whole points; must be positive to enter a draw
    pub weight: u32,
}

impl Participant {
    /// Create a participant
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Outcome of one weighted draw
///
/// `elimination_order` is a uniformly shuffled permutation of every
/// non-winner; together with `winner` it covers the whole field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// The drawn winner
    pub winner: Participant,
    /// Every non-winner, in the order they will be revealed as eliminated
    pub elimination_order: Vec<Participant>,
}

impl DrawResult {
    /// Number of participants in the original field
    pub fn field_size(&self) -> usize {
        self.elimination_order.len() + 1
    }

    /// Reveal cards for the elimination sequence
    ///
    /// `place` is the participant's final standing: the first card revealed
    /// takes last place, the final card second place.
    pub fn eliminations(&self) -> Vec<Elimination> {
        let field = self.field_size();
        self.elimination_order
            .iter()
            .enumerate()
            .map(|(i, participant)| Elimination {
                name: participant.name.clone(),
                weight: participant.weight,
                place: (field - i) as u32,
            })
            .collect()
    }

    /// Bundle the elimination reveals with pacing into a consumable plan
    pub fn reveal_plan(&self, timing: RevealTiming) -> RevealPlan<Elimination> {
        RevealPlan::new(self.eliminations(), timing)
    }
}

/// A single elimination reveal card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    /// Eliminated participant's name
    pub name: String,
    /// The odds they entered with, for the on-screen caption
    pub weight: u32,
    /// Final standing (2 = runner-up)
    pub place: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> DrawResult {
        DrawResult {
            winner: Participant::new("A", 50),
            elimination_order: vec![Participant::new("C", 20), Participant::new("B", 30)],
        }
    }

    #[test]
    fn test_places_count_down_from_field_size() {
        let result = sample_result();
        let cards = result.eliminations();

        assert_eq!(result.field_size(), 3);
        assert_eq!(cards.len(), 2);
        assert_eq!((cards[0].name.as_str(), cards[0].place), ("C", 3));
        assert_eq!((cards[1].name.as_str(), cards[1].place), ("B", 2));
    }

    #[test]
    fn test_reveal_plan_carries_timing() {
        let result = sample_result();
        let plan = result.reveal_plan(RevealTiming::normal());

        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.total_duration_ms(),
            RevealTiming::normal().sequence_duration_ms(2)
        );
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();

        assert!(json.contains("winner"));
        assert!(json.contains("elimination_order"));
    }
}
