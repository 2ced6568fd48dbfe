//! # Interaction Outcomes
//!
//! The closed vocabulary of pairwise encounter results. Resolution ranks
//! outcomes: copulation outranks predation, predation outranks
//! indifference. Predation carries an orientation because either party,
//! or both at once, can be the hunter.

use serde::Serialize;

/// Which side of an ordered pair hunts the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredationOrientation {
    /// The left party hunts the right.
    Forward,
    /// The right party hunts the left.
    Reverse,
    /// Each hunts the other.
    Mutual,
}

/// Outcome of one pairwise encounter, highest-ranked applicable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interaction {
    /// Same species, opposite sexes.
    Copulation,
    /// At least one party hunts the other.
    Predation { orientation: PredationOrientation },
    /// No rule applies.
    Indifference,
}

impl PredationOrientation {
    /// The orientation as seen from the swapped pair.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
            Self::Mutual => Self::Mutual,
        }
    }

    /// Whether the left party hunts.
    pub fn forward(self) -> bool {
        matches!(self, Self::Forward | Self::Mutual)
    }

    /// Whether the right party hunts.
    pub fn reverse(self) -> bool {
        matches!(self, Self::Reverse | Self::Mutual)
    }
}

impl Interaction {
    pub fn is_copulation(self) -> bool {
        matches!(self, Self::Copulation)
    }

    pub fn is_predation(self) -> bool {
        matches!(self, Self::Predation { .. })
    }

    pub fn is_indifference(self) -> bool {
        matches!(self, Self::Indifference)
    }

    /// The outcome as seen from the swapped pair.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Predation { orientation } => Self::Predation {
                orientation: orientation.mirrored(),
            },
            symmetric => symmetric,
        }
    }

    /// Verb label for logs and transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Copulation => "copulate",
            Self::Predation { .. } => "hunt",
            Self::Indifference => "ignore",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirroring_swaps_one_sided_predation_only() {
        let forward = Interaction::Predation {
            orientation: PredationOrientation::Forward,
        };
        let reverse = Interaction::Predation {
            orientation: PredationOrientation::Reverse,
        };
        let mutual = Interaction::Predation {
            orientation: PredationOrientation::Mutual,
        };

        assert_eq!(forward.mirrored(), reverse);
        assert_eq!(reverse.mirrored(), forward);
        assert_eq!(mutual.mirrored(), mutual);
        assert_eq!(Interaction::Copulation.mirrored(), Interaction::Copulation);
        assert_eq!(Interaction::Indifference.mirrored(), Interaction::Indifference);
    }

    #[test]
    fn mutual_predation_runs_in_both_directions() {
        assert!(PredationOrientation::Mutual.forward());
        assert!(PredationOrientation::Mutual.reverse());
        assert!(PredationOrientation::Forward.forward());
        assert!(!PredationOrientation::Forward.reverse());
        assert!(!PredationOrientation::Reverse.forward());
        assert!(PredationOrientation::Reverse.reverse());
    }

    #[test]
    fn labels_are_stable_verbs() {
        assert_eq!(Interaction::Copulation.label(), "copulate");
        assert_eq!(
            Interaction::Predation {
                orientation: PredationOrientation::Mutual
            }
            .label(),
            "hunt"
        );
        assert_eq!(Interaction::Indifference.label(), "ignore");
    }
}
