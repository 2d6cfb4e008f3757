//! Wizard steps and the transitions between them.

use std::fmt;

/// Workflow step. Steps are ordered; the wizard starts at `DateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Pick date, time slot and party size
    #[default]
    DateTime,
    /// Pick one of the available tables
    Tables,
    /// Enter contact details
    Details,
    /// Booking confirmed by the service
    Confirmation,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateTime => "date_time",
            Self::Tables => "tables",
            Self::Details => "details",
            Self::Confirmation => "confirmation",
        }
    }

    /// 1-based position, for "step n of 4" progress displays
    pub fn number(&self) -> u8 {
        match self {
            Self::DateTime => 1,
            Self::Tables => 2,
            Self::Details => 3,
            Self::Confirmation => 4,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step-changing trigger.
///
/// Only the wizard applies transitions; `target` is the complete table of
/// legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Availability check succeeded
    AvailabilityLoaded,
    /// Table chosen, move on to contact details
    ContinueToDetails,
    /// No tables offered, go back and change the search
    TryDifferentTime,
    /// Step back one page
    Back,
    /// Booking created by the service
    BookingConfirmed,
    /// Start a new reservation after confirmation
    Reset,
}

impl Transition {
    /// Destination step when fired from `from`, or `None` if not allowed
    pub fn target(self, from: Step) -> Option<Step> {
        match (from, self) {
            (Step::DateTime, Self::AvailabilityLoaded) => Some(Step::Tables),
            (Step::Tables, Self::ContinueToDetails) => Some(Step::Details),
            (Step::Tables, Self::TryDifferentTime) => Some(Step::DateTime),
            (Step::Tables, Self::Back) => Some(Step::DateTime),
            (Step::Details, Self::Back) => Some(Step::Tables),
            (Step::Details, Self::BookingConfirmed) => Some(Step::Confirmation),
            (Step::Confirmation, Self::Reset) => Some(Step::DateTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvailabilityLoaded => "load availability",
            Self::ContinueToDetails => "continue to details",
            Self::TryDifferentTime => "try a different time",
            Self::Back => "go back",
            Self::BookingConfirmed => "confirm the booking",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STEPS: [Step; 4] = [Step::DateTime, Step::Tables, Step::Details, Step::Confirmation];

    #[test]
    fn test_forward_path_is_linear() {
        assert_eq!(Transition::AvailabilityLoaded.target(Step::DateTime), Some(Step::Tables));
        assert_eq!(Transition::ContinueToDetails.target(Step::Tables), Some(Step::Details));
        assert_eq!(Transition::BookingConfirmed.target(Step::Details), Some(Step::Confirmation));
    }

    #[test]
    fn test_forward_transitions_only_advance_one_step() {
        for from in ALL_STEPS {
            for t in [
                Transition::AvailabilityLoaded,
                Transition::ContinueToDetails,
                Transition::BookingConfirmed,
            ] {
                if let Some(to) = t.target(from) {
                    assert_eq!(to.number(), from.number() + 1, "{t} from {from}");
                }
            }
        }
    }

    #[test]
    fn test_back_is_not_available_at_the_ends() {
        assert_eq!(Transition::Back.target(Step::DateTime), None);
        assert_eq!(Transition::Back.target(Step::Confirmation), None);
        assert_eq!(Transition::Back.target(Step::Details), Some(Step::Tables));
    }

    #[test]
    fn test_reset_only_from_confirmation() {
        for from in ALL_STEPS {
            let expected = (from == Step::Confirmation).then_some(Step::DateTime);
            assert_eq!(Transition::Reset.target(from), expected);
        }
    }
}
