//! Step legality rules for moving between adjacent cells.

use crate::grid::Elevation;

/// Decides whether a move from one elevation to the next is allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRule {
    /// Walking forward: climb at most `max_climb`, drop any amount
    Ascend { max_climb: u8 },
    /// The same walk traced backward: the destination may be at most
    /// `max_climb` below the source, any amount above
    Descend { max_climb: u8 },
}

impl StepRule {
    /// Forward rule for the hill-climbing puzzle
    pub const CLIMB: StepRule = StepRule::Ascend { max_climb: 1 };

    /// [`StepRule::CLIMB`] applied from the end point back towards the start
    pub const CLIMB_REVERSED: StepRule = StepRule::CLIMB.reversed();

    pub fn is_legal(self, from: Elevation, to: Elevation) -> bool {
        let rise = i16::from(to) - i16::from(from);
        match self {
            StepRule::Ascend { max_climb } => rise <= i16::from(max_climb),
            StepRule::Descend { max_climb } => -rise <= i16::from(max_climb),
        }
    }

    /// The rule that accepts exactly the reversed moves of this one
    pub const fn reversed(self) -> StepRule {
        match self {
            StepRule::Ascend { max_climb } => StepRule::Descend { max_climb },
            StepRule::Descend { max_climb } => StepRule::Ascend { max_climb },
        }
    }
}
