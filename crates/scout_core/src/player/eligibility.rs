//! Youth eligibility: age-banded caps on the primary stat of a player's position.
//!
//! | Age    | GK | DF | MF | FW |
//! |--------|----|----|----|----|
//! | ≥ 22   | 19 | 17 | 17 | 19 |
//! | 19–21  | 20 | 18 | 18 | 20 |
//! | ≤ 18   | 22 | 20 | 20 | 22 |

use crate::models::{PlayerRecord, Position};

#[derive(Debug, Clone, Copy)]
struct AgeBand {
    min_age: u32,
    max_age: u32,
    /// Caps in GK, DF, MF, FW order
    caps: [f64; 4],
}

impl AgeBand {
    fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Evaluated top to bottom; first matching band wins.
const AGE_BANDS: [AgeBand; 3] = [
    AgeBand {
        min_age: 22,
        max_age: u32::MAX,
        caps: [19.0, 17.0, 17.0, 19.0],
    },
    AgeBand {
        min_age: 19,
        max_age: 21,
        caps: [20.0, 18.0, 18.0, 20.0],
    },
    AgeBand {
        min_age: 0,
        max_age: 18,
        caps: [22.0, 20.0, 20.0, 22.0],
    },
];

/// Highest primary-stat value a player of this age may have and still count as youth.
pub fn youth_cap(age: u32, position: Position) -> Option<f64> {
    AGE_BANDS
        .iter()
        .find(|band| band.contains(age))
        .map(|band| band.caps[position.rank() as usize])
}

/// Whether the record's primary stat for `position` is within its age band's cap.
///
/// Fails closed: no matching band or a missing stat means not eligible.
pub fn is_youth_eligible(record: &PlayerRecord, position: Position) -> bool {
    let Some(cap) = youth_cap(record.age, position) else {
        return false;
    };
    record
        .stat(position.primary_stat())
        .is_some_and(|value| value <= cap)
}
