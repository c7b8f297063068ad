use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div, Sub},
};

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// NaN sorts after every finite distance.
impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for Kilometers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{} km", self.0)
        } else {
            write!(f, "{:.1} km", self.0)
        }
    }
}

impl From<f64> for Kilometers {
    fn from(value: f64) -> Self {
        Kilometers::new(value)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Sub for Kilometers {
    type Output = Kilometers;

    fn sub(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 - other.0)
    }
}

/// Travel time at `speed`. A speed that isn't positive and finite, or a
/// non-finite distance, saturates to [`SignedDuration::MAX`].
impl Div<Kmh> for Kilometers {
    type Output = SignedDuration;

    fn div(self, speed: Kmh) -> SignedDuration {
        if !speed.is_valid() {
            return SignedDuration::MAX;
        }

        let seconds = self.0 * 3600.0 / speed.value();
        SignedDuration::try_from_secs_f64(seconds).unwrap_or(SignedDuration::MAX)
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}
