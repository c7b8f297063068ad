use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kmh(f64);

impl Kmh {
    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidInputError::InvalidSpeed(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(Kmh::new(60.0).validate(), Ok(()));
        assert_eq!(
            Kmh::new(0.0).validate(),
            Err(InvalidInputError::InvalidSpeed(0.0))
        );
        assert_eq!(
            Kmh::new(-60.0).validate(),
            Err(InvalidInputError::InvalidSpeed(-60.0))
        );
        assert!(matches!(
            Kmh::new(f64::NAN).validate(),
            Err(InvalidInputError::InvalidSpeed(value)) if value.is_nan()
        ));
        assert!(Kmh::new(f64::INFINITY).validate().is_err());
    }
}
