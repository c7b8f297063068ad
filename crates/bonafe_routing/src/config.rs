use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigurationError,
    problem::{distance_method::DistanceMethod, kmh::Kmh},
    solver::route_costs::CostParams,
};

pub const AVERAGE_SPEED_ENV_VAR: &str = "BONAFE_AVERAGE_SPEED_KMH";
pub const POI_RADIUS_ENV_VAR: &str = "BONAFE_POI_RADIUS_KM";
pub const FUEL_PRICE_ENV_VAR: &str = "BONAFE_FUEL_PRICE";
pub const DISTANCE_METHOD_ENV_VAR: &str = "BONAFE_DISTANCE_METHOD";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlannerConfig {
    /// Used to turn distances into travel times.
    pub average_speed_kmh: Kmh,
    /// Points of interest farther than this from every stop are ignored.
    pub poi_radius_km: f64,
    /// Diesel price in BRL.
    pub fuel_price_per_litre: f64,
    pub distance_method: DistanceMethod,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            average_speed_kmh: Kmh::new(60.0),
            poi_radius_km: 30.0,
            fuel_price_per_litre: 6.0,
            distance_method: DistanceMethod::RoundedHaversine,
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by the `BONAFE_*` environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let mut config = PlannerConfig::default();

        if let Some(value) = lookup(AVERAGE_SPEED_ENV_VAR) {
            config.average_speed_kmh = Kmh::new(parse_setting(AVERAGE_SPEED_ENV_VAR, &value)?);
        }

        if let Some(value) = lookup(POI_RADIUS_ENV_VAR) {
            config.poi_radius_km = parse_setting(POI_RADIUS_ENV_VAR, &value)?;
        }

        if let Some(value) = lookup(FUEL_PRICE_ENV_VAR) {
            config.fuel_price_per_litre = parse_setting(FUEL_PRICE_ENV_VAR, &value)?;
        }

        if let Some(value) = lookup(DISTANCE_METHOD_ENV_VAR) {
            config.distance_method = match value.trim() {
                "rounded_haversine" => DistanceMethod::RoundedHaversine,
                "haversine" => DistanceMethod::Haversine,
                _ => {
                    return Err(ConfigurationError::InvalidSetting {
                        key: DISTANCE_METHOD_ENV_VAR,
                        value,
                    });
                }
            };
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.average_speed_kmh.is_valid() {
            return Err(ConfigurationError::InvalidSetting {
                key: "average_speed_kmh",
                value: self.average_speed_kmh.value().to_string(),
            });
        }

        if !self.poi_radius_km.is_finite() || self.poi_radius_km < 0.0 {
            return Err(ConfigurationError::InvalidSetting {
                key: "poi_radius_km",
                value: self.poi_radius_km.to_string(),
            });
        }

        if !self.fuel_price_per_litre.is_finite() || self.fuel_price_per_litre < 0.0 {
            return Err(ConfigurationError::InvalidSetting {
                key: "fuel_price_per_litre",
                value: self.fuel_price_per_litre.to_string(),
            });
        }

        Ok(())
    }

    pub fn cost_params(&self) -> CostParams {
        CostParams {
            fuel_price_per_litre: self.fuel_price_per_litre,
        }
    }
}

fn parse_setting<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidSetting {
            key,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.poi_radius_km, 30.0);
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            (AVERAGE_SPEED_ENV_VAR, "45"),
            (POI_RADIUS_ENV_VAR, " 12.5 "),
            (FUEL_PRICE_ENV_VAR, "5.89"),
            (DISTANCE_METHOD_ENV_VAR, "haversine"),
        ]))
        .unwrap();

        assert_eq!(config.average_speed_kmh, Kmh::new(45.0));
        assert_eq!(config.poi_radius_km, 12.5);
        assert_eq!(config.fuel_price_per_litre, 5.89);
        assert_eq!(config.distance_method, DistanceMethod::Haversine);
    }

    #[test]
    fn test_unparsable_value() {
        assert_eq!(
            PlannerConfig::from_lookup(lookup_from(&[(FUEL_PRICE_ENV_VAR, "seis reais")])),
            Err(ConfigurationError::InvalidSetting {
                key: FUEL_PRICE_ENV_VAR,
                value: String::from("seis reais"),
            })
        );
    }

    #[test]
    fn test_zero_speed_rejected() {
        assert!(matches!(
            PlannerConfig::from_lookup(lookup_from(&[(AVERAGE_SPEED_ENV_VAR, "0")])),
            Err(ConfigurationError::InvalidSetting {
                key: "average_speed_kmh",
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PlannerConfig = serde_json::from_str(r#"{ "poi_radius_km": 10.0 }"#).unwrap();
        assert_eq!(config.poi_radius_km, 10.0);
        assert_eq!(config.average_speed_kmh, Kmh::new(60.0));
    }
}
