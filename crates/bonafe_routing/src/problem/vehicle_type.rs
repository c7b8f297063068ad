use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Cost parameters of the vehicle doing the deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VehicleType {
    pub id: String,
    pub name: String,
    /// Multiplier applied to a toll plaza's base tariff (1 for cars, number of axles for trucks).
    pub toll_class: u8,
    pub fuel_consumption_km_per_litre: f64,
    /// Heavy vehicles must pull into weigh stations along the way.
    pub subject_to_weighing: bool,
}

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    toll_class: u8,
    fuel_consumption_km_per_litre: f64,
    subject_to_weighing: bool,
}

const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        id: "car",
        name: "Carro",
        toll_class: 1,
        fuel_consumption_km_per_litre: 10.0,
        subject_to_weighing: false,
    },
    CatalogEntry {
        id: "van",
        name: "Van",
        toll_class: 1,
        fuel_consumption_km_per_litre: 7.5,
        subject_to_weighing: false,
    },
    CatalogEntry {
        id: "truck-2-axle",
        name: "Caminhão 2 eixos",
        toll_class: 2,
        fuel_consumption_km_per_litre: 4.0,
        subject_to_weighing: true,
    },
    CatalogEntry {
        id: "truck-3-axle",
        name: "Caminhão 3 eixos",
        toll_class: 3,
        fuel_consumption_km_per_litre: 3.2,
        subject_to_weighing: true,
    },
    CatalogEntry {
        id: "truck-6-axle",
        name: "Carreta 6 eixos",
        toll_class: 6,
        fuel_consumption_km_per_litre: 2.0,
        subject_to_weighing: true,
    },
];

impl From<&CatalogEntry> for VehicleType {
    fn from(entry: &CatalogEntry) -> Self {
        VehicleType {
            id: entry.id.to_owned(),
            name: entry.name.to_owned(),
            toll_class: entry.toll_class,
            fuel_consumption_km_per_litre: entry.fuel_consumption_km_per_litre,
            subject_to_weighing: entry.subject_to_weighing,
        }
    }
}

impl VehicleType {
    pub fn catalog() -> Vec<VehicleType> {
        CATALOG.iter().map(VehicleType::from).collect()
    }

    pub fn from_catalog(id: &str) -> Result<VehicleType, ConfigurationError> {
        CATALOG
            .iter()
            .find(|entry| entry.id == id)
            .map(VehicleType::from)
            .ok_or_else(|| ConfigurationError::UnknownVehicleType(id.to_owned()))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.toll_class == 0 {
            return Err(ConfigurationError::InvalidVehicleField {
                vehicle_type: self.id.clone(),
                field: "toll_class",
                value: 0.0,
            });
        }

        let consumption = self.fuel_consumption_km_per_litre;
        if !consumption.is_finite() || consumption <= 0.0 {
            return Err(ConfigurationError::InvalidVehicleField {
                vehicle_type: self.id.clone(),
                field: "fuel_consumption_km_per_litre",
                value: consumption,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        for vehicle_type in VehicleType::catalog() {
            assert!(vehicle_type.validate().is_ok(), "{}", vehicle_type.id);
        }
    }

    #[test]
    fn test_from_catalog() {
        let truck = VehicleType::from_catalog("truck-2-axle").unwrap();
        assert_eq!(truck.toll_class, 2);
        assert!(truck.subject_to_weighing);

        assert_eq!(
            VehicleType::from_catalog("bicycle"),
            Err(ConfigurationError::UnknownVehicleType(String::from(
                "bicycle"
            )))
        );
    }

    #[test]
    fn test_invalid_consumption() {
        let mut vehicle_type = VehicleType::from_catalog("van").unwrap();
        vehicle_type.fuel_consumption_km_per_litre = 0.0;

        assert_eq!(
            vehicle_type.validate(),
            Err(ConfigurationError::InvalidVehicleField {
                vehicle_type: String::from("van"),
                field: "fuel_consumption_km_per_litre",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_invalid_toll_class() {
        let mut vehicle_type = VehicleType::from_catalog("car").unwrap();
        vehicle_type.toll_class = 0;

        assert!(matches!(
            vehicle_type.validate(),
            Err(ConfigurationError::InvalidVehicleField {
                field: "toll_class",
                ..
            })
        ));
    }
}
