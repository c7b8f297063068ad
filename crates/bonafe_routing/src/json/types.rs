use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::{ConfigurationError, RoutingError},
    planner::plan_route::RouteRequest,
    problem::{point_of_interest::PointOfInterest, stop::Stop, vehicle_type::VehicleType},
};

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "RouteRequest")]
pub struct JsonRouteRequest {
    pub stops: Vec<Stop>,
    pub vehicle_type: JsonVehicleTypeRef,
    pub pois: Option<Vec<PointOfInterest>>,
}

/// Either the id of a built-in vehicle type or a full description.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum JsonVehicleTypeRef {
    Catalog(String),
    Custom(JsonVehicleType),
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "VehicleType")]
pub struct JsonVehicleType {
    pub id: String,
    pub name: Option<String>,
    pub toll_class: Option<u8>,
    pub fuel_consumption_km_per_litre: Option<f64>,
    pub subject_to_weighing: Option<bool>,
}

impl TryFrom<JsonVehicleType> for VehicleType {
    type Error = ConfigurationError;

    fn try_from(value: JsonVehicleType) -> Result<Self, Self::Error> {
        let missing = |field: &'static str| ConfigurationError::MissingVehicleField {
            vehicle_type: value.id.clone(),
            field,
        };

        let vehicle_type = VehicleType {
            name: value.name.clone().unwrap_or_else(|| value.id.clone()),
            toll_class: value.toll_class.ok_or_else(|| missing("toll_class"))?,
            fuel_consumption_km_per_litre: value
                .fuel_consumption_km_per_litre
                .ok_or_else(|| missing("fuel_consumption_km_per_litre"))?,
            subject_to_weighing: value.subject_to_weighing.unwrap_or(false),
            id: value.id,
        };

        vehicle_type.validate()?;

        Ok(vehicle_type)
    }
}

impl JsonVehicleTypeRef {
    pub fn resolve(self) -> Result<VehicleType, ConfigurationError> {
        match self {
            JsonVehicleTypeRef::Catalog(id) => VehicleType::from_catalog(&id),
            JsonVehicleTypeRef::Custom(vehicle_type) => vehicle_type.try_into(),
        }
    }
}

impl JsonRouteRequest {
    #[instrument(skip_all, level = "debug")]
    pub fn build_request(self) -> Result<RouteRequest, RoutingError> {
        Ok(RouteRequest {
            stops: self.stops,
            vehicle_type: self.vehicle_type.resolve()?,
            pois: self.pois.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::point_of_interest::PoiKind;

    #[test]
    fn test_parse_with_catalog_vehicle() {
        let json = r#"{
            "stops": [
                { "id": "depot", "name": "Depósito", "lat": -29.1699, "lng": -51.5185, "isOrigin": true },
                { "id": "caxias", "name": "Caxias do Sul", "lat": -29.1678, "lng": -51.1794 }
            ],
            "vehicle_type": "truck-2-axle",
            "pois": [
                { "id": "t1", "name": "Pedágio", "lat": -29.2, "lng": -51.3, "kind": { "type": "toll", "base_tariff": 7.5 } },
                { "id": "w1", "name": "Balança", "lat": -29.2, "lng": -51.4, "kind": { "type": "weigh_station" } }
            ]
        }"#;

        let parsed: JsonRouteRequest = serde_json::from_str(json).unwrap();
        let request = parsed.build_request().unwrap();

        assert!(request.stops[0].is_origin);
        assert!(!request.stops[1].is_origin);
        assert_eq!(request.vehicle_type.id, "truck-2-axle");
        assert_eq!(request.pois[0].kind, PoiKind::Toll { base_tariff: 7.5 });
        assert_eq!(request.pois[1].kind, PoiKind::WeighStation);
    }

    #[test]
    fn test_custom_vehicle() {
        let json = r#"{
            "stops": [{ "id": "depot", "name": "Depot", "lat": 0.0, "lng": 0.0, "isOrigin": true }],
            "vehicle_type": { "id": "vuc", "toll_class": 2, "fuel_consumption_km_per_litre": 6.0 }
        }"#;

        let parsed: JsonRouteRequest = serde_json::from_str(json).unwrap();
        let request = parsed.build_request().unwrap();

        assert_eq!(request.vehicle_type.name, "vuc");
        assert!(!request.vehicle_type.subject_to_weighing);
        assert!(request.pois.is_empty());
    }

    #[test]
    fn test_custom_vehicle_missing_field() {
        let json = r#"{
            "stops": [{ "id": "depot", "name": "Depot", "lat": 0.0, "lng": 0.0, "isOrigin": true }],
            "vehicle_type": { "id": "vuc", "toll_class": 2 }
        }"#;

        let parsed: JsonRouteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            parsed.build_request(),
            Err(RoutingError::Configuration(
                ConfigurationError::MissingVehicleField {
                    vehicle_type: String::from("vuc"),
                    field: "fuel_consumption_km_per_litre",
                }
            ))
        );
    }

    #[test]
    fn test_unknown_catalog_vehicle() {
        let json = r#"{ "stops": [], "vehicle_type": "hovercraft" }"#;
        let parsed: JsonRouteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            parsed.build_request(),
            Err(RoutingError::Configuration(
                ConfigurationError::UnknownVehicleType(String::from("hovercraft"))
            ))
        );
    }
}
