use geo::{Bearing, Haversine};

use crate::problem::{distance_method::DistanceMethod, kilometers::Kilometers};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in decimal degrees.
/// NaN coordinates yield NaN.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            point: geo::Point::new(lng, lat),
        }
    }

    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lng().is_finite()
    }

    pub fn haversine_km(&self, to: &Location) -> f64 {
        haversine_km(self.lat(), self.lng(), to.lat(), to.lng())
    }

    pub fn distance(&self, to: &Location, method: DistanceMethod) -> Kilometers {
        let km = self.haversine_km(to);
        match method {
            DistanceMethod::RoundedHaversine => Kilometers::new(km.round()),
            DistanceMethod::Haversine => Kilometers::new(km),
        }
    }

    /// Initial great-circle bearing towards `dest`, in degrees clockwise from north,
    /// within `[0, 360)`.
    pub fn bearing(&self, dest: &Self) -> f64 {
        Haversine.bearing(self.point, dest.point).rem_euclid(360.0)
    }
}
