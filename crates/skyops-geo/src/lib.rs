use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const EARTH_RADIUS_M: f64 = 6_371_000.0;
const METERS_PER_DEG: f64 = EARTH_RADIUS_M * PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Equirectangular ground distance. Accurate to well under a percent at
/// survey-site scale, which is all the planner needs.
pub fn distance_m(a: LatLng, b: LatLng) -> f64 {
    let mean_lat = ((a.lat + b.lat) / 2.0).to_radians();
    let dx = (b.lng - a.lng) * METERS_PER_DEG * mean_lat.cos();
    let dy = (b.lat - a.lat) * METERS_PER_DEG;
    (dx * dx + dy * dy).sqrt()
}

/// Ray-cast point-in-polygon test over lat/lng vertices.
pub fn point_in_polygon(vertices: &[LatLng], point: LatLng) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.lng > point.lng) != (b.lng > point.lng) {
            let crossing = (b.lat - a.lat) * (point.lng - a.lng) / (b.lng - a.lng) + a.lat;
            if point.lat < crossing {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn polygon_area_m2(vertices: &[LatLng]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let ref_lat = (vertices.iter().map(|v| v.lat).sum::<f64>() / vertices.len() as f64)
        .to_radians();
    let scale_x = METERS_PER_DEG * ref_lat.cos();
    let mut doubled = 0.0;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (ax, ay) = (vertices[j].lng * scale_x, vertices[j].lat * METERS_PER_DEG);
        let (bx, by) = (vertices[i].lng * scale_x, vertices[i].lat * METERS_PER_DEG);
        doubled += ax * by - bx * ay;
        j = i;
    }
    (doubled / 2.0).abs()
}

fn polygon_perimeter_m(vertices: &[LatLng]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        total += distance_m(vertices[j], vertices[i]);
        j = i;
    }
    total
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lng <= self.east
            && point.lng >= self.west
    }

    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            north: first.lat,
            south: first.lat,
            east: first.lng,
            west: first.lng,
        };
        for point in &points[1..] {
            bbox.north = bbox.north.max(point.lat);
            bbox.south = bbox.south.min(point.lat);
            bbox.east = bbox.east.max(point.lng);
            bbox.west = bbox.west.min(point.lng);
        }
        Some(bbox)
    }
}

/// Geographic extent of a mission. Rectangles keep their vertex list so the
/// editor's corner ordering survives round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyArea {
    Polygon { vertices: Vec<LatLng> },
    Rectangle { vertices: Vec<LatLng> },
    Circle { center: LatLng, radius_m: f64 },
}

impl SurveyArea {
    pub fn area_m2(&self) -> f64 {
        match self {
            Self::Polygon { vertices } | Self::Rectangle { vertices } => polygon_area_m2(vertices),
            Self::Circle { radius_m, .. } => PI * radius_m * radius_m,
        }
    }

    pub fn perimeter_m(&self) -> f64 {
        match self {
            Self::Polygon { vertices } | Self::Rectangle { vertices } => {
                polygon_perimeter_m(vertices)
            }
            Self::Circle { radius_m, .. } => 2.0 * PI * radius_m,
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        match self {
            Self::Polygon { vertices } | Self::Rectangle { vertices } => {
                point_in_polygon(vertices, point)
            }
            Self::Circle { center, radius_m } => distance_m(*center, point) <= *radius_m,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Polygon { vertices } | Self::Rectangle { vertices } => {
                BoundingBox::from_points(vertices)
            }
            Self::Circle { center, radius_m } => {
                let dlat = radius_m / METERS_PER_DEG;
                let dlng = radius_m / (METERS_PER_DEG * center.lat.to_radians().cos());
                Some(BoundingBox {
                    north: center.lat + dlat,
                    south: center.lat - dlat,
                    east: center.lng + dlng,
                    west: center.lng - dlng,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<LatLng> {
        // Roughly 1.11 km per side at the equator.
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.01, 0.0),
            LatLng::new(0.01, 0.01),
            LatLng::new(0.0, 0.01),
        ]
    }

    #[test]
    fn square_area_close_to_projected_value() {
        let side = 0.01 * METERS_PER_DEG;
        let area = SurveyArea::Polygon {
            vertices: unit_square(),
        }
        .area_m2();
        assert!((area - side * side).abs() / (side * side) < 0.01);
    }

    #[test]
    fn square_perimeter_close_to_four_sides() {
        let side = 0.01 * METERS_PER_DEG;
        let perimeter = SurveyArea::Rectangle {
            vertices: unit_square(),
        }
        .perimeter_m();
        assert!((perimeter - 4.0 * side).abs() / (4.0 * side) < 0.01);
    }

    #[test]
    fn polygon_contains_interior_point_only() {
        let area = SurveyArea::Polygon {
            vertices: unit_square(),
        };
        assert!(area.contains(LatLng::new(0.005, 0.005)));
        assert!(!area.contains(LatLng::new(0.02, 0.005)));
    }

    #[test]
    fn circle_contains_by_radius() {
        let area = SurveyArea::Circle {
            center: LatLng::new(40.0, -74.0),
            radius_m: 500.0,
        };
        assert!(area.contains(LatLng::new(40.001, -74.0)));
        assert!(!area.contains(LatLng::new(40.01, -74.0)));
    }

    #[test]
    fn bounding_box_wraps_vertices() {
        let bbox = SurveyArea::Polygon {
            vertices: unit_square(),
        }
        .bounding_box()
        .unwrap();
        assert!(bbox.contains(LatLng::new(0.005, 0.005)));
        assert!(!bbox.contains(LatLng::new(0.05, 0.005)));
        assert_eq!(bbox.north, 0.01);
        assert_eq!(bbox.west, 0.0);
    }
}
