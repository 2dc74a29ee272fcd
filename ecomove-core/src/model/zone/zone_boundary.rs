use crate::util::geo_utils;
use geo::{BoundingRect, Contains, Coord, LineString, Point, Polygon, Rect};

/// a simple (non-self-intersecting) closed ring approximating a
/// low-emission zone, built once from configured (lat, lng) vertices.
/// the ring is treated as implicitly closed: the last vertex connects back
/// to the first.
#[derive(Clone, Debug)]
pub struct ZoneBoundary {
    /// None when the configured ring is degenerate (fewer than 3 distinct
    /// vertices), in which case nothing is ever contained
    polygon: Option<Polygon>,
    envelope: Option<Rect>,
}

impl ZoneBoundary {
    /// builds a boundary from an ordered (lat, lng) vertex ring. a ring that
    /// degenerates to a point or a line produces a boundary that classifies
    /// every query point as outside, deterministically and without error.
    pub fn from_latlng_ring(ring: &[[f64; 2]]) -> ZoneBoundary {
        let coords: Vec<Coord> = ring
            .iter()
            .map(|vertex| geo_utils::latlng_coord(vertex[0], vertex[1]))
            .collect();
        if distinct_vertex_count(&coords) < 3 {
            return ZoneBoundary {
                polygon: None,
                envelope: None,
            };
        }
        let polygon = Polygon::new(LineString::from(coords), vec![]);
        let envelope = polygon.bounding_rect();
        ZoneBoundary {
            polygon: Some(polygon),
            envelope,
        }
    }

    /// exact containment test against the boundary ring. convention: a point
    /// exactly on an edge or vertex of the ring is NOT contained (interior
    /// membership only). degenerate boundaries contain nothing.
    pub fn contains(&self, point: &Coord) -> bool {
        match &self.polygon {
            Some(polygon) => polygon.contains(&Point::from(*point)),
            None => false,
        }
    }

    /// coarse containment against the ring's axis-aligned bounding box,
    /// edges inclusive. agrees with contains() on points clearly inside or
    /// clearly outside; near the boundary edge the two may diverge for
    /// non-rectangular rings. usable as a cheap pre-filter: a point outside
    /// the envelope is outside the polygon.
    pub fn envelope_contains(&self, point: &Coord) -> bool {
        match &self.envelope {
            Some(envelope) => {
                let min = envelope.min();
                let max = envelope.max();
                min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
            }
            None => false,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.polygon.is_none()
    }
}

fn distinct_vertex_count(coords: &[Coord]) -> usize {
    let mut distinct: Vec<Coord> = Vec::with_capacity(coords.len());
    for coord in coords.iter() {
        if !distinct.iter().any(|seen| seen == coord) {
            distinct.push(*coord);
        }
    }
    distinct.len()
}
