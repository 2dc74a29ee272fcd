use super::emission_level::EmissionLevel;
use super::emission_sample::EmissionSample;
use super::zone_boundary::ZoneBoundary;
use super::zone_result::{NearestSample, ZoneResult};
use crate::util::geo_utils;
use geo::Coord;

/// linear scan for the reference sample nearest to a point, comparing
/// squared planar distances. O(n) in the sample count, which is fine for
/// the small static sets this crate is configured with; swap in an rstar
/// index if sample counts ever grow. ties go to the first sample in
/// iteration order, so results are stable across calls.
pub fn nearest_sample<'a>(
    point: &Coord,
    samples: &'a [EmissionSample],
) -> Option<(usize, &'a EmissionSample, f64)> {
    let mut best: Option<(usize, &EmissionSample, f64)> = None;
    for (index, sample) in samples.iter().enumerate() {
        let d2 = geo_utils::planar_distance_squared(point, &sample.coord());
        match best {
            Some((_, _, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((index, sample, d2)),
        }
    }
    best
}

/// classifies a point: emission level of the nearest reference sample plus
/// a containment verdict against the low-emission boundary. never fails for
/// well-formed input. an empty sample set defaults to Low with no nearest
/// sample; a degenerate boundary is never contained. the envelope check
/// runs first so points outside the bounding box skip the exact test.
pub fn classify(
    point: &Coord,
    samples: &[EmissionSample],
    boundary: &ZoneBoundary,
) -> ZoneResult {
    let nearest = nearest_sample(point, samples);
    let level = match nearest {
        Some((_, sample, _)) => EmissionLevel::from_weight(sample.weight),
        None => EmissionLevel::default(),
    };
    let inside_boundary = boundary.envelope_contains(point) && boundary.contains(point);
    ZoneResult {
        level,
        nearest: nearest.map(|(index, sample, distance_squared)| NearestSample {
            index,
            weight: sample.weight,
            distance_squared,
        }),
        inside_boundary,
    }
}
