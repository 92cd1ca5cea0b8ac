// Copyright 2025 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-ring selection.

use kurbo::Point;

use crate::config::DEFAULT_HIT_THRESHOLD;
use crate::geometry::Geometry;
use crate::track::TrackSet;

/// Picks the track whose ring is closest to a pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTester {
    threshold: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_THRESHOLD)
    }
}

impl HitTester {
    /// Creates a hit tester accepting rings within `threshold` of the pointer.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Maximum accepted distance between pointer and ring.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Index of the track nearest to `pointer`, or `None` if every ring is farther
    /// than the threshold.
    pub fn find_nearest(
        &self,
        geometry: &Geometry,
        pointer: Point,
        tracks: &TrackSet,
    ) -> Option<usize> {
        let distance = geometry.distance_from_center(pointer);
        nearest_ring(distance, tracks.iter().map(|t| t.radius()), self.threshold)
    }
}

/// Index of the radius closest to `distance`, if within `threshold`.
///
/// Ties go to the lowest index.
pub fn nearest_ring(
    distance: f64,
    radii: impl IntoIterator<Item = f64>,
    threshold: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, radius) in radii.into_iter().enumerate() {
        let gap = (radius - distance).abs();
        match best {
            Some((_, best_gap)) if gap >= best_gap => {}
            _ => best = Some((index, gap)),
        }
    }
    best.filter(|&(_, gap)| gap <= threshold)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::TrackSpec;

    fn geometry() -> Geometry {
        Geometry::new(Point::new(250.0, 250.0))
    }

    fn tracks(radii: &[f64]) -> TrackSet {
        let specs: alloc::vec::Vec<_> = radii
            .iter()
            .map(|&r| TrackSpec::new(r, 0.0, 100.0))
            .collect();
        TrackSet::from_specs(&specs).unwrap()
    }

    #[test]
    fn pointer_on_a_ring_selects_it() {
        let g = geometry();
        let set = tracks(&[50.0, 100.0, 150.0]);
        let hit = HitTester::default();
        for (index, radius) in [(0, 50.0), (1, 100.0), (2, 150.0)] {
            let on_ring = g.handle_position(radius, 123.0);
            assert_eq!(hit.find_nearest(&g, on_ring, &set), Some(index));
        }
    }

    #[test]
    fn pointer_between_rings_picks_the_closer_one() {
        let g = geometry();
        let set = tracks(&[50.0, 100.0]);
        let hit = HitTester::default();
        assert_eq!(hit.find_nearest(&g, Point::new(250.0, 250.0 - 70.0), &set), Some(0));
        assert_eq!(hit.find_nearest(&g, Point::new(250.0, 250.0 - 80.0), &set), Some(1));
    }

    #[test]
    fn far_pointer_selects_nothing() {
        let g = geometry();
        let set = tracks(&[100.0]);
        let hit = HitTester::new(20.0);
        assert_eq!(hit.find_nearest(&g, Point::new(300.0, 250.0), &set), None);
        assert_eq!(hit.find_nearest(&g, Point::new(370.0, 250.0), &set), Some(0));
        assert_eq!(hit.find_nearest(&g, Point::new(371.0, 250.0), &set), None);
    }

    #[test]
    fn shared_radius_resolves_to_lowest_index() {
        let g = geometry();
        let set = tracks(&[80.0, 100.0, 100.0]);
        let p = g.handle_position(100.0, 0.0);
        assert_eq!(HitTester::default().find_nearest(&g, p, &set), Some(1));
    }

    #[test]
    fn empty_set_never_hits() {
        let g = geometry();
        let set = tracks(&[]);
        assert_eq!(HitTester::default().find_nearest(&g, g.center(), &set), None);
        assert_eq!(nearest_ring(10.0, core::iter::empty(), 20.0), None);
    }
}
