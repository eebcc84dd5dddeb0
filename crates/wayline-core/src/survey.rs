//! Capture polygon and overlap plan for the survey template types.

use crate::builder::fmt_num;
use crate::document::{KmlLinearRing, KmlOuterBoundaryIs, KmlOverlap, KmlPolygon};
use crate::mission::AreaVertex;

/// Build the survey-area polygon. The ring string joins each vertex as
/// "lon,lat,height" with single spaces; closure (repeating the first vertex
/// at the end) is left to the caller.
pub fn build_polygon(vertices: &[AreaVertex]) -> KmlPolygon {
    let coordinates = vertices
        .iter()
        .map(|v| {
            format!(
                "{},{},{}",
                fmt_num(v.longitude),
                fmt_num(v.latitude),
                fmt_num(v.height)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    KmlPolygon {
        outer_boundary_is: KmlOuterBoundaryIs {
            linear_ring: KmlLinearRing { coordinates },
        },
    }
}

/// Build the overlap plan. The same along-/cross-track pair fills every
/// method x sensor combination (see DESIGN.md).
pub fn build_overlap(overlap_h: u32, overlap_w: u32) -> KmlOverlap {
    let h = overlap_h.to_string();
    let w = overlap_w.to_string();
    KmlOverlap {
        ortho_camera_overlap_h: Some(h.clone()),
        ortho_camera_overlap_w: Some(w.clone()),
        inclined_camera_overlap_h: Some(h.clone()),
        inclined_camera_overlap_w: Some(w.clone()),
        ortho_lidar_overlap_h: Some(h.clone()),
        ortho_lidar_overlap_w: Some(w.clone()),
        inclined_lidar_overlap_h: Some(h),
        inclined_lidar_overlap_w: Some(w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_ring_string() {
        let polygon = build_polygon(&[
            AreaVertex {
                longitude: 113.9,
                latitude: 22.5,
                height: 100.0,
            },
            AreaVertex {
                longitude: 113.91,
                latitude: 22.51,
                height: 100.0,
            },
            AreaVertex {
                longitude: 113.9,
                latitude: 22.5,
                height: 100.0,
            },
        ]);
        assert_eq!(
            polygon.outer_boundary_is.linear_ring.coordinates,
            "113.9,22.5,100.0 113.91,22.51,100.0 113.9,22.5,100.0"
        );
    }

    #[test]
    fn overlap_fills_all_pairs() {
        let overlap = build_overlap(70, 60);
        assert_eq!(overlap.ortho_camera_overlap_h.as_deref(), Some("70"));
        assert_eq!(overlap.ortho_camera_overlap_w.as_deref(), Some("60"));
        assert_eq!(overlap.inclined_camera_overlap_h.as_deref(), Some("70"));
        assert_eq!(overlap.inclined_camera_overlap_w.as_deref(), Some("60"));
        assert_eq!(overlap.ortho_lidar_overlap_h.as_deref(), Some("70"));
        assert_eq!(overlap.ortho_lidar_overlap_w.as_deref(), Some("60"));
        assert_eq!(overlap.inclined_lidar_overlap_h.as_deref(), Some("70"));
        assert_eq!(overlap.inclined_lidar_overlap_w.as_deref(), Some("60"));
    }
}
