use ndarray::Array2;

use crate::bbox::BBox;
use crate::detection::Detection;

/// Result of associating one frame's detections with the live track set.
///
/// `matched` holds `(detection index, track index, iou)` triples; `unmatched`
/// holds detection indices that claimed no track and become new tracks.
#[derive(Debug, Default)]
pub struct Assignment {
    pub matched: Vec<(usize, usize, f32)>,
    pub unmatched: Vec<usize>,
}

/// Greedy one-to-one IoU matching of detections to tracks.
///
/// Builds the full detections x tracks IoU matrix, then walks detections in
/// input order and lets each claim the highest-IoU track not taken by an
/// earlier detection, provided the IoU exceeds `min_iou`. Ties go to the
/// lowest track index. Deterministic, no global-optimum guarantee; the
/// suboptimality versus a full bipartite assignment is an accepted trade-off.
pub fn match_detections(
    detections: &[Detection],
    track_boxes: &[BBox],
    min_iou: f32,
) -> Assignment {
    if track_boxes.is_empty() {
        return Assignment {
            matched: Vec::new(),
            unmatched: (0..detections.len()).collect(),
        };
    }

    if detections.is_empty() {
        return Assignment::default();
    }

    let iou_matrix = Array2::from_shape_fn((detections.len(), track_boxes.len()), |(d, t)| {
        detections[d].bbox.iou(&track_boxes[t])
    });

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    let mut claimed = vec![false; track_boxes.len()];

    for d in 0..detections.len() {
        let mut best_iou = min_iou;
        let mut best_track = None;

        for t in 0..track_boxes.len() {
            if claimed[t] {
                continue;
            }
            if iou_matrix[(d, t)] > best_iou {
                best_iou = iou_matrix[(d, t)];
                best_track = Some(t);
            }
        }

        match best_track {
            Some(t) => {
                claimed[t] = true;
                matched.push((d, t, best_iou));
            }
            None => unmatched.push(d),
        }
    }

    Assignment { matched, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(x1: f32, x2: f32) -> Detection {
        Detection::new(BBox::ltrb(x1, 0.0, x2, 100.0), "Car", 0.9)
    }

    #[test]
    fn no_tracks_leaves_all_detections_unmatched() {
        let dets = vec![det(0.0, 100.0), det(200.0, 300.0)];
        let a = match_detections(&dets, &[], 0.3);
        assert!(a.matched.is_empty());
        assert_eq!(a.unmatched, vec![0, 1]);
    }

    #[test]
    fn no_detections_yields_empty_assignment() {
        let boxes = vec![BBox::ltrb(0.0, 0.0, 100.0, 100.0)];
        let a = match_detections(&[], &boxes, 0.3);
        assert!(a.matched.is_empty());
        assert!(a.unmatched.is_empty());
    }

    #[test]
    fn detection_claims_highest_iou_track() {
        let dets = vec![det(10.0, 110.0)];
        let boxes = vec![
            BBox::ltrb(60.0, 0.0, 160.0, 100.0),
            BBox::ltrb(12.0, 0.0, 112.0, 100.0),
        ];
        let a = match_detections(&dets, &boxes, 0.3);
        assert_eq!(a.matched.len(), 1);
        assert_eq!((a.matched[0].0, a.matched[0].1), (0, 1));
        assert!(a.unmatched.is_empty());
    }

    #[test]
    fn below_threshold_becomes_unmatched() {
        let dets = vec![det(0.0, 100.0)];
        let boxes = vec![BBox::ltrb(80.0, 0.0, 180.0, 100.0)];
        // IoU = 20/180 ~ 0.11 < 0.3
        let a = match_detections(&dets, &boxes, 0.3);
        assert!(a.matched.is_empty());
        assert_eq!(a.unmatched, vec![0]);
    }

    #[test]
    fn earlier_detection_wins_a_contested_track() {
        let dets = vec![det(0.0, 100.0), det(5.0, 105.0)];
        let boxes = vec![BBox::ltrb(0.0, 0.0, 100.0, 100.0)];
        let a = match_detections(&dets, &boxes, 0.3);
        assert_eq!(a.matched.len(), 1);
        assert_eq!((a.matched[0].0, a.matched[0].1), (0, 0));
        assert_eq!(a.unmatched, vec![1]);
    }

    #[test]
    fn second_detection_falls_back_to_remaining_track() {
        let dets = vec![det(0.0, 100.0), det(10.0, 110.0)];
        let boxes = vec![
            BBox::ltrb(0.0, 0.0, 100.0, 100.0),
            BBox::ltrb(20.0, 0.0, 120.0, 100.0),
        ];
        let a = match_detections(&dets, &boxes, 0.3);
        assert_eq!(a.matched.len(), 2);
        assert_eq!((a.matched[0].0, a.matched[0].1), (0, 0));
        assert_eq!((a.matched[1].0, a.matched[1].1), (1, 1));
    }
}
