mod common;

use common::synthetic_image::road_scene;
use lane_detector::codec;
use lane_detector::image::Pixel;
use lane_detector::{EdgeFilter, LaneDetector, LaneParams};

/// Bottom-border x coordinate of a resolved lane segment.
fn bottom_x(lane: &lane_detector::ResolvedLine) -> u16 {
    if lane.y1 >= lane.y2 {
        lane.x1
    } else {
        lane.x2
    }
}

#[test]
fn two_markings_resolve_to_two_lanes() {
    let image = road_scene(640, 480, &[(140, 290), (500, 350)]);

    let params = LaneParams {
        vote_threshold: 100,
        clusters: 2,
        ..Default::default()
    };
    let report = LaneDetector::new(params).process(&image).unwrap();

    assert!(
        report.candidates >= 2,
        "expected candidates from both markings, got {}",
        report.candidates
    );
    assert_eq!(report.medoids.len(), 2);
    assert_eq!(report.lanes.len(), 2);
    for medoid in &report.medoids {
        assert!(medoid.members > 0, "empty cluster survived: {medoid:?}");
    }

    // One marking leans right (normal near 17 degrees), the other left
    // (normal near 163 degrees).
    let mut thetas: Vec<u16> = report.medoids.iter().map(|m| m.line.theta).collect();
    thetas.sort_unstable();
    assert!(
        (10..=25).contains(&thetas[0]),
        "right-leaning marking missed: thetas {thetas:?}"
    );
    assert!(
        (155..=170).contains(&thetas[1]),
        "left-leaning marking missed: thetas {thetas:?}"
    );

    // Each lane reaches the bottom border next to the marking it explains.
    let mut bottoms: Vec<u16> = report.lanes.iter().map(bottom_x).collect();
    bottoms.sort_unstable();
    assert!(
        bottoms[0].abs_diff(140) <= 25,
        "left lane far from its marking: bottoms {bottoms:?}"
    );
    assert!(
        bottoms[1].abs_diff(500) <= 25,
        "right lane far from its marking: bottoms {bottoms:?}"
    );
}

#[test]
fn detection_survives_a_ppm_round_trip() {
    let image = road_scene(320, 240, &[(60, 120)]);

    let bytes = codec::encode(&image);
    let decoded = codec::decode(&bytes).expect("own encoding must decode");
    assert_eq!(decoded, image);
    assert_eq!(codec::encode(&decoded), bytes);

    let params = LaneParams {
        vote_threshold: 60,
        clusters: 1,
        ..Default::default()
    };
    let direct = LaneDetector::new(params.clone()).process(&image).unwrap();
    let via_ppm = LaneDetector::new(params).process(&decoded).unwrap();
    assert_eq!(direct.medoids, via_ppm.medoids);
    assert_eq!(direct.lanes, via_ppm.lanes);
}

#[test]
fn featureless_road_reports_no_lanes() {
    let image = road_scene(320, 240, &[]);
    let report = LaneDetector::new(LaneParams::default())
        .process(&image)
        .unwrap();

    assert_eq!(report.candidates, 0);
    assert!(report.medoids.is_empty());
    assert!(report.lanes.is_empty());
    assert_eq!(report.overlay, image);
}

#[test]
fn laplace_edges_find_the_marking_too() {
    let image = road_scene(320, 240, &[(100, 160)]);

    // The Laplacian of a heavily blurred edge is weak, so soften the blur
    // and lower the band accordingly.
    let params = LaneParams {
        blur_size: 3,
        blur_variance: 1.0,
        edge_filter: EdgeFilter::Laplace,
        threshold_upper: 59,
        vote_threshold: 40,
        clusters: 1,
        ..Default::default()
    };
    let report = LaneDetector::new(params).process(&image).unwrap();

    assert_eq!(report.lanes.len(), 1);
    let red = report
        .overlay
        .pixels()
        .iter()
        .filter(|&&px| px == Pixel::RED)
        .count();
    assert!(red >= 200, "overlay holds only {red} red pixels");
}
