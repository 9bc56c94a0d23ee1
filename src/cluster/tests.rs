use super::*;

fn line(theta: u16, rho: i32) -> NormalLine {
    NormalLine { theta, rho }
}

#[test]
fn near_identical_lines_collapse_to_one_medoid() {
    let lines = [
        line(89, 100),
        line(90, 100),
        line(90, 101),
        line(91, 99),
    ];
    let medoids = cluster_lines(&lines, 1, 3).unwrap();
    assert_eq!(medoids.len(), 1);
    let medoid = medoids[0];
    assert_eq!(medoid.members, 4);
    for l in lines {
        assert!(
            distance(medoid.line, l) < 3.0,
            "medoid {:?} too far from {:?}",
            medoid.line,
            l
        );
    }
}

#[test]
fn medoid_is_always_an_input_line() {
    // The middle line minimizes total distance; an averaged centroid would
    // land there too, but the medoid must literally be one of the inputs.
    let lines = [line(10, 0), line(20, 0), line(30, 0)];
    let medoids = cluster_lines(&lines, 1, 2).unwrap();
    assert_eq!(medoids[0].line, line(20, 0));
    assert_eq!(medoids[0].members, 3);
    assert_eq!(medoids[0].cost, 20.0);
}

#[test]
fn wrap_straddling_candidates_group_together() {
    // One physical line reported from both ends of the angle axis.
    let lines = [
        line(0, 80),
        line(1, 80),
        line(178, -80),
        line(179, -80),
    ];
    let medoids = cluster_lines(&lines, 1, 3).unwrap();
    assert_eq!(medoids.len(), 1);
    assert_eq!(medoids[0].members, 4);
    for l in lines {
        assert!(
            distance(medoids[0].line, l) < 4.0,
            "medoid {:?} too far from {:?}",
            medoids[0].line,
            l
        );
    }
}

#[test]
fn separated_bands_split_into_their_own_clusters() {
    let left = [line(29, 40), line(30, 40), line(31, 42)];
    let right = [line(119, -200), line(120, -200), line(121, -198)];
    let mut lines = Vec::new();
    lines.extend_from_slice(&left);
    lines.extend_from_slice(&right);

    let mut medoids = cluster_lines(&lines, 2, 4).unwrap();
    medoids.sort_by_key(|m| m.line.theta);
    assert_eq!(medoids.len(), 2);
    assert_eq!(medoids[0].members, 3);
    assert_eq!(medoids[1].members, 3);
    assert!(left.contains(&medoids[0].line));
    assert!(right.contains(&medoids[1].line));
}

#[test]
fn starved_input_reduces_the_cluster_count() {
    let lines = [line(45, 10), line(135, -10)];
    let medoids = cluster_lines(&lines, 5, 2).unwrap();
    assert_eq!(medoids.len(), 2);
    let mut found: Vec<NormalLine> = medoids.iter().map(|m| m.line).collect();
    found.sort_unstable_by_key(|l| (l.theta, l.rho));
    assert_eq!(found, vec![line(45, 10), line(135, -10)]);
}

#[test]
fn empty_input_yields_no_medoids() {
    assert_eq!(cluster_lines(&[], 3, 5).unwrap(), Vec::new());
}

#[test]
fn zero_parameters_are_rejected() {
    let lines = [line(0, 0)];
    assert_eq!(cluster_lines(&lines, 0, 5), Err(Error::ClusterParams));
    assert_eq!(cluster_lines(&lines, 2, 0), Err(Error::ClusterParams));
}

#[test]
fn single_line_is_its_own_medoid() {
    let medoids = cluster_lines(&[line(77, -5)], 1, 1).unwrap();
    assert_eq!(
        medoids,
        vec![Medoid {
            line: line(77, -5),
            members: 1,
            cost: 0.0
        }]
    );
}

#[test]
fn rounds_are_deterministic() {
    let lines = [
        line(10, 5),
        line(12, 7),
        line(90, -30),
        line(92, -31),
        line(170, 200),
    ];
    let a = cluster_lines(&lines, 3, 6).unwrap();
    let b = cluster_lines(&lines, 3, 6).unwrap();
    assert_eq!(a, b);
}
