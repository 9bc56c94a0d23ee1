//! k-medoids grouping of detected lines.
//!
//! The Hough stage deliberately extracts every cell over the vote threshold,
//! so one physical lane marking usually arrives as a sheaf of near-identical
//! candidates. Clustering partitions the candidates under the wrap-aware
//! [`distance`] metric and keeps one representative per cluster. Medoids are
//! chosen from the actual input lines rather than averaged, because naively
//! averaging angles across the 180-degree wrap produces garbage.

mod metric;
#[cfg(test)]
mod tests;

pub use self::metric::distance;

use log::warn;
use serde::Serialize;

use crate::error::Error;
use crate::hough::NormalLine;

/// Cluster representative chosen from the input lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Medoid {
    /// The representative itself, always one of the input lines.
    pub line: NormalLine,
    /// Lines assigned to this cluster in the final round.
    pub members: usize,
    /// Total metric distance from the medoid to its assigned lines.
    pub cost: f64,
}

/// Groups `lines` into at most `clusters` clusters with a fixed number of
/// assign/update rounds and returns one [`Medoid`] per cluster.
///
/// Seeding is deterministic: the input is sorted by (theta, rho) and seed
/// `i` is the member at index `i * n / k`, evenly spaced across the sorted
/// set. Each round assigns every line to its nearest medoid (the
/// lowest-indexed medoid wins ties) and then re-elects each cluster's medoid
/// as the member with the smallest total distance to its co-members
/// (earliest in sort order wins ties); a cluster that lost all its members
/// keeps its previous medoid. The round count is fixed rather than
/// convergence-detected, trading a few redundant rounds for determinism.
///
/// Fewer lines than clusters reduces the cluster count to the input size
/// (logged as a warning); an empty input yields no medoids. `clusters == 0`
/// or `iterations == 0` is a parameter error.
pub fn cluster_lines(
    lines: &[NormalLine],
    clusters: u16,
    iterations: u16,
) -> Result<Vec<Medoid>, Error> {
    if clusters == 0 || iterations == 0 {
        return Err(Error::ClusterParams);
    }
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let mut sorted = lines.to_vec();
    sorted.sort_unstable_by_key(|l| (l.theta, l.rho));

    let n = sorted.len();
    let mut k = clusters as usize;
    if n < k {
        warn!("only {n} lines for {k} clusters, reducing the cluster count to {n}");
        k = n;
    }

    let mut medoids: Vec<usize> = (0..k).map(|i| i * n / k).collect();
    let mut members = vec![0usize; k];
    let mut costs = vec![0.0f64; k];
    let mut assignment = vec![0usize; n];

    for _ in 0..iterations {
        for (i, line) in sorted.iter().enumerate() {
            let mut best = f64::INFINITY;
            let mut cluster = 0;
            for (c, &m) in medoids.iter().enumerate() {
                let d = distance(*line, sorted[m]);
                if d < best {
                    best = d;
                    cluster = c;
                }
            }
            assignment[i] = cluster;
        }

        for c in 0..k {
            let group: Vec<usize> = (0..n).filter(|&i| assignment[i] == c).collect();
            members[c] = group.len();
            if group.is_empty() {
                costs[c] = 0.0;
                continue;
            }
            let mut best_idx = group[0];
            let mut best_cost = f64::INFINITY;
            for &cand in &group {
                let cost: f64 = group
                    .iter()
                    .map(|&m| distance(sorted[cand], sorted[m]))
                    .sum();
                if cost < best_cost {
                    best_cost = cost;
                    best_idx = cand;
                }
            }
            medoids[c] = best_idx;
            costs[c] = best_cost;
        }
    }

    Ok((0..k)
        .map(|c| Medoid {
            line: sorted[medoids[c]],
            members: members[c],
            cost: costs[c],
        })
        .collect())
}
