//! Merging of near-coincident intersection rows.
//!
//! The municipal dataset often records one physical crossing at several
//! slightly different coordinates.  Rows closer than the merge radius are
//! collapsed onto their mean coordinate before the network is built.
//!
//! Two modes exist:
//!
//! | Mode               | Behaviour                                                    |
//! |--------------------|--------------------------------------------------------------|
//! | `LastClusterOnly`  | Only the last row's neighbourhood is merged; the first row of the cluster keeps the mean coordinate and the others are dropped.  At most one cluster per call. |
//! | `EveryCluster`     | Every cluster is merged; all of its rows are kept and moved onto the mean, so their street names still reach the intersection. |
//!
//! `LastClusterOnly` is the default.

use sr_core::Coord;

use crate::IntersectionRecord;

/// Default merge radius: 30 m.
pub const DEFAULT_MERGE_RADIUS_CM: f64 = 3_000.0;

/// Which clusters [`merge_nearby`] collapses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergeMode {
    #[default]
    LastClusterOnly,
    EveryCluster,
}

/// Collapse rows lying strictly closer than `radius_cm` to each other.
///
/// Distances are measured between the original coordinates; merged
/// coordinates are the cluster mean rounded to the nearest centimetre.
pub fn merge_nearby(
    mut records: Vec<IntersectionRecord>,
    radius_cm: f64,
    mode: MergeMode,
) -> Vec<IntersectionRecord> {
    let coords: Vec<Coord> = records.iter().map(IntersectionRecord::coord).collect();

    match mode {
        MergeMode::LastClusterOnly => {
            let Some(&last) = coords.last() else {
                return records;
            };
            let cluster = neighbourhood(&coords, last, radius_cm, |_| true);
            if cluster.len() < 2 {
                return records;
            }
            let Some(mean) = mean_of(&coords, &cluster) else {
                return records;
            };

            let keep = cluster[0];
            records[keep].x_cm = mean.x;
            records[keep].y_cm = mean.y;
            tracing::debug!(
                rows = cluster.len(),
                x = mean.x,
                y = mean.y,
                "merged the trailing intersection cluster"
            );

            let dropped = &cluster[1..];
            records
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !dropped.contains(i))
                .map(|(_, r)| r)
                .collect()
        }
        MergeMode::EveryCluster => {
            let mut assigned = vec![false; coords.len()];
            let mut clusters = 0usize;

            for i in 0..coords.len() {
                if assigned[i] {
                    continue;
                }
                let cluster = neighbourhood(&coords, coords[i], radius_cm, |j| {
                    j >= i && !assigned[j]
                });
                for &j in &cluster {
                    assigned[j] = true;
                }
                if cluster.len() < 2 {
                    continue;
                }
                if let Some(mean) = mean_of(&coords, &cluster) {
                    for &j in &cluster {
                        records[j].x_cm = mean.x;
                        records[j].y_cm = mean.y;
                    }
                    clusters += 1;
                }
            }

            tracing::debug!(clusters, "merged intersection clusters");
            records
        }
    }
}

/// Indices `j` accepted by `eligible` whose coordinate lies within
/// `radius_cm` of `center`, in ascending order.
fn neighbourhood<F>(coords: &[Coord], center: Coord, radius_cm: f64, eligible: F) -> Vec<usize>
where
    F: Fn(usize) -> bool,
{
    coords
        .iter()
        .enumerate()
        .filter(|&(j, c)| eligible(j) && c.distance_cm(center) < radius_cm)
        .map(|(j, _)| j)
        .collect()
}

fn mean_of(coords: &[Coord], cluster: &[usize]) -> Option<Coord> {
    let points: Vec<Coord> = cluster.iter().map(|&j| coords[j]).collect();
    Coord::mean(&points)
}
