//! Reactor reboot: cuboid on/off instructions replayed over the
//! initialization region.
//!
//! Rather than slicing cuboids, the count walks every cell of the
//! ±50 region and asks which instruction touched it last. The region
//! holds 101³ ≈ 1.03M cells, small enough to scan in parallel.

use std::str::FromStr;

use stride_core::Region;

/// One reboot instruction: switch a cuboid of cells on or off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub on: bool,
    pub cube: Region<3>,
}

impl FromStr for Step {
    type Err = String;

    /// Parses `on x=10..12,y=10..12,z=10..12`. Input ranges are
    /// inclusive; the stored region is half-open.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (state, ranges) = s
            .split_once(' ')
            .ok_or_else(|| format!("missing state prefix: {s:?}"))?;
        let on = match state {
            "on" => true,
            "off" => false,
            other => return Err(format!("expected on/off, got {other:?}")),
        };

        let mut lo = [0i64; 3];
        let mut hi = [0i64; 3];
        let mut axes = 0;
        for (i, part) in ranges.split(',').enumerate() {
            if i == 3 {
                return Err(format!("too many axes: {s:?}"));
            }
            let (axis, span) = part
                .split_once('=')
                .ok_or_else(|| format!("malformed axis: {part:?}"))?;
            if axis != ["x", "y", "z"][i] {
                return Err(format!("axes out of order: {part:?}"));
            }
            let (a, b) = span
                .split_once("..")
                .ok_or_else(|| format!("malformed range: {span:?}"))?;
            let a: i64 = a.parse().map_err(|e| format!("bad bound {a:?}: {e}"))?;
            let b: i64 = b.parse().map_err(|e| format!("bad bound {b:?}: {e}"))?;
            if a > b {
                return Err(format!("empty range: {span:?}"));
            }
            lo[i] = a;
            hi[i] = b + 1;
            axes = i + 1;
        }
        if axes != 3 {
            return Err(format!("expected 3 axes, got {axes}: {s:?}"));
        }
        Ok(Self {
            on,
            cube: Region::new(lo, hi),
        })
    }
}

/// The initialization region, cells with every coordinate in -50..=50.
pub fn init_region() -> Region<3> {
    Region::cube(-50, 51)
}

/// Number of cells of `within` left on after replaying `steps`.
///
/// A cell's final state is decided by the last instruction whose cuboid
/// contains it, so the scan checks instructions newest first.
pub fn active_count(steps: &[Step], within: Region<3>) -> u64 {
    within.par_count_where(|p| {
        steps
            .iter()
            .rev()
            .find(|step| step.cube.contains(p))
            .is_some_and(|step| step.on)
    })
}
