use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::numbers::extract_numbers;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 24, tags = ["y2023", "geometry", "math"])]
pub struct Solver;

const TEST_AREA: (f64, f64) = (200_000_000_000_000.0, 400_000_000_000_000.0);

/// Largest rock speed per axis tried when searching for the throw
const SPEED_LIMIT: i128 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pos: [i128; 3],
    vel: [i128; 3],
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match extract_numbers::<i128>(line).as_slice() {
                &[x, y, z, vx, vy, vz] => Ok(Hailstone {
                    pos: [x, y, z],
                    vel: [vx, vy, vz],
                }),
                _ => Err(ParseError::InvalidFormat(format!("bad hailstone {:?}", line))),
            })
            .collect()
    }
}

fn cross2(a: (i128, i128), b: (i128, i128)) -> i128 {
    a.0 * b.1 - a.1 * b.0
}

/// Whether the future XY paths of `a` and `b` cross inside `lo..=hi` on both axes
fn paths_cross(a: &Hailstone, b: &Hailstone, (lo, hi): (f64, f64)) -> bool {
    let va = (a.vel[0], a.vel[1]);
    let vb = (b.vel[0], b.vel[1]);
    let den = cross2(va, vb);
    if den == 0 {
        return false;
    }
    let d = (b.pos[0] - a.pos[0], b.pos[1] - a.pos[1]);
    let (ta, tb) = (cross2(d, vb), cross2(d, va));
    // Both times must be non-negative: same sign as the denominator
    if ta.signum() * den.signum() < 0 || tb.signum() * den.signum() < 0 {
        return false;
    }
    let t = ta as f64 / den as f64;
    let x = a.pos[0] as f64 + va.0 as f64 * t;
    let y = a.pos[1] as f64 + va.1 as f64 * t;
    (lo..=hi).contains(&x) && (lo..=hi).contains(&y)
}

pub fn crossings_in_area(hail: &[Hailstone], area: (f64, f64)) -> usize {
    hail.iter()
        .tuple_combinations()
        .filter(|(a, b)| paths_cross(a, b, area))
        .count()
}

/// Whether a rock thrown from `pos` with `vel` hits `h` at some time `t >= 0`
fn hits(pos: [i128; 3], vel: [i128; 3], h: &Hailstone) -> bool {
    let gap: [i128; 3] = std::array::from_fn(|i| pos[i] - h.pos[i]);
    let closing: [i128; 3] = std::array::from_fn(|i| h.vel[i] - vel[i]);
    let parallel = (0..3).all(|i| {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        gap[j] * closing[k] == gap[k] * closing[j]
    });
    let forward = (0..3).map(|i| gap[i] * closing[i]).sum::<i128>() >= 0;
    parallel && forward && (closing.iter().any(|&c| c != 0) || gap.iter().all(|&g| g == 0))
}

/// Position and velocity of the rock that hits every hailstone.
///
/// Seen from a rock moving at `(vx, vy)`, every hailstone's XY path passes
/// through the throwing point, so candidate speeds are tried until the first
/// two paths meet at a point the rest also reach.
pub fn throw(hail: &[Hailstone]) -> Option<([i128; 3], [i128; 3])> {
    let [a, b, ..] = hail else {
        return None;
    };
    for vx in -SPEED_LIMIT..=SPEED_LIMIT {
        for vy in -SPEED_LIMIT..=SPEED_LIMIT {
            let va = (a.vel[0] - vx, a.vel[1] - vy);
            let vb = (b.vel[0] - vx, b.vel[1] - vy);
            let den = cross2(va, vb);
            if den == 0 {
                continue;
            }
            let d = (b.pos[0] - a.pos[0], b.pos[1] - a.pos[1]);
            let (num_a, num_b) = (cross2(d, vb), cross2(d, va));
            if num_a % den != 0 || num_b % den != 0 {
                continue;
            }
            let (ta, tb) = (num_a / den, num_b / den);
            if ta < 0 || tb < 0 || ta == tb {
                continue;
            }
            // Heights at both impacts fix the vertical speed
            let za = a.pos[2] + ta * a.vel[2];
            let zb = b.pos[2] + tb * b.vel[2];
            if (zb - za) % (tb - ta) != 0 {
                continue;
            }
            let vz = (zb - za) / (tb - ta);
            let pos = [
                a.pos[0] + ta * va.0,
                a.pos[1] + ta * va.1,
                za - ta * vz,
            ];
            let vel = [vx, vy, vz];
            if hail.iter().all(|h| hits(pos, vel, h)) {
                return Some((pos, vel));
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(crossings_in_area(shared, TEST_AREA).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (pos, _) = throw(shared).ok_or_else(|| SolveError::failed("no throw hits every hailstone"))?;
        Ok(pos.iter().sum::<i128>().to_string())
    }
}
