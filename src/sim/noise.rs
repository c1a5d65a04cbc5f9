//! Shared 2D simplex noise field
//!
//! Aim wandering samples the field at `(seed, time)`: the seed picks a lane
//! through the field and time slides along it, so consecutive samples change
//! smoothly. The permutation table is fixed at construction; sampling takes
//! `&self` and never mutates.

use std::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

/// Skew factor for 2D: (sqrt(3) - 1) / 2
const F2: f32 = 0.366_025_4;
/// Unskew factor for 2D: (3 - sqrt(3)) / 6
const G2: f32 = 0.211_324_87;
/// Scales the raw corner sum to roughly [-1, 1]
const OUTPUT_SCALE: f32 = 70.0;

const GRADIENTS: [(f32, f32); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Deterministic 2D simplex noise over a seeded permutation table
#[derive(Clone)]
pub struct NoiseField {
    seed: u64,
    perm: [u8; 512],
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl NoiseField {
    /// Build the field; the same seed always yields the same table
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        let mut rng = Pcg32::seed_from_u64(seed);
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { seed, perm }
    }

    /// Sample the lane `seed` at time `t`. Result is in [-1, 1].
    #[inline]
    pub fn sample(&self, seed: f32, t: f32) -> f32 {
        self.simplex2(seed, t)
    }

    fn gradient(&self, hash: usize, x: f32, y: f32) -> f32 {
        let (gx, gy) = GRADIENTS[hash & 7];
        gx * x + gy * y
    }

    fn corner(&self, hash: usize, x: f32, y: f32) -> f32 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * self.gradient(hash, x, y)
        }
    }

    fn simplex2(&self, xin: f32, yin: f32) -> f32 {
        // Skew into simplex cell space
        let s = (xin + yin) * F2;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let t = (i + j) * G2;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);

        // Lower or upper triangle of the cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i32 & 255) as usize;
        let jj = (j as i32 & 255) as usize;
        let p = &self.perm;
        let h0 = p[ii + p[jj] as usize] as usize;
        let h1 = p[ii + i1 + p[jj + j1] as usize] as usize;
        let h2 = p[ii + 1 + p[jj + 1] as usize] as usize;

        let n = self.corner(h0, x0, y0) + self.corner(h1, x1, y1) + self.corner(h2, x2, y2);
        (OUTPUT_SCALE * n).clamp(-1.0, 1.0)
    }
}
