//! Seedable coherent value noise over three dimensions
//!
//! Lattice values come from a seeded permutation table and are blended with
//! smoothstep-faded trilinear interpolation, so the field is continuous and
//! identical for identical seeds. Octaves are summed with a fixed falloff and
//! renormalized, keeping every sample in `[0, 1]`.

use crate::io::configuration::{NOISE_FALLOFF, NOISE_OCTAVES};
use crate::math::interpolation::{lerp, smoothstep};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

const TABLE_SIZE: usize = 256;
const TABLE_MASK: i64 = 255;

/// Deterministic 3D value noise with octave summation
#[derive(Debug, Clone)]
pub struct ValueNoise {
    seed: u64,
    permutation: Vec<u8>,
    lattice: Vec<f64>,
}

impl ValueNoise {
    /// Build the noise tables for a seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut permutation: Vec<u8> = (0..=u8::MAX).collect();
        permutation.shuffle(&mut rng);

        let lattice = (0..TABLE_SIZE).map(|_| rng.random::<f64>()).collect();

        Self {
            seed,
            permutation,
            lattice,
        }
    }

    /// Seed the tables were built from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    fn permute(&self, index: i64) -> i64 {
        i64::from(
            self.permutation
                .get((index & TABLE_MASK) as usize)
                .copied()
                .unwrap_or(0),
        )
    }

    fn lattice_value(&self, x: i64, y: i64, z: i64) -> f64 {
        let hashed = self.permute(self.permute(self.permute(x).wrapping_add(y)).wrapping_add(z));
        self.lattice
            .get((hashed & TABLE_MASK) as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Single-octave noise value in `[0, 1]`
    pub fn single(&self, x: f64, y: f64, z: f64) -> f64 {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return 0.5;
        }

        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (fx, fy, fz) = (smoothstep(x - x0), smoothstep(y - y0), smoothstep(z - z0));
        let (ix, iy, iz) = (x0 as i64, y0 as i64, z0 as i64);

        let corner = |dx: i64, dy: i64, dz: i64| {
            self.lattice_value(ix.wrapping_add(dx), iy.wrapping_add(dy), iz.wrapping_add(dz))
        };

        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), fx);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), fx);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), fx);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), fx);

        let near = lerp(x00, x10, fy);
        let far = lerp(x01, x11, fy);

        lerp(near, far, fz).clamp(0.0, 1.0)
    }

    /// Octave-summed noise value in `[0, 1]`
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude_sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..NOISE_OCTAVES {
            total += amplitude * self.single(x * frequency, y * frequency, z * frequency);
            amplitude_sum += amplitude;
            amplitude *= NOISE_FALLOFF;
            frequency *= 2.0;
        }

        if amplitude_sum <= 0.0 {
            return 0.5;
        }
        (total / amplitude_sum).clamp(0.0, 1.0)
    }

    /// Uniform hash of integer coordinates in `[0, 1)`
    ///
    /// Unlike [`Self::sample`] neighbouring inputs are uncorrelated, which makes
    /// this suitable for per-region coin flips that must stay stable between
    /// frames.
    pub fn hash01(&self, x: i64, y: i64, z: i64) -> f64 {
        let mut h = self.seed;
        for value in [x, y, z] {
            h = splitmix64(h ^ (value as u64));
        }
        // Top 53 bits give an exactly representable fraction
        (h >> 11) as f64 / (1u64 << 53) as f64
    }
}

const fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
