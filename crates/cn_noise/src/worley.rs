use cn_core::{KeyedHash, NoiseConfig, NoiseError, XxHash32};
use noise::NoiseFn;

use crate::grid::Lattice;

/// Tileable cellular (Worley) noise.
///
/// Returns the distance from a point to the nearest feature point, measured in
/// cell units. Every query takes `&self`, so one instance can be shared across
/// threads as long as the hash is `Sync`.
#[derive(Clone, Debug)]
pub struct WorleyNoise<H: KeyedHash = XxHash32> {
    config: NoiseConfig,
    hash: H,
}

impl WorleyNoise<XxHash32> {
    /// Create an engine backed by the default xxHash32 primitive.
    ///
    /// # Arguments
    /// * `frequency` - Cells per unit of input space (>= 1)
    /// * `tile_cells` - Cells after which the pattern repeats (>= 1)
    /// * `seed` - Noise seed
    pub fn new(frequency: u32, tile_cells: u32, seed: u32) -> Result<Self, NoiseError> {
        Ok(Self::from_config(NoiseConfig::new(frequency, tile_cells, seed)?))
    }

    pub fn from_config(config: NoiseConfig) -> Self {
        Self::with_hash(config, XxHash32)
    }
}

impl<H: KeyedHash> WorleyNoise<H> {
    /// Create an engine with a custom hash primitive.
    pub fn with_hash(config: NoiseConfig, hash: H) -> Self {
        Self { config, hash }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Lattice of the first octave.
    pub fn lattice(&self) -> Lattice {
        Lattice::from_config(&self.config)
    }

    /// Distance to the nearest feature point around a 2D point.
    pub fn distance_2d(&self, point: [f64; 2]) -> f64 {
        self.distance_2d_at(point, self.lattice())
    }

    /// Distance to the nearest feature point around a 3D point.
    pub fn distance_3d(&self, point: [f64; 3]) -> f64 {
        self.distance_3d_at(point, self.lattice())
    }

    /// 2D search on an explicit lattice.
    ///
    /// All nine cells of the 3×3 block around the containing cell are checked.
    pub fn distance_2d_at(&self, point: [f64; 2], lattice: Lattice) -> f64 {
        let (cell, p) = lattice.cell_of_2d(point);
        let seed = self.config.seed();

        let mut min_dist = f64::INFINITY;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let f = lattice.feature_point_2d(&self.hash, seed, cell.offset(dx, dy));
                let ox = f[0] - p[0];
                let oy = f[1] - p[1];
                min_dist = min_dist.min((ox * ox + oy * oy).sqrt());
            }
        }
        min_dist
    }

    /// 3D search on an explicit lattice.
    ///
    /// All 27 cells of the 3×3×3 block are checked.
    pub fn distance_3d_at(&self, point: [f64; 3], lattice: Lattice) -> f64 {
        let (cell, p) = lattice.cell_of_3d(point);
        let seed = self.config.seed();

        let mut min_dist = f64::INFINITY;
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let f =
                        lattice.feature_point_3d(&self.hash, seed, cell.offset(dx, dy, dz));
                    let ox = f[0] - p[0];
                    let oy = f[1] - p[1];
                    let oz = f[2] - p[2];
                    min_dist = min_dist.min((ox * ox + oy * oy + oz * oz).sqrt());
                }
            }
        }
        min_dist
    }
}

impl<H: KeyedHash> NoiseFn<f64, 2> for WorleyNoise<H> {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.distance_2d(point)
    }
}

impl<H: KeyedHash> NoiseFn<f64, 3> for WorleyNoise<H> {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.distance_3d(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    fn sample_points_2d() -> impl Iterator<Item = [f64; 2]> {
        (0..200).map(|i| {
            let t = i as f64;
            [(t * 0.173).sin() * 3.1, (t * 0.291).cos() * 2.7 - 0.35]
        })
    }

    fn sample_points_3d() -> impl Iterator<Item = [f64; 3]> {
        (0..120).map(|i| {
            let t = i as f64;
            [(t * 0.137).sin() * 2.3, (t * 0.219).cos() * 1.9, t * 0.031 - 1.7]
        })
    }

    #[test]
    fn origin_scenario_is_stable() {
        let noise = WorleyNoise::new(4, 1, 0).unwrap();
        let value = noise.distance_2d([0.0, 0.0]);
        assert!((value - 0.469_846_437_621_860_74).abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn distance_is_deterministic() {
        let a = WorleyNoise::new(5, 2, 99).unwrap();
        let b = WorleyNoise::new(5, 2, 99).unwrap();
        for p in sample_points_2d() {
            assert_eq!(a.distance_2d(p).to_bits(), b.distance_2d(p).to_bits());
        }
        for p in sample_points_3d() {
            assert_eq!(a.distance_3d(p).to_bits(), b.distance_3d(p).to_bits());
        }
    }

    #[test]
    fn distance_is_non_negative() {
        let noise = WorleyNoise::new(7, 1, 3).unwrap();
        for p in sample_points_2d() {
            let d = noise.distance_2d(p);
            assert!(d >= 0.0 && d.is_finite(), "distance {} at {:?}", d, p);
        }
        for p in sample_points_3d() {
            let d = noise.distance_3d(p);
            assert!(d >= 0.0 && d.is_finite(), "distance {} at {:?}", d, p);
        }
    }

    #[test]
    fn tiles_along_each_axis_2d() {
        for (frequency, tile_cells) in [(4, 1), (3, 2), (1, 5)] {
            let noise = WorleyNoise::new(frequency, tile_cells, 17).unwrap();
            let period = noise.config().tile_size();
            for p in sample_points_2d() {
                let d = noise.distance_2d(p);
                let dx = noise.distance_2d([p[0] + period, p[1]]);
                let dy = noise.distance_2d([p[0], p[1] - period]);
                assert!((d - dx).abs() < EPS, "x period broken at {:?}", p);
                assert!((d - dy).abs() < EPS, "y period broken at {:?}", p);
            }
        }
    }

    #[test]
    fn tiles_along_each_axis_3d() {
        let noise = WorleyNoise::new(3, 2, 5).unwrap();
        let period = noise.config().tile_size();
        for p in sample_points_3d() {
            let d = noise.distance_3d(p);
            for axis in 0..3 {
                let mut shifted = p;
                shifted[axis] += period;
                let ds = noise.distance_3d(shifted);
                assert!((d - ds).abs() < EPS, "axis {} period broken at {:?}", axis, p);
            }
        }
    }

    #[test]
    fn seeds_produce_different_layouts() {
        let a = WorleyNoise::new(6, 1, 1).unwrap();
        let b = WorleyNoise::new(6, 1, 2).unwrap();
        let n = 256;
        let points: Vec<[f64; 2]> = (0..n)
            .map(|i| [(i % 16) as f64 / 16.0, (i / 16) as f64 / 16.0])
            .collect();

        let differing = points
            .iter()
            .filter(|&&p| (a.distance_2d(p) - b.distance_2d(p)).abs() > 1e-6)
            .count();
        assert!(differing > n * 9 / 10, "only {} of {} samples differ", differing, n);

        let mean_abs_diff: f64 = points
            .iter()
            .map(|&p| (a.distance_2d(p) - b.distance_2d(p)).abs())
            .sum::<f64>()
            / n as f64;
        assert!(mean_abs_diff > 0.05, "mean difference {} too small", mean_abs_diff);
    }

    #[test]
    fn slice_at_z_zero_keeps_invariants() {
        let noise = WorleyNoise::new(4, 1, 8).unwrap();
        let period = noise.config().tile_size();
        for p in sample_points_2d() {
            let d2 = noise.distance_2d(p);
            let d3 = noise.distance_3d([p[0], p[1], 0.0]);
            let d3_shifted = noise.distance_3d([p[0] + period, p[1], 0.0]);
            assert!(d2 >= 0.0 && d3 >= 0.0);
            assert!((d3 - d3_shifted).abs() < EPS);
        }
    }

    #[test]
    fn single_octave_stays_near_unit_range() {
        let noise = WorleyNoise::new(10, 1, 0).unwrap();
        for p in sample_points_2d() {
            // The nearest point is always within the 3×3 block.
            assert!(noise.distance_2d(p) < 2.0_f64.sqrt());
        }
    }

    #[test]
    fn shifting_by_tile_cells_repeats_pattern() {
        let noise = WorleyNoise::new(3, 2, 0).unwrap();
        let p = [0.37, -0.21];
        let d = noise.distance_2d(p);
        assert!((d - noise.distance_2d([p[0] + 2.0, p[1]])).abs() < EPS);
        assert!((d - noise.distance_2d([p[0], p[1] - 2.0])).abs() < EPS);
    }

    #[test]
    fn huge_finite_points_do_not_panic() {
        let noise = WorleyNoise::new(4, 1, 0).unwrap();
        for p in [[1e300, 0.0], [0.0, -1e300], [-1e300, 1e300]] {
            let d = noise.distance_2d(p);
            assert!(d >= 0.0, "distance {} at {:?}", d, p);
        }
        for p in [[0.0, -1e300, 0.0], [1e300, 0.0, -1e300]] {
            let d = noise.distance_3d(p);
            assert!(d >= 0.0, "distance {} at {:?}", d, p);
        }
        assert!(noise.fractal_2d([1e300, 1e300], 3).unwrap() >= 0.0);
    }

    #[test]
    fn injected_hash_controls_features() {
        struct Centered;
        impl KeyedHash for Centered {
            fn hash32(&self, _key: u32, _seed: u32) -> u32 {
                1 << 31
            }
        }

        let config = NoiseConfig::new(2, 1, 0).unwrap();
        let noise = WorleyNoise::with_hash(config, Centered);
        // Every feature sits at a cell center; (0.25, 0.25) is the center of cell (0, 0).
        assert_eq!(noise.distance_2d([0.25, 0.25]), 0.0);
        assert!((noise.distance_2d([0.0, 0.0]) - 0.5_f64.sqrt()).abs() < 1e-12);
        assert!((noise.distance_3d([0.0, 0.25, 0.25]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn noise_fn_matches_distance() {
        let noise = WorleyNoise::new(4, 2, 21).unwrap();
        let p2 = [0.3, -0.8];
        let p3 = [0.3, -0.8, 1.1];
        assert_eq!(NoiseFn::<f64, 2>::get(&noise, p2), noise.distance_2d(p2));
        assert_eq!(NoiseFn::<f64, 3>::get(&noise, p3), noise.distance_3d(p3));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WorleyNoise>();
    }
}
