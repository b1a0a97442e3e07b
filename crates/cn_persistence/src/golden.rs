use cn_core::NoiseError;
use cn_noise::WorleyNoise;
use serde::{Deserialize, Serialize};

/// Query point of a test vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SamplePoint {
    TwoD([f64; 2]),
    ThreeD([f64; 3]),
}

/// One recorded noise evaluation.
///
/// `levels == 0` records a plain distance query, anything else a fractal sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    pub frequency: u32,
    pub tile_cells: u32,
    pub seed: u32,
    pub point: SamplePoint,
    pub levels: u32,
    pub expected: f64,
}

/// A vector whose recomputed value disagrees with the recorded one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f64,
    pub actual: Result<f64, NoiseError>,
}

/// Parse a RON list of test vectors.
pub fn load_vectors(source: &str) -> Result<Vec<TestVector>, ron::error::SpannedError> {
    ron::from_str(source)
}

/// Serialize test vectors as pretty RON, one vector per entry.
pub fn save_vectors(vectors: &[TestVector]) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(vectors, ron::ser::PrettyConfig::new())
}

/// Recompute the value a vector describes with the default hash.
pub fn evaluate(vector: &TestVector) -> Result<f64, NoiseError> {
    let noise = WorleyNoise::new(vector.frequency, vector.tile_cells, vector.seed)?;
    match (vector.point, vector.levels) {
        (SamplePoint::TwoD(p), 0) => Ok(noise.distance_2d(p)),
        (SamplePoint::ThreeD(p), 0) => Ok(noise.distance_3d(p)),
        (SamplePoint::TwoD(p), levels) => noise.fractal_2d(p, levels),
        (SamplePoint::ThreeD(p), levels) => noise.fractal_3d(p, levels),
    }
}

/// Check every vector and collect the ones off by more than `tolerance`.
pub fn verify(vectors: &[TestVector], tolerance: f64) -> Vec<Mismatch> {
    vectors
        .iter()
        .enumerate()
        .filter_map(|(index, vector)| {
            let actual = evaluate(vector);
            let matches = matches!(actual, Ok(v) if (v - vector.expected).abs() <= tolerance);
            (!matches).then_some(Mismatch {
                index,
                expected: vector.expected,
                actual,
            })
        })
        .collect()
}
