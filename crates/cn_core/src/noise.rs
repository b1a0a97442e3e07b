/// Trait for noise generation strategies.
///
/// A strategy turns a world position into a scalar. Consumers that sample a
/// field (preview grids, chunk generators) only see this trait.
///
/// The trait is object-safe so strategies can be stored as `Box<dyn NoiseStrategy>`.
pub trait NoiseStrategy: Send + Sync {
    /// Generate a noise value at the given coordinates and detail level.
    ///
    /// # Arguments
    /// * `x` - X coordinate in noise space (one unit = one tile at frequency 1)
    /// * `y` - Y coordinate in noise space
    /// * `detail_level` - Extra octaves to add on top of the strategy's base count
    ///
    /// # Returns
    /// A non-negative value, approximately in [0.0, 1.0].
    fn generate(&self, x: f64, y: f64, detail_level: u32) -> f64;

    /// Returns the name of this noise strategy for debugging.
    fn name(&self) -> &'static str {
        "NoiseStrategy"
    }
}
