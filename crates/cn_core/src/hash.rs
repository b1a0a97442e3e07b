/// A deterministic keyed 32-bit hash.
///
/// This is the only source of randomness in the noise engine. Implementations
/// must be pure: the same `(key, seed)` always yields the same value, and
/// distinct keys should look uniformly distributed over the whole `u32` range.
pub trait KeyedHash: Send + Sync {
    fn hash32(&self, key: u32, seed: u32) -> u32;
}

const PRIME32_2: u32 = 2_246_822_519;
const PRIME32_3: u32 = 3_266_489_917;
const PRIME32_4: u32 = 668_265_263;
const PRIME32_5: u32 = 374_761_393;

/// xxHash32 of a single 4-byte little-endian key.
///
/// Only the short-input path of xxHash32 is needed, since every key is one `u32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XxHash32;

impl KeyedHash for XxHash32 {
    #[inline]
    fn hash32(&self, key: u32, seed: u32) -> u32 {
        let mut h = seed.wrapping_add(PRIME32_5).wrapping_add(4);
        h = h.wrapping_add(key.wrapping_mul(PRIME32_3));
        h = h.rotate_left(17).wrapping_mul(PRIME32_4);

        // Avalanche
        h ^= h >> 15;
        h = h.wrapping_mul(PRIME32_2);
        h ^= h >> 13;
        h = h.wrapping_mul(PRIME32_3);
        h ^= h >> 16;
        h
    }
}

/// Hash `(key, seed)` into a fraction in `[0, 1)`.
#[inline]
pub fn hash01<H: KeyedHash + ?Sized>(hash: &H, key: u32, seed: u32) -> f64 {
    f64::from(hash.hash32(key, seed)) / 4_294_967_296.0
}
