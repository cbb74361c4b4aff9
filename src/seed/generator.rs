//! Uniform random seed generation.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::Alphabet;

/// Generates a candidate seed: the literal `prefix` followed by
/// `seed_length - prefix.len()` characters drawn independently and uniformly
/// from `alphabet`.
///
/// The random source only needs statistical quality, not cryptographic
/// strength; vanity identifiers are not secrets. Callers validate
/// `prefix.len() <= seed_length` before the search starts.
#[inline]
pub fn generate_seed<R: Rng>(
    alphabet: Alphabet,
    prefix: &str,
    seed_length: usize,
    rng: &mut R,
) -> String {
    debug_assert!(prefix.len() <= seed_length);

    let chars = alphabet.chars();
    let index = Uniform::from(0..chars.len());

    let mut seed = String::with_capacity(seed_length);
    seed.push_str(prefix);
    for _ in prefix.len()..seed_length {
        seed.push(chars[index.sample(rng)] as char);
    }
    seed
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_length_and_prefix() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let seed = generate_seed(Alphabet::Alphanumeric, "ab", 90, &mut rng);
            assert_eq!(seed.len(), 90);
            assert!(seed.starts_with("ab"));
        }
    }

    #[test]
    fn test_suffix_drawn_from_alphabet() {
        let mut rng = SmallRng::seed_from_u64(7);
        let seed = generate_seed(Alphabet::Hex, "dead", 64, &mut rng);
        assert!(seed[4..].bytes().all(|c| Alphabet::Hex.chars().contains(&c)));
    }

    #[test]
    fn test_prefix_fills_entire_seed() {
        let mut rng = SmallRng::seed_from_u64(7);
        let seed = generate_seed(Alphabet::Hex, "abcd", 4, &mut rng);
        assert_eq!(seed, "abcd");
    }

    #[test]
    fn test_same_rng_state_same_seed() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(
            generate_seed(Alphabet::Alphanumeric, "x", 90, &mut a),
            generate_seed(Alphabet::Alphanumeric, "x", 90, &mut b)
        );
    }

    #[test]
    fn test_consecutive_seeds_differ() {
        let mut rng = SmallRng::seed_from_u64(7);
        let a = generate_seed(Alphabet::Alphanumeric, "", 90, &mut rng);
        let b = generate_seed(Alphabet::Alphanumeric, "", 90, &mut rng);
        assert_ne!(a, b);
    }
}
