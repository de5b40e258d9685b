use rand::Rng;
use rand::seq::SliceRandom;

pub static QUOTES: [&str; 11] = [
    "Ship small, ship often.",
    "Automation is the art of not doing the same thing twice.",
    "If it hurts, do it more often — until it doesn’t.",
    "Simplicity scales.",
    "Remember Abdikarim, motivation is volatile, consistency is key.",
    "Logs tell stories; metrics reveal truth; traces connect the dots.",
    "Containers keep it tidy. CI/CD keeps it moving.",
    "Your future self thanks you for writing docs.",
    "Good tests are a love letter to your codebase.",
    "Measure what matters, not what’s easy.",
    "Bash it till you can Python it.",
];

/// Uniform pick from [`QUOTES`].
pub fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_is_from_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert!(QUOTES.contains(&pick_quote(&mut rng)));
        }
    }

    #[test]
    fn test_pick_covers_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<&str> = (0..2_000).map(|_| pick_quote(&mut rng)).collect();
        assert_eq!(seen.len(), QUOTES.len());
    }

    #[test]
    fn test_pool_has_no_duplicates() {
        let unique: HashSet<&str> = QUOTES.iter().copied().collect();
        assert_eq!(unique.len(), QUOTES.len());
    }
}
