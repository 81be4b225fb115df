//! Winner selection

use rand::seq::SliceRandom;
use rand::Rng;

use crate::crawler::comment::Comment;

/// Draw up to `count` distinct winners using the thread-local RNG
///
/// Returns `min(count, unique.len())` entries; an empty input yields an empty
/// selection.
pub fn draw_winners(unique: &[Comment], count: usize) -> Vec<Comment> {
    draw_winners_with_rng(unique, count, &mut rand::thread_rng())
}

/// Draw up to `count` distinct winners with a caller-supplied RNG
///
/// Every entry has the same chance of being picked and none is picked twice.
///
/// # Example
/// ```
/// use comment_raffle::crawler::Comment;
/// use comment_raffle::lottery::draw_winners_with_rng;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let entrants = vec![
///     Comment::new("A", "1", "", false),
///     Comment::new("B", "2", "", false),
///     Comment::new("C", "3", "", false),
/// ];
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let winners = draw_winners_with_rng(&entrants, 2, &mut rng);
/// assert_eq!(winners.len(), 2);
/// assert_ne!(winners[0], winners[1]);
/// ```
pub fn draw_winners_with_rng<R>(unique: &[Comment], count: usize, rng: &mut R) -> Vec<Comment>
where
    R: Rng + ?Sized,
{
    if unique.is_empty() {
        return Vec::new();
    }

    let amount = count.min(unique.len());

    tracing::debug!(entrants = unique.len(), amount, "Drawing winners");

    unique.choose_multiple(rng, amount).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    fn entrants(n: usize) -> Vec<Comment> {
        (0..n)
            .map(|i| Comment::new(format!("user{i}"), "entry", "", false))
            .collect()
    }

    #[test]
    fn test_draw_from_empty() {
        assert!(draw_winners(&[], 3).is_empty());
    }

    #[test]
    fn test_draw_caps_at_available() {
        let pool = entrants(3);
        let winners = draw_winners(&pool, 10);
        assert_eq!(winners.len(), 3);
    }

    #[test]
    fn test_draw_zero() {
        assert!(draw_winners(&entrants(5), 0).is_empty());
    }

    #[test]
    fn test_draw_without_replacement() {
        let pool = entrants(20);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let winners = draw_winners_with_rng(&pool, 7, &mut rng);
            assert_eq!(winners.len(), 7);

            let names: HashSet<_> = winners.iter().map(|w| &w.display_name).collect();
            assert_eq!(names.len(), 7, "winners must be distinct");
            assert!(winners.iter().all(|w| pool.contains(w)));
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let pool = entrants(10);
        let a = draw_winners_with_rng(&pool, 3, &mut ChaCha8Rng::seed_from_u64(1));
        let b = draw_winners_with_rng(&pool, 3, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_entrant_can_win() {
        // With 4 entrants and 2000 single draws, each is expected ~500 times.
        let pool = entrants(4);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut wins: HashMap<String, usize> = HashMap::new();

        for _ in 0..2000 {
            let winner = draw_winners_with_rng(&pool, 1, &mut rng);
            *wins.entry(winner[0].display_name.clone()).or_default() += 1;
        }

        assert_eq!(wins.len(), 4);
        for (name, count) in wins {
            assert!(
                (300..=700).contains(&count),
                "{name} won {count} times, expected roughly 500"
            );
        }
    }
}
