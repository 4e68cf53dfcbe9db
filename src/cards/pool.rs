//! The standard card pool and the one-shot deck partition.

use super::card::{Card, CardId};
use crate::core::GameRng;

/// The standard 16-animal pool.
///
/// Ids are assigned sequentially at creation. An embedding application may
/// supply its own pool through `MatchBuilder::pool` instead.
#[must_use]
pub fn standard_pool() -> Vec<Card> {
    let specs: [(&str, u32, u32, u32); 16] = [
        ("Lion", 190, 250, 14),
        ("Elephant", 6000, 600, 70),
        ("Tiger", 220, 290, 16),
        ("Giraffe", 1200, 500, 25),
        ("Rhinoceros", 2500, 400, 50),
        ("Crocodile", 500, 520, 70),
        ("Bear", 600, 280, 30),
        ("Wolf", 50, 160, 13),
        ("Zebra", 350, 250, 25),
        ("Hippopotamus", 1500, 350, 40),
        ("Kangaroo", 85, 230, 23),
        ("Panther", 90, 180, 15),
        ("Dog", 40, 110, 13),
        ("Cat", 5, 50, 15),
        ("Eagle", 6, 220, 25),
        ("Tortoise", 300, 150, 100),
    ];

    specs
        .iter()
        .enumerate()
        .map(|(i, &(name, weight, length, lifespan))| {
            Card::new(CardId::new(i as u32), name, weight, length, lifespan)
        })
        .collect()
}

/// Shuffle the pool uniformly and split it into the two starting hands.
///
/// The first half goes to seat A and the remainder to seat B; an odd pool
/// gives seat B the extra card. Every card lands in exactly one hand.
/// Invoked once per match, before any round.
#[must_use]
pub fn deal(mut pool: Vec<Card>, rng: &mut GameRng) -> (Vec<Card>, Vec<Card>) {
    rng.shuffle(&mut pool);
    let second = pool.split_off(pool.len() / 2);
    (pool, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_pool_shape() {
        let pool = standard_pool();
        assert_eq!(pool.len(), 16);

        let ids: FxHashSet<_> = pool.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 16);

        let lion = pool.iter().find(|c| c.name == "Lion").unwrap();
        assert_eq!((lion.weight, lion.length, lion.lifespan), (190, 250, 14));
    }

    #[test]
    fn test_deal_conserves_pool() {
        let pool = standard_pool();
        let expected: FxHashSet<_> = pool.iter().map(|c| c.id).collect();

        let mut rng = GameRng::new(42);
        let (a, b) = deal(pool, &mut rng);

        assert_eq!(a.len(), 8);
        assert_eq!(b.len(), 8);

        let dealt: FxHashSet<_> = a.iter().chain(b.iter()).map(|c| c.id).collect();
        assert_eq!(dealt.len(), 16); // no duplicates across hands
        assert_eq!(dealt, expected); // nothing dropped or invented
    }

    #[test]
    fn test_deal_odd_pool_gives_extra_to_second_hand() {
        let mut pool = standard_pool();
        pool.push(Card::new(CardId::new(16), "Moose", 450, 300, 20));

        let mut rng = GameRng::new(42);
        let (a, b) = deal(pool, &mut rng);

        assert_eq!(a.len(), 8);
        assert_eq!(b.len(), 9);
    }

    #[test]
    fn test_deal_is_seed_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let (a1, b1) = deal(standard_pool(), &mut rng1);
        let (a2, b2) = deal(standard_pool(), &mut rng2);

        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }
}
