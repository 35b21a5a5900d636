use crate::{BingoError, Card, CardSpec, EntryPool};
use rand::seq::index;
use rand::Rng;

/// Draws `count` distinct entries from the pool, uniformly at random.
///
/// Sampling is without replacement: a partial Fisher-Yates shuffle over pool
/// indices (`rand::seq::index::sample`), so a card can never repeat an entry.
/// For a fixed RNG state the drawn sequence is fully deterministic; each call
/// advances the RNG, so successive cards differ when the pool is larger than
/// the per-card requirement.
///
/// # Panics
/// Panics if `count > pool.len()`. [`generate`] and [`Cards::new`] validate
/// pool sufficiency before sampling.
pub fn sample_entries<R: Rng + ?Sized>(
    pool: &EntryPool,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    index::sample(rng, pool.len(), count)
        .iter()
        .map(|i| pool.entries()[i].clone())
        .collect()
}

/// Generates the full batch of cards a spec asks for.
///
/// Validation is fail-fast: an invalid spec or an insufficient pool is
/// rejected before any sampling happens, so no partial batch is ever
/// produced. The output is deterministic given the same pool, spec, and
/// RNG state.
///
/// Cards are sampled independently from the full pool, so with a pool larger
/// than the per-card requirement, two cards may or may not share entries.
/// That is expected; only uniqueness within one card is guaranteed.
pub fn generate<R: Rng + ?Sized>(
    pool: &EntryPool,
    spec: &CardSpec,
    rng: &mut R,
) -> Result<Vec<Card>, BingoError> {
    let spec = checked_spec(pool, spec.clone())?;
    let required = spec.entries_required();
    Ok((0..spec.count)
        .map(|_| spec.build_card(sample_entries(pool, required, rng)))
        .collect())
}

/// Normalizes a spec and fail-fast checks it against the pool.
fn checked_spec(pool: &EntryPool, spec: CardSpec) -> Result<CardSpec, BingoError> {
    let spec = spec.normalized();
    spec.validate()?;
    if pool.is_empty() {
        return Err(BingoError::EmptyPool);
    }
    let required = spec.entries_required();
    if pool.len() < required {
        return Err(BingoError::InsufficientEntries {
            required,
            actual: pool.len(),
        });
    }
    Ok(spec)
}

/// An iterator that produces bingo cards from a shared RNG stream.
///
/// Created by [`Cards::new`]. The iterator is infinite; every `next()` draws
/// a fresh entry sample and lays it out per the spec. Use `take` to cap it,
/// or [`generate`] for a one-shot batch of `spec.count` cards.
///
/// # Example
///
/// ```
/// use bingo_tex::{Cards, CardSpec, EntryPool};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let pool = EntryPool::from_lines(["A", "B", "C", "D", "E", "F"]);
/// let spec = CardSpec { rows: 2, cols: 2, ..Default::default() };
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let cards = Cards::new(&pool, spec, rng).unwrap();
///
/// for card in cards.take(3) {
///     println!("first cell: {}", card.get(0, 0));
/// }
/// ```
pub struct Cards<'a, R> {
    pool: &'a EntryPool,
    spec: CardSpec,
    rng: R,
}

impl<'a, R: Rng> Cards<'a, R> {
    /// Creates a card iterator over the given pool and spec.
    ///
    /// The spec is normalized (free-space defaulting rules applied) and
    /// validated up front, and the pool is checked against the per-card
    /// entry requirement, so iteration itself cannot fail.
    pub fn new(pool: &'a EntryPool, spec: CardSpec, rng: R) -> Result<Self, BingoError> {
        let spec = checked_spec(pool, spec)?;
        Ok(Self { pool, spec, rng })
    }

    /// Returns the normalized spec this iterator builds cards from.
    pub fn spec(&self) -> &CardSpec {
        &self.spec
    }
}

impl<R: Rng> Iterator for Cards<'_, R> {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        let sampled = sample_entries(self.pool, self.spec.entries_required(), &mut self.rng);
        Some(self.spec.build_card(sampled))
    }
}
