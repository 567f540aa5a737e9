use lotto_common::lotto::ticket::Ticket;
use lotto_common::lotto::tickets::Tickets;
use rand::Rng;
use tracing::debug;

/// Generates `count` random tickets from `rng`.
///
/// Pass a seeded RNG to get a reproducible batch.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Tickets {
    debug!(count, "generating automatic tickets");
    (0..count).map(|_| Ticket::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_amount() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate(5, &mut rng).len(), 5);
        assert!(generate(0, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_tickets() {
        let first = generate(10, &mut StdRng::seed_from_u64(1));
        let second = generate(10, &mut StdRng::seed_from_u64(1));
        assert_eq!(first, second);
    }
}
