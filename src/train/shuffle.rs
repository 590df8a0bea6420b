use crate::math::random::UniformSource;

/// Reorders `order` in place: every position `i` is swapped with a partner
/// drawn uniformly from the whole slice, `[0, len)`.
///
/// This is not the textbook Fisher-Yates (which draws from `[i, len)`), and
/// the permutations it produces are not equally likely. Training runs are
/// reproducible against it, so it stays as is.
pub fn shuffle_order<R: UniformSource + ?Sized>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    for i in 0..n {
        let r = rng.next_index(n);
        order.swap(i, r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::seeded;

    #[test]
    fn result_is_a_permutation() {
        let mut rng = seeded(21);
        let mut order: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            shuffle_order(&mut order, &mut rng);
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<usize> = (0..8).collect();
        let mut b = a.clone();
        shuffle_order(&mut a, &mut seeded(13));
        shuffle_order(&mut b, &mut seeded(13));
        assert_eq!(a, b);
    }

    #[test]
    fn consumes_one_draw_per_position() {
        let mut order: Vec<usize> = (0..4).collect();
        let mut rng = seeded(2);
        shuffle_order(&mut order, &mut rng);

        let mut expected: Vec<usize> = (0..4).collect();
        let mut replay = seeded(2);
        for i in 0..4 {
            let r = replay.next_index(4);
            expected.swap(i, r);
        }
        assert_eq!(order, expected);
    }

    #[test]
    fn empty_and_single_orders_are_untouched() {
        let mut rng = seeded(1);
        let mut empty: Vec<usize> = vec![];
        shuffle_order(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![0];
        shuffle_order(&mut one, &mut rng);
        assert_eq!(one, vec![0]);
    }
}
