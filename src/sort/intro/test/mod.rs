//! Tests for intro sort and its building blocks.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::helper::{natural_order, Helper, InstrumentingHelper, NonInstrumentingHelper};
    use crate::instrument::Metric;
    use crate::sort::intro::*;
    use crate::sort::testing::{counting, plain};
    use crate::sort::{sort_trial, Sort};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::Rng;

    const MIXED: [i32; 15] = [15, 3, -1, 2, 4, 1, 0, 5, 8, 6, 1, 9, 17, 7, 11];

    fn counting_with_cutoff(n: usize, cutoff: usize) -> InstrumentingHelper<i32> {
        let config = Config::default()
            .with_instrument(true)
            .with_inversion_tracking(true)
            .with_cutoff(cutoff)
            .with_seed(0);
        InstrumentingHelper::new("intro sort", natural_order(), n, 0, &config)
    }

    #[test]
    fn test_sorts_small_array() {
        let mut sorter = IntroSort::new(plain(4));
        let mut xs = vec![3, 4, 2, 1];
        sorter.mutating_sort(&mut xs);
        assert_eq!(xs, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_edge_inputs() {
        let mut sorter = IntroSort::new(plain(0));
        let mut empty: Vec<i32> = vec![];
        sorter.mutating_sort(&mut empty);
        assert!(empty.is_empty());

        for (input, expected) in [
            (vec![9, 7, 5, 3, 1], vec![1, 3, 5, 7, 9]),
            (vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5]),
            (vec![3, 1, 2, 3, 1], vec![1, 1, 2, 3, 3]),
        ] {
            let mut xs = input;
            sorter.mutating_sort(&mut xs);
            assert_eq!(xs, expected);
        }
    }

    #[test]
    fn test_partition() {
        let mut helper = NonInstrumentingHelper::with_comparator("chars", natural_order::<char>());
        let mut xs: Vec<char> = "PABXWPPVPDPCYZ".chars().collect();
        let n = xs.len();
        let partitions = partition(&mut helper, &mut xs, 0, n);
        assert_eq!(partitions[0], Partition::new(0, 4));
        assert_eq!(partitions[1], Partition::new(5, 13));
        assert_eq!(partitions[2], Partition::new(14, n));
        assert!(partitions[2].is_empty());
        assert_eq!(xs[0], 'C');
        assert_eq!(xs[n - 1], 'Z');
        assert_eq!(xs[4], 'P');
    }

    #[test]
    fn test_partition_orders_around_pivots() {
        let mut helper = plain(MIXED.len());
        let mut xs = MIXED.to_vec();
        let [low, middle, high] = partition(&mut helper, &mut xs, 0, MIXED.len());
        // pivots are 11 and 15 after the initial exchange
        assert_eq!((xs[low.to], xs[middle.to]), (11, 15));
        assert!(xs[low.from..low.to].iter().all(|&x| x < 11));
        assert!(xs[middle.from..middle.to].iter().all(|&x| (11..=15).contains(&x)));
        assert!(xs[high.from..high.to].iter().all(|&x| x > 15));
    }

    #[test]
    fn test_heap_sort() {
        let mut helper = plain(MIXED.len());
        let mut xs = MIXED.to_vec();
        heap_sort(&mut helper, &mut xs, 0, MIXED.len());
        assert!(helper.is_sorted(&xs));

        let mut ys = vec![5, 4, 3, 2, 1, 0];
        heap_sort(&mut helper, &mut ys, 1, 5);
        assert_eq!(ys, vec![5, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_cutoff_defaults_to_sixteen() {
        assert_eq!(IntroSort::new(plain(10)).cutoff(), DEFAULT_CUTOFF);
        assert_eq!(IntroSort::new(counting_with_cutoff(10, 1)).cutoff(), 1);
    }

    #[test]
    fn test_small_range_is_insertion_sorted() {
        let mut sorter = IntroSort::new(counting(MIXED.len()));
        let mut xs = MIXED.to_vec();
        sorter.mutating_sort(&mut xs);
        assert!(sorter.helper().is_sorted(&xs));
        assert_eq!(sorter.max_depth(), 0);
    }

    #[test]
    fn test_random_compares_within_worst_case() {
        let n = 128;
        let mut sorter = IntroSort::new(counting_with_cutoff(n, 1));
        sorter.init(n);
        let mut xs = sorter
            .helper_mut()
            .random(&mut |r: &mut StdRng| r.random_range(0..10_000))
            .unwrap();
        sort_trial(&mut sorter, &mut xs).unwrap();

        let pack = sorter.helper().stat_pack().unwrap();
        let compares = pack.mean(Metric::Compares).unwrap();
        let worst = (2.0 * n as f64 * (n as f64).ln()).round();
        assert!(compares <= worst, "{} compares, worst {}", compares, worst);
        assert!(pack.mean(Metric::Inversions).unwrap() <= pack.mean(Metric::Fixes).unwrap());
        assert!(sorter.max_depth() <= 2 * 7);
    }

    #[test]
    fn test_sorted_input_hits_depth_limit() {
        let n = 128;
        let mut sorter = IntroSort::new(counting_with_cutoff(n, 1));
        let mut xs: Vec<i32> = (0..n as i32).collect();
        sort_trial(&mut sorter, &mut xs).unwrap();
        assert_eq!(sorter.max_depth(), 14);
    }

    proptest! {
        #[test]
        fn prop_sorts_any_input(cutoff in 1usize..20, xs in prop::collection::vec(-500i32..500, 0..400)) {
            let mut ys = xs.clone();
            let mut sorter = IntroSort::new(counting_with_cutoff(ys.len(), cutoff));
            prop_assert!(sort_trial(&mut sorter, &mut ys).is_ok());
            let mut expected = xs;
            expected.sort();
            prop_assert_eq!(ys, expected);
        }
    }
}
