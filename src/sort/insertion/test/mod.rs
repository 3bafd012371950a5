//! Tests for the insertion sort variants.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::helper::{
        is_sorted_by, Comparator, InstrumentingHelper, NonInstrumentingHelper,
    };
    use crate::instrument::Metric;
    use crate::sort::insertion::*;
    use crate::sort::testing::{counted_order, counting, plain, reversed};
    use crate::sort::{sort_trial, Sort};
    use proptest::prelude::*;
    use std::rc::Rc;

    #[test]
    fn test_sorts_small_array() {
        let mut sorter = InsertionSort::new(plain(4));
        let mut xs = vec![3, 4, 2, 1];
        sorter.mutating_sort(&mut xs);
        assert_eq!(xs, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorts_only_the_requested_range() {
        let mut sorter = InsertionSort::new(plain(8));
        let mut xs = vec![9, 8, 5, 3, 4, 1, 0, -1];
        sorter.sort(&mut xs, 2, 6);
        assert_eq!(xs, vec![9, 8, 1, 3, 4, 5, 0, -1]);
    }

    #[test]
    fn test_sort_copy_leaves_input() {
        let mut sorter = InsertionSortOpt::new(plain(5));
        let xs = vec![5, 1, 4, 2, 3];
        let ys = sorter.sort_copy(&xs);
        assert_eq!(xs, vec![5, 1, 4, 2, 3]);
        assert_eq!(ys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sorted_input_costs() {
        let mut sorter = InsertionSort::new(counting(4));
        let mut xs = vec![1, 2, 3, 4];
        sort_trial(&mut sorter, &mut xs).unwrap();

        let pack = sorter.helper().stat_pack().unwrap();
        assert_eq!(pack.mean(Metric::Compares).unwrap(), 3.0);
        assert_eq!(pack.mean(Metric::Swaps).unwrap(), 0.0);
        assert_eq!(pack.mean(Metric::Fixes).unwrap(), 0.0);
        assert_eq!(pack.mean(Metric::Inversions).unwrap(), 0.0);
    }

    #[test]
    fn test_reversed_input_costs() {
        for n in 1..=20usize {
            let mut sorter = InsertionSort::new(counting(n));
            let mut xs = reversed(n);
            sort_trial(&mut sorter, &mut xs).unwrap();

            let expected = (n * (n - 1) / 2) as f64;
            let pack = sorter.helper().stat_pack().unwrap();
            assert_eq!(pack.mean(Metric::Compares).unwrap(), expected, "n = {}", n);
            assert_eq!(pack.mean(Metric::Swaps).unwrap(), expected, "n = {}", n);
            assert_eq!(pack.mean(Metric::Fixes).unwrap(), expected, "n = {}", n);
            assert_eq!(pack.mean(Metric::Inversions).unwrap(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_fixes_equal_inversions() {
        let mut sorter = InsertionSort::new(counting(6));
        let mut xs = vec![3, 1, 3, 2, 0, 2];
        let inversions = sorter.helper().inversions(&xs);
        sort_trial(&mut sorter, &mut xs).unwrap();
        let pack = sorter.helper().stat_pack().unwrap();
        assert_eq!(pack.mean(Metric::Fixes).unwrap(), inversions as f64);
    }

    #[test]
    fn test_compares_match_comparator_calls() {
        let (order, calls) = counted_order();
        let helper = InstrumentingHelper::new("counted", order, 50, 0, &Config::default());
        let mut sorter = InsertionSort::new(helper);
        let mut xs: Vec<i32> = (0..50).map(|i| (i * 37) % 50).collect();
        sorter.mutating_sort(&mut xs);
        let snapshot = sorter.helper().snapshot().unwrap();
        assert_eq!(snapshot.compares, calls.get());
    }

    #[test]
    fn test_shifting_variant_costs() {
        let n = 10usize;
        let mut sorter = InsertionSortOpt::new(counting(n));
        let mut xs = reversed(n);
        sorter.mutating_sort(&mut xs);
        assert_eq!(xs, (0..n as i32).collect::<Vec<_>>());

        let snapshot = sorter.helper().snapshot().unwrap();
        let moves = (n * (n - 1) / 2) as u64;
        assert_eq!(snapshot.compares, moves);
        assert_eq!(snapshot.swaps, 0);
        assert_eq!(snapshot.copies, moves + n as u64 - 1);
        assert_eq!(snapshot.fixes, moves);
    }

    #[test]
    fn test_shifting_variant_is_stable() {
        let order: Comparator<(i32, char)> =
            Rc::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        let helper = NonInstrumentingHelper::with_comparator("pairs", order);
        let mut sorter = InsertionSortOpt::new(helper);
        let mut xs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sorter.mutating_sort(&mut xs);
        assert_eq!(xs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    proptest! {
        #[test]
        fn prop_plain_sort_orders_any_input(xs in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut ys = xs.clone();
            InsertionSort::new(plain(ys.len())).mutating_sort(&mut ys);
            prop_assert!(is_sorted_by(&ys, &|a: &i32, b: &i32| a.cmp(b)));
            let mut expected = xs;
            expected.sort();
            prop_assert_eq!(ys, expected);
        }

        #[test]
        fn prop_instrumented_sort_orders_any_input(xs in prop::collection::vec(-50i32..50, 0..120)) {
            let mut ys = xs.clone();
            let mut sorter = InsertionSortOpt::new(counting(ys.len()));
            prop_assert!(sort_trial(&mut sorter, &mut ys).is_ok());
            let mut expected = xs;
            expected.sort();
            prop_assert_eq!(ys, expected);
        }
    }
}
