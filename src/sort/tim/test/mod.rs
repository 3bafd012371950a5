//! Tests for the Timsort wrapper.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::helper::{Comparator, InstrumentingHelper, NonInstrumentingHelper};
    use crate::instrument::Metric;
    use crate::sort::testing::{counted_order, counting, plain};
    use crate::sort::tim::*;
    use crate::sort::{sort_trial, Sort};
    use proptest::prelude::*;
    use std::rc::Rc;

    #[test]
    fn test_sorts_small_array() {
        let mut sorter = TimSortWrapper::new(plain(4));
        let mut xs = vec![3, 4, 2, 1];
        sorter.mutating_sort(&mut xs);
        assert_eq!(xs, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorts_subrange_only() {
        let mut sorter = TimSortWrapper::new(plain(6));
        let mut xs = vec![6, 5, 4, 3, 2, 1];
        sorter.sort(&mut xs, 1, 4);
        assert_eq!(xs, vec![6, 3, 4, 5, 2, 1]);
    }

    #[test]
    fn test_case_insensitive_order() {
        let order: Comparator<String> =
            Rc::new(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
        let mut sorter = TimSortWrapper::new(NonInstrumentingHelper::with_comparator("strings", order));
        let mut xs: Vec<String> = ["beta", "Alpha", "gamma", "ALPHA"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sorter.mutating_sort(&mut xs);
        // stable: equal keys keep their input order
        assert_eq!(xs, vec!["Alpha", "ALPHA", "beta", "gamma"]);
    }

    #[test]
    fn test_compares_counted_through_helper() {
        let (order, calls) = counted_order();
        let helper = InstrumentingHelper::new("timsort", order, 100, 0, &Config::default());
        let mut sorter = TimSortWrapper::new(helper);
        let mut xs: Vec<i32> = (0..100).map(|i| (i * 61) % 100).collect();
        sorter.mutating_sort(&mut xs);
        let snapshot = sorter.helper().snapshot().unwrap();
        assert!(snapshot.compares > 0);
        assert_eq!(snapshot.compares, calls.get());
    }

    #[test]
    fn test_fixes_credited_when_instrumented() {
        let mut sorter = TimSortWrapper::new(counting(5));
        let mut xs = vec![5, 4, 3, 2, 1];
        sort_trial(&mut sorter, &mut xs).unwrap();
        let pack = sorter.helper().stat_pack().unwrap();
        assert_eq!(pack.mean(Metric::Fixes).unwrap(), 10.0);
        assert_eq!(pack.mean(Metric::Swaps).unwrap(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_matches_std_sort(xs in prop::collection::vec(any::<i32>(), 0..500)) {
            let mut ys = xs.clone();
            TimSortWrapper::new(plain(ys.len())).mutating_sort(&mut ys);
            let mut expected = xs;
            expected.sort();
            prop_assert_eq!(ys, expected);
        }
    }
}
