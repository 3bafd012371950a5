//! Dual-pivot partitioning and the heap sort fallback.

use crate::helper::Helper;

/// Half-open range `[from, to)` still to be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub from: usize,
    pub to: usize,
}

impl Partition {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions `xs[from..to]` around the pivots `p = xs[from]` and
/// `q = xs[to - 1]` (exchanged first if `p > q`) into `< p`, `p..=q` and
/// `> q`. The pivots end up between the three ranges.
///
/// Requires at least two elements.
pub fn partition<X: Clone, H: Helper<X> + ?Sized>(
    helper: &mut H,
    xs: &mut [X],
    from: usize,
    to: usize,
) -> [Partition; 3] {
    debug_assert!(to >= from + 2);
    let (lo, hi) = (from, to - 1);
    helper.swap_conditional(xs, lo, hi);
    let p = helper.get(xs, lo);
    let q = helper.get(xs, hi);

    let (mut lt, mut gt, mut i) = (lo + 1, hi - 1, lo + 1);
    while i <= gt {
        let x = helper.get(xs, i);
        if helper.less(&x, &p) {
            if lt != i {
                helper.swap(xs, lt, i);
            }
            lt += 1;
            i += 1;
        } else if helper.less(&q, &x) {
            if i != gt {
                helper.swap(xs, i, gt);
            }
            gt -= 1;
        } else {
            i += 1;
        }
    }

    lt -= 1;
    gt += 1;
    if lo != lt {
        helper.swap(xs, lo, lt);
    }
    if hi != gt {
        helper.swap(xs, hi, gt);
    }
    [
        Partition::new(lo, lt),
        Partition::new(lt + 1, gt),
        Partition::new(gt + 1, to),
    ]
}

/// In-place heap sort of `xs[from..to]`.
pub fn heap_sort<X: Clone, H: Helper<X> + ?Sized>(
    helper: &mut H,
    xs: &mut [X],
    from: usize,
    to: usize,
) {
    let n = to.saturating_sub(from);
    for k in (0..n / 2).rev() {
        sink(helper, xs, from, k, n);
    }
    let mut end = n;
    while end > 1 {
        end -= 1;
        helper.swap(xs, from, from + end);
        sink(helper, xs, from, 0, end);
    }
}

fn sink<X: Clone, H: Helper<X> + ?Sized>(
    helper: &mut H,
    xs: &mut [X],
    base: usize,
    mut k: usize,
    n: usize,
) {
    loop {
        let mut child = 2 * k + 1;
        if child >= n {
            return;
        }
        let mut larger = helper.get(xs, base + child);
        if child + 1 < n {
            let right = helper.get(xs, base + child + 1);
            if helper.less(&larger, &right) {
                child += 1;
                larger = right;
            }
        }
        let parent = helper.get(xs, base + k);
        if !helper.less(&parent, &larger) {
            return;
        }
        helper.swap(xs, base + k, base + child);
        k = child;
    }
}
