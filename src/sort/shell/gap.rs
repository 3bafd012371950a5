//! Gap sequences for Shell sort.
//!
//! A [`GapSequence`] is a small state machine: [`GapSequence::first`] yields
//! the largest gap for an array of `n` elements, each [`GapSequence::next_gap`]
//! the next smaller one, ending at 0 (the final 1-sort has been done).

use std::fmt;

use crate::error::{Result, SortError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapMode {
    /// 1 only: plain insertion sort.
    Insertion,
    /// 2^k - 1 (Hibbard).
    PowerOfTwoMinusOne,
    /// (3^k - 1) / 2 (Knuth).
    Knuth,
    /// 1, 5, 19, 41, 109, ... (Sedgewick 1986).
    Sedgewick,
    /// 2^i * 3^j (Pratt).
    Pratt,
}

impl GapMode {
    pub const ALL: [GapMode; 5] = [
        GapMode::Insertion,
        GapMode::PowerOfTwoMinusOne,
        GapMode::Knuth,
        GapMode::Sedgewick,
        GapMode::Pratt,
    ];

    pub fn from_mode(mode: u32) -> Result<Self> {
        match mode {
            1 => Ok(GapMode::Insertion),
            2 => Ok(GapMode::PowerOfTwoMinusOne),
            3 => Ok(GapMode::Knuth),
            4 => Ok(GapMode::Sedgewick),
            5 => Ok(GapMode::Pratt),
            m => Err(SortError::precondition(format!("invalid gap mode: {}", m))),
        }
    }

    pub fn mode(self) -> u32 {
        match self {
            GapMode::Insertion => 1,
            GapMode::PowerOfTwoMinusOne => 2,
            GapMode::Knuth => 3,
            GapMode::Sedgewick => 4,
            GapMode::Pratt => 5,
        }
    }
}

impl fmt::Display for GapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode())
    }
}

/// Sedgewick's interleaved sequence; 0 for negative `k`.
pub fn sedgewick(k: i64) -> u64 {
    if k < 0 {
        return 0;
    }
    let k = k as u32;
    let pow2 = |e: u32| 1u64.checked_shl(e).unwrap_or(u64::MAX);
    if k % 2 == 0 {
        9u64.saturating_mul(pow2(k) - pow2(k / 2)).saturating_add(1)
    } else {
        8u64.saturating_mul(pow2(k))
            .saturating_sub(6u64.saturating_mul(pow2((k + 1) / 2)))
            .saturating_add(1)
    }
}

#[derive(Debug, Clone)]
pub struct GapSequence {
    mode: GapMode,
    h: usize,
    index: i64,
    pratt: Vec<usize>,
    started: bool,
}

impl GapSequence {
    pub fn new(n: usize, mode: GapMode) -> Self {
        let mut h = 1usize;
        let mut index = 0i64;
        let mut pratt = Vec::new();
        match mode {
            GapMode::Insertion => {}
            GapMode::PowerOfTwoMinusOne => {
                while h <= n / 2 {
                    h = 2 * (h + 1) - 1;
                }
            }
            GapMode::Knuth => {
                while h <= n / 3 {
                    h = 3 * h + 1;
                }
            }
            GapMode::Sedgewick => {
                while sedgewick(index) < n as u64 {
                    index += 1;
                }
                index -= 1;
                h = sedgewick(index) as usize;
            }
            GapMode::Pratt => {
                let mut j = 1usize;
                while j <= n {
                    let mut i = j;
                    while i <= n {
                        pratt.push(i);
                        i *= 2;
                    }
                    j *= 3;
                }
                pratt.sort_unstable();
                index = pratt.len() as i64 - 1;
                h = pratt.last().copied().unwrap_or(0);
            }
        }
        Self {
            mode,
            h,
            index,
            pratt,
            started: false,
        }
    }

    pub fn mode(&self) -> GapMode {
        self.mode
    }

    /// The initial gap.
    ///
    /// # Panics
    ///
    /// If the sequence has already been started.
    pub fn first(&mut self) -> usize {
        assert!(!self.started, "cannot call first more than once");
        self.started = true;
        self.h
    }

    /// The next smaller gap, 0 once exhausted. Before `first` it returns the
    /// initial gap.
    pub fn next_gap(&mut self) -> usize {
        if !self.started {
            self.started = true;
            return self.h;
        }
        match self.mode {
            GapMode::Insertion => 0,
            GapMode::PowerOfTwoMinusOne => {
                self.h = ((self.h + 1) / 2).saturating_sub(1);
                self.h
            }
            GapMode::Knuth => {
                self.h /= 3;
                self.h
            }
            GapMode::Sedgewick => {
                if self.index >= 0 {
                    self.index -= 1;
                }
                sedgewick(self.index) as usize
            }
            GapMode::Pratt => {
                if self.index >= 0 {
                    self.index -= 1;
                }
                if self.index < 0 {
                    0
                } else {
                    self.pratt[self.index as usize]
                }
            }
        }
    }
}

impl Iterator for GapSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.next_gap() {
            0 => None,
            gap => Some(gap),
        }
    }
}
