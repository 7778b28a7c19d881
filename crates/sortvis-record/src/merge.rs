//! Top-down merge sort over a pair of ping-pong buffers.
//!
//! Both buffers start as copies of the input. Each level of recursion swaps
//! which buffer is the merge source and which is the destination, so no merge
//! call allocates. Values written during a merge are recorded as sublist
//! overlays and only committed once the whole range has been merged.

use std::ops::RangeInclusive;

use crate::event::{AnimationEvent, SublistEntry};
use crate::recorder::Recorder;

/// Record a merge sort of `input`.
pub fn record_merge(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut primary = input.to_vec();
    let mut scratch = input.to_vec();
    let mut sorter = MergeSorter {
        len: input.len(),
        recorder: Recorder::new(),
    };
    sorter.sort(&mut primary, &mut scratch, 0, input.len() - 1);
    sorter.recorder.into_events()
}

struct MergeSorter {
    len: usize,
    recorder: Recorder,
}

impl MergeSorter {
    /// Sort `dst[lo..=hi]`, reading from `src`, which must hold the same
    /// values over that range on entry.
    fn sort(&mut self, dst: &mut [i64], src: &mut [i64], lo: usize, hi: usize) {
        if lo == hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        self.sort(src, dst, lo, mid);
        self.sort(src, dst, mid + 1, hi);
        self.merge(dst, src, lo, mid, hi);
    }

    /// Merge the sorted runs `src[lo..=mid]` and `src[mid+1..=hi]` into `dst`.
    fn merge(&mut self, dst: &mut [i64], src: &[i64], lo: usize, mid: usize, hi: usize) {
        let range: Vec<usize> = RangeInclusive::new(lo, hi).collect();
        self.recorder.marked(&range);

        let mut written = Vec::with_capacity(range.len());
        let mut k = lo;
        let (mut left, mut right) = (lo, mid + 1);

        while left <= mid && right <= hi {
            let value = if src[left] <= src[right] {
                left += 1;
                src[left - 1]
            } else {
                right += 1;
                src[right - 1]
            };
            self.recorder.marked(&[k]);
            self.place(dst, &mut written, k, value);
            k += 1;
        }
        for &value in src[left..=mid].iter().chain(&src[right..=hi]) {
            self.place(dst, &mut written, k, value);
            k += 1;
        }

        self.recorder.merge_sublist(written);
        self.recorder.idle(&range);
        if lo == 0 && hi == self.len - 1 {
            self.recorder.sorted(&range);
        }
    }

    fn place(&mut self, dst: &mut [i64], written: &mut Vec<usize>, k: usize, value: i64) {
        self.recorder.set_sublist(vec![SublistEntry::new(k, value)]);
        written.push(k);
        dst[k] = value;
    }
}
