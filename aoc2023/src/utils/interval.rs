//! Interval translation through piecewise-shift maps.
//!
//! A [`ShiftMap`] assigns an additive shift to every non-negative integer,
//! constant between consecutive breakpoints. Translating a [`RangeSet`]
//! splits every range at the breakpoints it crosses and shifts each piece,
//! so a whole chain of maps ([`Pipeline`]) can be applied to billions of
//! values without visiting them one by one.

use std::collections::{BTreeMap, BTreeSet};

/// Closed interval `[first, last]`, ordered by `first` then `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub first: i64,
    pub last: i64,
}

impl Range {
    pub fn new(first: i64, last: i64) -> Self {
        debug_assert!(first <= last, "range [{first}, {last}] is inverted");
        Self { first, last }
    }

    pub fn single(value: i64) -> Self {
        Self::new(value, value)
    }

    /// `[start, start + length - 1]`, or `None` when `length` is not positive
    pub fn from_start_len(start: i64, length: i64) -> Option<Self> {
        (length > 0).then(|| Self::new(start, start + (length - 1)))
    }

    /// Number of integers covered
    pub fn len(&self) -> u64 {
        self.last.abs_diff(self.first) + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        self.first <= value && value <= self.last
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        !(self.last < other.first || other.last < self.first)
    }

    pub fn intersection(&self, other: &Range) -> Option<Range> {
        self.overlaps(other)
            .then(|| Range::new(self.first.max(other.first), self.last.min(other.last)))
    }

    pub fn shifted(&self, shift: i64) -> Range {
        Range::new(self.first + shift, self.last + shift)
    }
}

/// Union of ranges; the smallest value is the `first` of the first element.
pub type RangeSet = BTreeSet<Range>;

/// Step function from breakpoint to shift over the non-negative integers.
///
/// Every value `v` receives the shift of the greatest breakpoint `<= v`.
/// Breakpoint `0` always exists, so every non-negative value is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftMap {
    shifts: BTreeMap<i64, i64>,
}

impl Default for ShiftMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftMap {
    /// The identity map `{0: 0}`
    pub fn new() -> Self {
        Self {
            shifts: BTreeMap::from([(0, 0)]),
        }
    }

    /// Build a map from explicit `(breakpoint, shift)` entries on top of `{0: 0}`
    pub fn from_breakpoints(entries: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let mut map = Self::new();
        map.shifts.extend(entries);
        map
    }

    /// Record `length` values starting at `source` moving to `destination`.
    ///
    /// The entry at `source` is overwritten; the closing breakpoint at
    /// `source + length` falls back to shift `0` unless an entry is already
    /// there, so adjacent mappings keep their own shift.
    pub fn add_mapping(&mut self, destination: i64, source: i64, length: i64) {
        self.shifts.insert(source, destination - source);
        self.shifts.entry(source + length).or_insert(0);
    }

    pub fn shift_at(&self, value: i64) -> Option<i64> {
        self.shifts
            .range(..=value)
            .next_back()
            .map(|(_, shift)| *shift)
    }

    /// Constant-shift segments in breakpoint order; the last one ends at `i64::MAX`
    pub fn segments(&self) -> impl Iterator<Item = (Range, i64)> + '_ {
        let mut entries = self.shifts.iter().peekable();
        std::iter::from_fn(move || {
            let (&start, &shift) = entries.next()?;
            let last = entries
                .peek()
                .map_or(i64::MAX, |(next_start, _)| **next_start - 1);
            Some((Range::new(start, last), shift))
        })
    }

    /// The shifted pieces of `range`, one per segment it overlaps
    pub fn split<'a>(&'a self, range: &'a Range) -> impl Iterator<Item = Range> + 'a {
        self.segments().filter_map(move |(segment, shift)| {
            range
                .intersection(&segment)
                .map(|piece| piece.shifted(shift))
        })
    }

    pub fn breakpoints(&self) -> usize {
        self.shifts.len()
    }
}

/// Ordered chain of maps applied one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    maps: Vec<ShiftMap>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, map: ShiftMap) {
        self.maps.push(map);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftMap> {
        self.maps.iter()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl FromIterator<ShiftMap> for Pipeline {
    fn from_iter<T: IntoIterator<Item = ShiftMap>>(iter: T) -> Self {
        Self {
            maps: iter.into_iter().collect(),
        }
    }
}

/// Image of `ranges` under `map` as a new set; `ranges` is left untouched.
pub fn translate(ranges: &RangeSet, map: &ShiftMap) -> RangeSet {
    ranges.iter().flat_map(|range| map.split(range)).collect()
}

/// Translate through every map of `pipeline` in order and return the
/// smallest resulting value, `None` when nothing survives.
pub fn find_lowest(ranges: &RangeSet, pipeline: &Pipeline) -> Option<i64> {
    let mut current = ranges.clone();
    for (stage, map) in pipeline.iter().enumerate() {
        current = translate(&current, map);
        tracing::debug!(stage, ranges = current.len(), "translated");
    }
    current.first().map(|range| range.first)
}
