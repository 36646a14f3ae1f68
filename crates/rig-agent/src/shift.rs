//! Work shifts and shift-keyed maps.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Where a worker currently is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shift {
    /// At the isolated worksite.
    On,
    /// Ashore, mixing with the general population.
    Off,
}

impl Shift {
    /// Every shift, in generation order (`On` first).
    pub const ALL: [Shift; 2] = [Shift::On, Shift::Off];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Shift::On => 0,
            Shift::Off => 1,
        }
    }

    /// The other shift.
    #[inline]
    pub const fn opposite(self) -> Shift {
        match self {
            Shift::On => Shift::Off,
            Shift::Off => Shift::On,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::On => f.write_str("on"),
            Shift::Off => f.write_str("off"),
        }
    }
}

/// A value for each [`Shift`], stored as a two-element array.
///
/// Used for daily infection rates and for schedule entries.  Indexing by
/// `Shift` is exhaustive, so there is no missing-key case to handle.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftMap<T>([T; 2]);

impl<T> ShiftMap<T> {
    pub fn new(on: T, off: T) -> Self {
        ShiftMap([on, off])
    }

    /// Build by evaluating `f` once per shift.
    pub fn from_fn(mut f: impl FnMut(Shift) -> T) -> Self {
        ShiftMap([f(Shift::On), f(Shift::Off)])
    }

    /// Iterate `(shift, value)` pairs in `Shift::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Shift, &T)> {
        Shift::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ShiftMap<U> {
        let [on, off] = self.0;
        ShiftMap([f(on), f(off)])
    }
}

impl<T> Index<Shift> for ShiftMap<T> {
    type Output = T;
    #[inline]
    fn index(&self, shift: Shift) -> &T {
        &self.0[shift.index()]
    }
}

impl<T> IndexMut<Shift> for ShiftMap<T> {
    #[inline]
    fn index_mut(&mut self, shift: Shift) -> &mut T {
        &mut self.0[shift.index()]
    }
}
