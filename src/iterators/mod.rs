// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Offset iterators over views.

mod cursor;

use std::iter::{self, FusedIterator};

use smallvec::SmallVec;

use self::cursor::Cursor;
use crate::axis_kind::AxisKind;
use crate::error::{from_kind, ErrorKind};
use crate::{Axis, Ix, Ixs, Result, View};

/// Returned by [`Iter::begin`] and [`Iter::advance`] once every offset has
/// been produced.
pub const END: Ixs = -1;

/// How the lead (fastest) axis of an `Iter` moves.
#[derive(Clone, Debug)]
enum Lead {
    /// Constant stride.
    Strided { first: Ixs, step: Ixs },
    /// Per position delta; `deltas[0]` is 0.
    Indexed { first: Ixs, deltas: Vec<Ixs> },
}

impl Lead {
    #[inline]
    fn first(&self) -> Ixs {
        match *self {
            Lead::Strided { first, .. } | Lead::Indexed { first, .. } => first,
        }
    }
}

fn delta_table(indices: &[Ixs]) -> Vec<Ixs> {
    indices
        .iter()
        .scan(indices.first().cloned().unwrap_or(0), |prev, &index| {
            let delta = index - *prev;
            *prev = index;
            Some(delta)
        })
        .collect()
}

/// Cursor over the buffer offsets of a view, starting at some axis `d`.
///
/// Axes before `d` stay at their first position. Axes from `d` on are
/// enumerated with `d` fastest, then `d + 1`, and so on, like an odometer.
/// When axis `d` is indexed the cursor walks a table of offset deltas
/// instead of a constant stride.
///
/// The protocol is `begin`, then `advance` until it returns [`END`]. An
/// `Iter` is ready (begun) when it is created.
///
/// ```
/// use ndview::{Axis, View, END};
///
/// let v = View::new(&[2, 3]).unwrap();
/// let mut it = v.iter(Axis(1)).unwrap();
/// let mut offset = it.begin();
/// let mut seen = Vec::new();
/// while offset != END {
///     seen.push(offset);
///     offset = it.advance();
/// }
/// assert_eq!(seen, vec![0, 2, 4]);
/// assert!(it.is_end());
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    axis: usize,
    base: Ixs,
    lead: Lead,
    lead_size: Ix,
    cursors: SmallVec<[Cursor<'a>; 4]>,
    pos: Ix,
    offset: Ixs,
    len: Ix,
    done: bool,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(view: &'a View, axis: usize) -> Self {
        let dims = view.dims();
        debug_assert!(axis < dims.len());
        let lead_axis = &dims[axis];
        let lead = match *lead_axis {
            AxisKind::Stepped { first, step, .. } => Lead::Strided { first, step },
            AxisKind::Indexed(ref indices) => Lead::Indexed {
                first: lead_axis.leading(),
                deltas: delta_table(indices),
            },
        };
        let mut it = Iter {
            axis,
            base: view.leading_offset(axis),
            lead,
            lead_size: lead_axis.size(),
            cursors: dims[axis + 1..].iter().map(Cursor::new).collect(),
            pos: 0,
            offset: END,
            len: dims[axis..].iter().map(AxisKind::size).product(),
            done: true,
        };
        it.begin();
        it
    }

    /// Reset to the first offset and return it, or `END` if there are no
    /// offsets at all.
    pub fn begin(&mut self) -> Ixs {
        self.pos = 0;
        if self.len == 0 {
            self.done = true;
            self.offset = END;
            return END;
        }
        let mut base = self.base;
        for c in self.cursors.iter_mut().rev() {
            base = c.begin(base);
        }
        self.done = false;
        self.offset = base + self.lead.first();
        self.offset
    }

    /// Move to the next offset and return it, or `END` if the traversal is
    /// over.
    pub fn advance(&mut self) -> Ixs {
        if self.done {
            return END;
        }
        self.pos += 1;
        if self.pos < self.lead_size {
            self.offset += match self.lead {
                Lead::Strided { step, .. } => step,
                Lead::Indexed { ref deltas, .. } => deltas[self.pos],
            };
            return self.offset;
        }
        // carry into the lowest axis that is not exhausted
        let mut k = 0;
        while k < self.cursors.len() && self.cursors[k].advance() == END {
            k += 1;
        }
        if k == self.cursors.len() {
            self.done = true;
            self.offset = END;
            return END;
        }
        debug_assert!(!self.cursors[k].is_end());
        let mut base = self.cursors[k].offset();
        for c in self.cursors[..k].iter_mut().rev() {
            base = c.begin(base);
        }
        self.pos = 0;
        self.offset = base + self.lead.first();
        self.offset
    }

    /// Return `true` once the traversal is over.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.done
    }

    /// Current offset, `END` once the traversal is over.
    #[inline]
    pub fn offset(&self) -> Ixs {
        self.offset
    }

    /// The first enumerated axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        Axis(self.axis)
    }

    /// Return `true` if the lead axis is indexed.
    pub fn is_indexed(&self) -> bool {
        matches!(self.lead, Lead::Indexed { .. })
    }

    /// Total number of offsets of a traversal.
    pub fn len(&self) -> Ix {
        self.len
    }

    /// Return `true` if the traversal has no offsets at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coordinates of the current element along the enumerated axes, lead
    /// axis first.
    pub fn position(&self) -> Vec<Ix> {
        iter::once(self.pos)
            .chain(self.cursors.iter().map(Cursor::position))
            .collect()
    }

    /// Restart and turn into a regular iterator of offsets.
    pub fn offsets(mut self) -> Offsets<'a> {
        self.begin();
        Offsets {
            remaining: self.len,
            started: false,
            iter: self,
        }
    }
}

/// An iterator over the buffer offsets of a view.
///
/// Iterator element type is `Ix`. Created with [`View::offsets`] or
/// [`Iter::offsets`].
#[derive(Clone, Debug)]
pub struct Offsets<'a> {
    iter: Iter<'a>,
    remaining: Ix,
    started: bool,
}

impl<'a> Iterator for Offsets<'a> {
    type Item = Ix;

    #[inline]
    fn next(&mut self) -> Option<Ix> {
        if self.remaining == 0 {
            return None;
        }
        let offset = if self.started {
            self.iter.advance()
        } else {
            self.started = true;
            self.iter.offset()
        };
        self.remaining -= 1;
        debug_assert!(offset >= 0);
        Some(offset as Ix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Offsets<'a> {}

impl<'a> FusedIterator for Offsets<'a> {}

impl View {
    /// Return an offset cursor enumerating the axes from `axis` on.
    ///
    /// **Errors** with `InvalidDimension` if `axis` is not a stored axis.
    pub fn iter(&self, axis: Axis) -> Result<Iter<'_>> {
        if axis.index() >= self.ndim() {
            return Err(from_kind(ErrorKind::InvalidDimension));
        }
        Ok(Iter::new(self, axis.index()))
    }

    /// Return an iterator of all buffer offsets of the view, axis 0
    /// fastest.
    ///
    /// ```
    /// use ndview::View;
    ///
    /// let mut v = View::new(&[2, 2]).unwrap();
    /// v.permute(&[1, 0]).unwrap();
    /// assert_eq!(v.offsets().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
    /// ```
    pub fn offsets(&self) -> Offsets<'_> {
        Iter::new(self, 0).offsets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas() {
        assert_eq!(delta_table(&[4, 1, 7]), vec![0, -3, 6]);
        assert_eq!(delta_table(&[]), Vec::<Ixs>::new());
    }

    #[test]
    fn position_follows_odometer() {
        let v = View::new(&[2, 2, 2]).unwrap();
        let mut it = v.iter(Axis(0)).unwrap();
        it.advance();
        it.advance();
        it.advance();
        assert_eq!(it.position(), vec![1, 1, 0]);
        assert_eq!(it.offset(), 3);
    }

    #[test]
    fn frozen_axes_use_first_position() {
        let mut v = View::new(&[3, 2]).unwrap();
        v.select_dimension(Axis(0), 2).unwrap();
        let mut it = v.iter(Axis(1)).unwrap();
        assert_eq!(it.begin(), 2);
        assert_eq!(it.advance(), 5);
        assert_eq!(it.advance(), END);
        assert_eq!(v.iter(Axis(2)).unwrap_err().kind(), ErrorKind::InvalidDimension);
    }
}
