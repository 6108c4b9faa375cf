// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::axis_kind::AxisKind;
use crate::{Ix, Ixs};

use super::END;

/// Single axis cursor used for the axes above the lead axis of an `Iter`.
///
/// `offset` is the running sum of this axis' contribution and the base it was
/// begun at, i.e. the base for the next lower axis.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    axis: &'a AxisKind,
    base: Ixs,
    offset: Ixs,
    pos: Ix,
}

impl<'a> Cursor<'a> {
    pub fn new(axis: &'a AxisKind) -> Self {
        Cursor {
            axis,
            base: 0,
            offset: END,
            pos: 0,
        }
    }

    /// Restart at position 0 on top of `base`; return the new offset.
    #[inline]
    pub fn begin(&mut self, base: Ixs) -> Ixs {
        self.base = base;
        self.pos = 0;
        self.offset = base + self.axis.leading();
        self.offset
    }

    /// Step to the next position; return the new offset, or `END` when the
    /// axis is exhausted.
    #[inline]
    pub fn advance(&mut self) -> Ixs {
        self.pos += 1;
        if self.pos >= self.axis.size() {
            self.pos = self.axis.size();
            self.offset = END;
            return END;
        }
        self.offset = match *self.axis {
            AxisKind::Stepped { step, .. } => self.offset + step,
            AxisKind::Indexed(ref indices) => self.base + indices[self.pos],
        };
        self.offset
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.axis.size()
    }

    #[inline]
    pub fn offset(&self) -> Ixs {
        self.offset
    }

    #[inline]
    pub fn position(&self) -> Ix {
        self.pos
    }
}
