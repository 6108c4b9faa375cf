// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods that select and rearrange the axes of a view.
//!
//! All of them mutate the view in place and return it for chaining. None of
//! them move data.

use log::{debug, trace};
use num_integer::Integer;

use crate::axis_kind::AxisKind;
use crate::error::{from_kind, ErrorKind};
use crate::slice::Colon;
use crate::view::MIN_RANK;
use crate::{Axis, Ix, Ixs, Result, View};

impl View {
    /// Replace `axis` by the result of `f`, padding with singleton axes when
    /// `axis` is past the stored ones. Nothing changes if `f` fails.
    fn with_axis<F>(&mut self, axis: Axis, f: F) -> Result<&mut Self>
    where
        F: FnOnce(&AxisKind) -> Result<AxisKind>,
    {
        let i = axis.index();
        let singleton;
        let current = match self.dims.get(i) {
            Some(d) => d,
            None => {
                singleton = AxisKind::singleton();
                &singleton
            }
        };
        let new = f(current)?;
        self.expand_to(i + 1);
        self.dims[i] = new;
        Ok(self)
    }

    /// Select along `axis` with a colon, given in any shorthand that
    /// converts to [`Colon`]: a single index, `[first, last]`,
    /// `[first, step, last]` or `..`.
    ///
    /// On a stepped axis the colon composes with the affine map, on an
    /// indexed axis it picks and reorders the current index list.
    ///
    /// **Errors** with `InvalidColon` if the step is zero or an endpoint is
    /// out of range.
    ///
    /// ```
    /// use ndview::{colon, Axis, View};
    ///
    /// let mut v = View::new(&[6, 2]).unwrap();
    /// v.select_dimension(Axis(0), colon![1, 2, -1]).unwrap();
    /// assert_eq!(v.shape(), vec![3, 2]);
    /// assert_eq!(v.offsets().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9, 11]);
    /// ```
    pub fn select_dimension<C>(&mut self, axis: Axis, colon: C) -> Result<&mut Self>
    where
        C: Into<Colon>,
    {
        let colon = colon.into();
        self.with_axis(axis, |d| d.select(&colon))
    }

    /// Select the given positions along `axis`, in order, repetitions
    /// allowed. The axis becomes indexed.
    ///
    /// **Errors** with `OutOfBounds` if a position is not smaller than the
    /// size of the axis.
    pub fn select_indices_dimension(&mut self, axis: Axis, positions: &[Ix]) -> Result<&mut Self> {
        self.with_axis(axis, |d| d.gather(positions))
    }

    /// Select the positions along `axis` where `mask` is `true`. The axis
    /// becomes indexed.
    ///
    /// **Errors** with `SizeMismatch` if `mask` and the axis differ in
    /// length.
    pub fn select_boolean_dimension(&mut self, axis: Axis, mask: &[bool]) -> Result<&mut Self> {
        if mask.len() != self.size(axis) {
            return Err(from_kind(ErrorKind::SizeMismatch));
        }
        let positions = mask
            .iter()
            .enumerate()
            .filter(|&(_, &keep)| keep)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        self.with_axis(axis, |d| Ok(d.gather_unchecked(&positions)))
    }

    /// Swap axes `a` and `b`, padding with singleton axes first if needed.
    pub fn swap_dimensions(&mut self, a: Axis, b: Axis) -> &mut Self {
        self.expand_to(a.index().max(b.index()) + 1);
        self.dims.swap(a.index(), b.index());
        self
    }

    /// Rearrange axes so that new axis `k` is old axis `order[k]`.
    ///
    /// **Errors** with `InvalidPermutation` if `order` is not a permutation
    /// of `0..order.len()` or is shorter than `rank()`.
    ///
    /// ```
    /// use ndview::View;
    ///
    /// let mut v = View::new(&[2, 3, 4]).unwrap();
    /// v.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(v.shape(), vec![4, 2, 3]);
    /// ```
    pub fn permute(&mut self, order: &[usize]) -> Result<&mut Self> {
        check_permutation(order, self.rank())?;
        trace!("permute {:?} of {}", order, self);
        self.expand_to(order.len());
        // follow each cycle, pulling the wanted axis into place
        let mut visited = vec![false; order.len()];
        for start in 0..order.len() {
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                let k = order[j];
                if k == start {
                    break;
                }
                self.swap_dimensions(Axis(j), Axis(k));
                j = k;
            }
        }
        Ok(self)
    }

    /// Undo [`View::permute`] with the same `order`.
    ///
    /// **Errors** with `InvalidPermutation` as `permute` does.
    pub fn ipermute(&mut self, order: &[usize]) -> Result<&mut Self> {
        check_permutation(order, self.rank())?;
        let mut inverse = vec![0; order.len()];
        for (k, &o) in order.iter().enumerate() {
            inverse[o] = k;
        }
        self.permute(&inverse)
    }

    /// Shift axes.
    ///
    /// With `None`, leading singleton axes are removed (their offsets are
    /// kept) and the view is padded back to two axes if needed. With
    /// `Some(n)`, the first `rank()` axes are rotated left by `n`, or right
    /// by `-n` when `n` is negative.
    ///
    /// **Errors** with `InvalidShift` if `|n| >= rank()`.
    ///
    /// ```
    /// use ndview::View;
    ///
    /// let mut v = View::new(&[1, 1, 3, 4]).unwrap();
    /// v.shift_dimension(None).unwrap();
    /// assert_eq!(v.shape(), vec![3, 4]);
    /// v.shift_dimension(Some(-1)).unwrap();
    /// assert_eq!(v.shape(), vec![4, 3]);
    /// ```
    pub fn shift_dimension(&mut self, n: Option<Ixs>) -> Result<&mut Self> {
        match n {
            None => {
                let lead = self.dims.iter().take_while(|d| d.size() == 1).count();
                if lead == 0 {
                    return Ok(self);
                }
                let offset = self.leading_offset(lead);
                self.dims.drain(..lead);
                if self.dims.is_empty() {
                    self.dims.push(AxisKind::singleton());
                }
                self.dims[0].shift_offset(offset);
                self.expand_to(MIN_RANK);
                debug!("shift_dimension: removed {} leading singleton axes", lead);
            }
            Some(n) => {
                let rank = self.rank();
                if n.unsigned_abs() >= rank {
                    return Err(from_kind(ErrorKind::InvalidShift));
                }
                let k = n.mod_floor(&(rank as Ixs)) as usize;
                self.dims[..rank].rotate_left(k);
                debug!("shift_dimension: rotated {} axes left by {}", rank, k);
            }
        }
        Ok(self)
    }

    /// Reverse the order of `axis`.
    ///
    /// Same as selecting `Colon::reversed()`, but cannot fail: an empty axis
    /// stays empty.
    pub fn flip_dimension(&mut self, axis: Axis) -> &mut Self {
        if let Some(d) = self.dims.get_mut(axis.index()) {
            *d = d.reversed();
        }
        self
    }

    /// Reverse axis 1 (columns of a matrix).
    pub fn flip_lr(&mut self) -> &mut Self {
        self.flip_dimension(Axis(1))
    }

    /// Reverse axis 0 (rows of a matrix).
    pub fn flip_ud(&mut self) -> &mut Self {
        self.flip_dimension(Axis(0))
    }

    /// Rotate the first two axes by `k` quarter turns counter-clockwise.
    ///
    /// ```
    /// use ndview::View;
    ///
    /// // [[1, 2],
    /// //  [3, 4]] stored column-major
    /// let data = [1, 3, 2, 4];
    /// let mut v = View::new(&[2, 2]).unwrap();
    /// v.rot90(1);
    /// // [[2, 4],
    /// //  [1, 3]]
    /// assert_eq!(v.extract_from(&data).unwrap(), vec![2, 1, 4, 3]);
    /// ```
    pub fn rot90(&mut self, k: Ixs) -> &mut Self {
        match k.mod_floor(&4) {
            1 => self.swap_dimensions(Axis(0), Axis(1)).flip_ud(),
            2 => self.flip_ud().flip_lr(),
            3 => self.swap_dimensions(Axis(0), Axis(1)).flip_lr(),
            _ => self,
        }
    }

    /// Circularly shift every axis `k` by `shifts[k]` positions: the element
    /// at position `i` moves to `(i + shifts[k]) mod size`.
    ///
    /// Shifted axes become indexed.
    pub fn circshift(&mut self, shifts: &[Ixs]) -> &mut Self {
        for (axis, &k) in shifts.iter().enumerate() {
            self.circshift_axis(k, Axis(axis));
        }
        self
    }

    /// Circularly shift `axis` by `k` positions.
    pub fn circshift_axis(&mut self, k: Ixs, axis: Axis) -> &mut Self {
        let size = self.size(axis);
        if size == 0 {
            return self;
        }
        let k = k.mod_floor(&(size as Ixs)) as Ix;
        if k == 0 {
            return self;
        }
        debug!("circshift: axis {} by {}", axis.index(), k);
        let positions = (0..size).map(|i| (i + size - k) % size).collect::<Vec<_>>();
        if let Some(d) = self.dims.get_mut(axis.index()) {
            *d = d.gather_unchecked(&positions);
        }
        self
    }
}

fn check_permutation(order: &[usize], rank: usize) -> Result<()> {
    if order.len() < rank {
        return Err(from_kind(ErrorKind::InvalidPermutation));
    }
    let mut seen = vec![false; order.len()];
    for &o in order {
        match seen.get_mut(o) {
            Some(s) if !*s => *s = true,
            _ => return Err(from_kind(ErrorKind::InvalidPermutation)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_selection_leaves_view_unchanged() {
        let mut v = View::new(&[3, 4]).unwrap();
        v.select_dimension(Axis(1), [1, 2]).unwrap();
        let before = v.dims().to_vec();
        assert!(v.select_dimension(Axis(0), 5).is_err());
        assert!(v.select_indices_dimension(Axis(1), &[0, 2]).is_err());
        assert!(v.select_boolean_dimension(Axis(0), &[true]).is_err());
        assert!(v.permute(&[0, 0]).is_err());
        assert!(v.shift_dimension(Some(2)).is_err());
        assert_eq!(v.dims(), &before[..]);
    }

    #[test]
    fn selection_past_stored_axes_pads() {
        let mut v = View::new(&[3, 4]).unwrap();
        v.select_dimension(Axis(3), 0).unwrap();
        assert_eq!(v.ndim(), 4);
        assert_eq!(v.rank(), 2);
        assert_eq!(v.select_dimension(Axis(5), 1).unwrap_err().kind(), ErrorKind::InvalidColon);
        assert_eq!(v.ndim(), 4);
    }

    #[test]
    fn permutation_check() {
        assert!(check_permutation(&[1, 0], 2).is_ok());
        assert!(check_permutation(&[1, 0, 2], 2).is_ok());
        assert!(check_permutation(&[0], 2).is_err());
        assert!(check_permutation(&[0, 2], 2).is_err());
        assert!(check_permutation(&[1, 1], 2).is_err());
    }

    #[test]
    fn shift_keeps_offset_of_removed_axes() {
        let mut v = View::new(&[3, 4]).unwrap();
        v.select_dimension(Axis(0), 2).unwrap();
        v.shift_dimension(None).unwrap();
        assert_eq!(v.shape(), vec![4, 1]);
        assert_eq!(v.offsets().collect::<Vec<_>>(), vec![2, 5, 8, 11]);
    }
}
