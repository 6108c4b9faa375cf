// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Colon shorthand for [`View::select_dimension`](crate::View::select_dimension).
///
/// - `colon![..]` is the whole axis
/// - `colon![i]` is the single element `i`
/// - `colon![first, last]` is `first` to `last` inclusive
/// - `colon![first, step, last]` steps by `step`
///
/// Negative values count from the back, `-1` being the last element.
///
/// ```
/// use ndview::{colon, Colon};
///
/// assert_eq!(colon![..], Colon::all());
/// assert_eq!(colon![-1, -1, 0], Colon::reversed());
/// assert_eq!(colon![2], Colon::new(2, 1, 2));
/// ```
#[macro_export]
macro_rules! colon {
    (..) => {
        $crate::Colon::all()
    };
    ($first:expr, $step:expr, $last:expr $(,)?) => {
        $crate::Colon::new($first as isize, $step as isize, $last as isize)
    };
    ($first:expr, $last:expr $(,)?) => {
        $crate::Colon::new($first as isize, 1, $last as isize)
    };
    ($index:expr $(,)?) => {
        $crate::Colon::index($index as isize)
    };
}
