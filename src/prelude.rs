// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndview prelude.
//!
//! This module contains the most used types and macros that you can import
//! easily as a group.
//!
//! ```
//! use ndview::prelude::*;
//! # fn main() { }
//! ```

#[doc(no_inline)]
pub use crate::{Axis, AxisKind, Colon, Source, TrailingDims, View};

#[doc(no_inline)]
pub use crate::{Ix, Ixs, END};

pub use crate::colon;
