// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::axis_kind::AxisKind;
use crate::{Ix, View};

/// Version of the serialized view format.
const VIEW_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized view matches the current
/// `VIEW_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != VIEW_FORMAT_VERSION {
        let err_msg = format!("unknown view version: {}", v);
        return Err(de::Error::custom(err_msg));
    }
    Ok(())
}

#[derive(serde::Serialize)]
#[serde(rename = "View")]
struct ViewRef<'a> {
    v: u8,
    len: Ix,
    dims: &'a [AxisKind],
    initial: &'a [AxisKind],
}

#[derive(serde::Deserialize)]
#[serde(rename = "View")]
struct ViewRepr {
    v: u8,
    len: Ix,
    dims: Vec<AxisKind>,
    initial: Vec<AxisKind>,
}

/// **Requires crate feature `"serde"`**
///
/// Saved states are not serialized.
impl Serialize for View {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ViewRef {
            v: VIEW_FORMAT_VERSION,
            len: self.buffer_len(),
            dims: self.dims(),
            initial: self.initial_dims(),
        }
        .serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for View {
    fn deserialize<D>(deserializer: D) -> Result<View, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ViewRepr::deserialize(deserializer)?;
        verify_version(repr.v)?;
        View::from_parts(repr.dims, repr.initial, repr.len).map_err(de::Error::custom)
    }
}
