// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive handles and kinds.

use crate::Attrs;

/// A stable handle for a primitive owned by a [`Scene`](crate::Scene).
///
/// Handles are never reused within one scene, so a handle that survives a
/// re-render simply stops resolving instead of aliasing a new primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimId(pub u64);

/// The shape class of a primitive.
///
/// The geometry itself lives in the primitive's [`Attrs`] (`center`/`radius`
/// for circles, `segment` for segments) so it can be tweened like paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimKind {
    /// A filled/stroked circle.
    Circle,
    /// A stroked line segment.
    Segment,
}

/// A retained visual primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Stable handle.
    pub id: PrimId,
    /// Shape class.
    pub kind: PrimKind,
    /// Current resolved attributes.
    pub attrs: Attrs,
}
