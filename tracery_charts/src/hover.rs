// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover payloads and their index mapping.
//!
//! Chart-level tooltip plumbing delivers hovered-dot payloads with the two
//! indexes swapped relative to their names: the field called `group_index`
//! carries the *point* index within a series, and the field called `index`
//! carries the *series (group)* index. The naming is historical, inherited
//! from how line-chart hover data is shaped upstream, and show/hide callers
//! depend on it.
//!
//! The swap is confined to [`HoverPayload::dot_index`]; everything past that
//! boundary speaks in real `(group, point)` coordinates.

/// A hovered-dot payload as delivered by chart-level tooltip plumbing.
///
/// Field names are historical and inverted; see the module docs. Use
/// [`HoverPayload::dot_index`] rather than reading the fields directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoverPayload {
    /// Historically named; holds the point index within the group.
    pub group_index: usize,
    /// Historically named; holds the group (series) index.
    pub index: usize,
}

/// Real coordinates of one dot: outer (group) and inner (point) index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DotIndex {
    /// Series index (outer).
    pub group: usize,
    /// Data-point index within the series (inner).
    pub point: usize,
}

impl HoverPayload {
    /// Resolves the payload's swapped fields into real dot coordinates.
    pub fn dot_index(self) -> DotIndex {
        DotIndex {
            group: self.index,
            point: self.group_index,
        }
    }
}
