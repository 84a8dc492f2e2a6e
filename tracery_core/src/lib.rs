// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained drawing surface for `tracery`.
//!
//! This crate is the drawing backend the chart layer issues requests against:
//! - **Primitives** (circles, segments) are created once and addressed by
//!   stable [`PrimId`] handles.
//! - **Attributes** are sparse [`Attrs`] bags; every visual update is a
//!   merge-apply of a patch bag, so "set stroke opacity to 0" never disturbs
//!   geometry that was set earlier.
//! - **Hover** enter/exit handlers are bound per primitive and dispatched by
//!   the host (`pointer_enter`/`pointer_exit`).
//! - **Tweens** move attributes toward a target bag over time; the host's
//!   frame loop drives them through [`Scene::advance`], and render-pass
//!   tokens keep stale delayed tweens from repainting replaced content.
//!
//! There is no coordinate-system or lifecycle management here; callers supply
//! already-computed positions and own when passes begin and time advances.

#![no_std]

extern crate alloc;

mod attrs;
mod primitive;
mod scene;
mod tween;

pub use attrs::Attrs;
pub use primitive::{PrimId, PrimKind, Primitive};
pub use scene::Scene;
pub use tween::TweenHandle;
