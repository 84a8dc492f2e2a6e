// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduled attribute tweens.
//!
//! A tween moves a primitive's attributes toward a target bag over a fixed
//! duration, optionally after a delay. Time only advances when the host calls
//! [`Scene::advance`](crate::Scene::advance), so there is no hidden timer:
//! the host's frame loop is the clock.
//!
//! Every tween records the render-pass token current when it was scheduled.
//! A tween that would start under a newer pass retires without writing, so a
//! re-render can never be repainted by a leftover animation from the pass it
//! replaced. Callers that want to stop a tween sooner hold on to its
//! [`TweenHandle`] and pass it to [`Scene::cancel`](crate::Scene::cancel).

use hashbrown::HashMap;

use crate::{Attrs, PrimId, Primitive};

/// A cancellable handle for a scheduled tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenHandle(pub(crate) u64);

#[derive(Clone, Debug)]
pub(crate) struct Tween {
    pub(crate) handle: u64,
    pub(crate) target: PrimId,
    pub(crate) to: Attrs,
    /// Baseline attributes, captured on the first step at/after `start`.
    pub(crate) from: Option<Attrs>,
    /// Absolute start time in scene milliseconds (schedule time + delay).
    pub(crate) start: f64,
    pub(crate) duration: f64,
    /// Render-pass token at schedule time.
    pub(crate) pass: u64,
}

impl Tween {
    /// Steps this tween to `now`. Returns `true` once the tween is finished
    /// (completed, stale, or targeting a removed primitive).
    pub(crate) fn step(
        &mut self,
        prims: &mut HashMap<PrimId, Primitive>,
        now: f64,
        pass: u64,
    ) -> bool {
        if now < self.start {
            return false;
        }
        if self.pass != pass {
            // Scheduled against a superseded render pass.
            return true;
        }
        let Some(prim) = prims.get_mut(&self.target) else {
            return true;
        };

        if self.from.is_none() {
            self.from = Some(prim.attrs.clone());
            // Paints don't interpolate; they switch when the tween starts.
            prim.attrs.apply(&self.to.paint_fields());
        }

        let t = if self.duration > 0.0 {
            ((now - self.start) / self.duration).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            prim.attrs.apply(&self.to);
            return true;
        }

        let Some(from) = self.from.as_ref() else {
            return true;
        };
        prim.attrs.apply(&Attrs::lerp(from, &self.to, t));
        false
    }
}
