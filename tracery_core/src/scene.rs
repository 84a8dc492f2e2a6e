// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene: primitive table, hover dispatch, tween queue.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use core::fmt;

use hashbrown::HashMap;
use kurbo::{Line, Point};
use peniko::Brush;
use smallvec::SmallVec;

use crate::tween::Tween;
use crate::{Attrs, PrimId, PrimKind, Primitive, TweenHandle};

struct HoverHandlers {
    enter: Box<dyn FnMut()>,
    exit: Box<dyn FnMut()>,
}

/// A retained set of visual primitives with attribute updates, hover handler
/// dispatch, and clock-driven attribute tweens.
///
/// The scene is a best-effort visual layer: operations on unknown handles are
/// silent no-ops, never errors. It is single-threaded by design; renders
/// write, subsequent pointer events read, all on the host's UI timeline.
pub struct Scene {
    prims: HashMap<PrimId, Primitive>,
    /// Creation order; also iteration order.
    order: Vec<PrimId>,
    hover: HashMap<PrimId, HoverHandlers>,
    tweens: SmallVec<[Tween; 4]>,
    next_prim: u64,
    next_tween: u64,
    /// Render-pass token; see [`Scene::begin_pass`].
    pass: u64,
    /// Scene clock in milliseconds.
    now: f64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            prims: HashMap::new(),
            order: Vec::new(),
            hover: HashMap::new(),
            tweens: SmallVec::new(),
            next_prim: 0,
            next_tween: 0,
            pass: 0,
            now: 0.0,
        }
    }

    fn insert(&mut self, kind: PrimKind, attrs: Attrs) -> PrimId {
        self.next_prim += 1;
        let id = PrimId(self.next_prim);
        self.order.push(id);
        self.prims.insert(id, Primitive { id, kind, attrs });
        id
    }

    /// Creates a circle primitive at `center` with the given radius.
    pub fn create_circle(&mut self, center: Point, radius: f64) -> PrimId {
        self.insert(
            PrimKind::Circle,
            Attrs::new().with_center(center).with_radius(radius),
        )
    }

    /// Creates a stroked segment primitive.
    pub fn create_segment(
        &mut self,
        segment: Line,
        stroke: impl Into<Brush>,
        stroke_width: f64,
    ) -> PrimId {
        self.insert(
            PrimKind::Segment,
            Attrs::new()
                .with_segment(segment)
                .with_stroke(stroke)
                .with_stroke_width(stroke_width),
        )
    }

    /// Merge-applies `patch` onto the primitive's attributes.
    ///
    /// Unknown handles are ignored.
    pub fn set_attrs(&mut self, id: PrimId, patch: &Attrs) {
        if let Some(prim) = self.prims.get_mut(&id) {
            prim.attrs.apply(patch);
        }
    }

    /// Returns the primitive's current attributes, if it exists.
    pub fn attrs(&self, id: PrimId) -> Option<&Attrs> {
        self.prims.get(&id).map(|p| &p.attrs)
    }

    /// Returns the primitive's kind, if it exists.
    pub fn kind(&self, id: PrimId) -> Option<PrimKind> {
        self.prims.get(&id).map(|p| p.kind)
    }

    /// Returns `true` if the handle resolves to a live primitive.
    pub fn contains(&self, id: PrimId) -> bool {
        self.prims.contains_key(&id)
    }

    /// Number of live primitives.
    pub fn len(&self) -> usize {
        self.prims.len()
    }

    /// Returns `true` if the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Iterates primitives in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.order.iter().filter_map(|id| self.prims.get(id))
    }

    /// Removes a primitive along with its hover binding and pending tweens.
    ///
    /// Unknown handles are ignored.
    pub fn remove(&mut self, id: PrimId) {
        if self.prims.remove(&id).is_some() {
            self.order.retain(|&p| p != id);
        }
        self.hover.remove(&id);
        self.tweens.retain(|t| t.target != id);
    }

    /// Starts a new render pass and returns its token.
    ///
    /// Tweens scheduled under an earlier pass retire without writing when they
    /// would fire, so stale delayed animations never repaint replaced content.
    pub fn begin_pass(&mut self) -> u64 {
        self.pass += 1;
        self.pass
    }

    /// Binds a hover enter/exit handler pair to a primitive.
    ///
    /// Rebinding replaces the previous pair. Binding to an unknown handle is
    /// ignored.
    pub fn bind_hover(
        &mut self,
        id: PrimId,
        enter: impl FnMut() + 'static,
        exit: impl FnMut() + 'static,
    ) {
        if !self.prims.contains_key(&id) {
            return;
        }
        self.hover.insert(
            id,
            HoverHandlers {
                enter: Box::new(enter),
                exit: Box::new(exit),
            },
        );
    }

    /// Removes a primitive's hover binding, if any.
    pub fn unbind_hover(&mut self, id: PrimId) {
        self.hover.remove(&id);
    }

    /// Dispatches a pointer-enter event to the primitive's hover handler.
    ///
    /// No-op for unbound or unknown handles.
    pub fn pointer_enter(&mut self, id: PrimId) {
        if let Some(handlers) = self.hover.get_mut(&id) {
            (handlers.enter)();
        }
    }

    /// Dispatches a pointer-exit event to the primitive's hover handler.
    ///
    /// No-op for unbound or unknown handles.
    pub fn pointer_exit(&mut self, id: PrimId) {
        if let Some(handlers) = self.hover.get_mut(&id) {
            (handlers.exit)();
        }
    }

    /// Schedules a tween of `target`'s attributes to `to` over `duration`
    /// milliseconds, starting immediately.
    pub fn tween(&mut self, target: PrimId, to: Attrs, duration: f64) -> TweenHandle {
        self.tween_after(target, to, duration, 0.0)
    }

    /// Schedules a tween starting after `delay` milliseconds.
    ///
    /// The returned handle can be passed to [`Scene::cancel`] any time before
    /// the tween completes.
    pub fn tween_after(
        &mut self,
        target: PrimId,
        to: Attrs,
        duration: f64,
        delay: f64,
    ) -> TweenHandle {
        self.next_tween += 1;
        let handle = TweenHandle(self.next_tween);
        self.tweens.push(Tween {
            handle: self.next_tween,
            target,
            to,
            from: None,
            start: self.now + delay.max(0.0),
            duration,
            pass: self.pass,
        });
        handle
    }

    /// Cancels a pending or running tween. Unknown handles are ignored.
    pub fn cancel(&mut self, handle: TweenHandle) {
        self.tweens.retain(|t| t.handle != handle.0);
    }

    /// Advances the scene clock by `dt` milliseconds and steps every tween.
    ///
    /// Each tween performs one merge-apply per step, interpolating numeric and
    /// geometric fields linearly and applying its exact target on completion.
    pub fn advance(&mut self, dt: f64) {
        self.now += dt.max(0.0);
        let now = self.now;
        let pass = self.pass;
        let prims = &mut self.prims;
        self.tweens.retain(|tween| !tween.step(prims, now, pass));
    }

    /// Current scene time in milliseconds.
    pub fn now(&self) -> f64 {
        self.now
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("prims", &self.prims.len())
            .field("hover_bindings", &self.hover.len())
            .field("tweens", &self.tweens.len())
            .field("pass", &self.pass)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
