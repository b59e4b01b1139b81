// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a [`Resizable`] from `ui-events` pointer events.

use ui_events::pointer::PointerEvent;

use crate::{BoundsError, BoundsResolver, Resizable, ResizeHandler};

impl Resizable {
    /// Feeds one pointer event into the resize state machine.
    ///
    /// - `Down` hit-tests the handles within `hit_radius` of the pointer and
    ///   starts a drag on the nearest one.
    /// - `Move` updates the active drag.
    /// - `Up` ends it and `Cancel` abandons it.
    ///
    /// Positions are read in logical pixels. Returns `Ok(true)` when the
    /// event belonged to a resize drag.
    pub fn encode<R, H>(
        &mut self,
        event: &PointerEvent,
        hit_radius: f64,
        resolver: &R,
        handler: &mut H,
    ) -> Result<bool, BoundsError>
    where
        R: BoundsResolver + ?Sized,
        H: ResizeHandler + ?Sized,
    {
        match event {
            PointerEvent::Down(e) => {
                self.begin_at(e.state.logical_point(), hit_radius, resolver, handler)
            }
            PointerEvent::Move(e) => Ok(self
                .update(e.current.logical_point(), handler)
                .is_some()),
            PointerEvent::Up(_) => Ok(self.end(handler).is_some()),
            PointerEvent::Cancel(_) => {
                let active = self.is_resizing();
                self.cancel();
                Ok(active)
            }
            _ => Ok(false),
        }
    }
}
