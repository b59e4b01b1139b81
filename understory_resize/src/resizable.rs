// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful resize controller.

use kurbo::{Point, Size};
use tracing::{debug, trace};

use crate::{
    BoundsError, BoundsResolver, Direction, Frame, ResizeConfig, ResizeDelta, ResizeSession,
    parse_transform,
};

/// What a [`ResizeHandler`] wants done with a reported step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeResponse {
    /// Apply the step to the frame.
    #[default]
    Commit,
    /// Leave the frame as it is for this step.
    Veto,
}

/// Callbacks for the phases of a resize drag.
///
/// Every method has a no-op default, and `()` is a handler that accepts
/// everything.
pub trait ResizeHandler {
    /// A drag started on `direction`; `frame` is the frame at drag start.
    fn resize_started(&mut self, direction: Direction, frame: &Frame) {
        let _ = (direction, frame);
    }

    /// A pointer move produced `delta`.
    fn resized(&mut self, direction: Direction, delta: &ResizeDelta) -> ResizeResponse {
        let _ = (direction, delta);
        ResizeResponse::Commit
    }

    /// The drag ended; `delta` is the last committed position and size.
    fn resize_stopped(&mut self, direction: Direction, delta: &ResizeDelta) {
        let _ = (direction, delta);
    }
}

impl ResizeHandler for () {}

/// A resizable element: its frame, its configuration and the active drag.
#[derive(Clone, Debug)]
pub struct Resizable {
    frame: Frame,
    config: ResizeConfig,
    session: Option<ResizeSession>,
}

impl Resizable {
    /// Creates a resizable element.
    #[must_use]
    pub fn new(frame: Frame, config: ResizeConfig) -> Self {
        Self {
            frame,
            config,
            session: None,
        }
    }

    /// Creates a resizable element placed by a CSS `transform`.
    ///
    /// Position, rotation and scale come from `transform`; an empty or
    /// unreadable transform leaves the element at the origin, unrotated.
    #[must_use]
    pub fn from_transform(transform: &str, size: Size, config: ResizeConfig) -> Self {
        let mut frame = Frame::new(Point::ZERO, size);
        if let Some(t) = parse_transform(transform) {
            frame.position = t.translate.to_point();
            frame.rotate = t.rotate;
            frame.scale = t.scale_x;
        }
        Self::new(frame, config)
    }

    /// The current frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Replaces the frame.
    ///
    /// Ignored while a drag is active; the drag owns the frame until it ends.
    pub fn set_frame(&mut self, frame: Frame) {
        if self.session.is_some() {
            trace!("frame update ignored during resize");
            return;
        }
        self.frame = frame;
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Changes apply from the next drag on.
    pub fn config_mut(&mut self) -> &mut ResizeConfig {
        &mut self.config
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// The handle under `point`, within `radius`, among the enabled handles.
    #[must_use]
    pub fn handle_at(&self, point: Point, radius: f64) -> Option<Direction> {
        if !self.config.enabled {
            return None;
        }
        self.frame
            .corners()
            .handle_at(point, radius, self.config.handles)
    }

    /// Starts dragging `direction` with the pointer at `pointer`.
    ///
    /// Returns `Ok(false)` without starting when resizing is disabled, the
    /// handle is not enabled, or a drag is already active. Bounds errors
    /// abort the start.
    pub fn begin<R, H>(
        &mut self,
        pointer: Point,
        direction: Direction,
        resolver: &R,
        handler: &mut H,
    ) -> Result<bool, BoundsError>
    where
        R: BoundsResolver + ?Sized,
        H: ResizeHandler + ?Sized,
    {
        if !self.config.enabled || !self.config.handles.allows(direction) || self.is_resizing() {
            return Ok(false);
        }
        let session = ResizeSession::start(self.frame, direction, pointer, &self.config, resolver)?;
        handler.resize_started(direction, &self.frame);
        self.session = Some(session);
        Ok(true)
    }

    /// Hit-tests handles at `pointer` and starts a drag on the one found.
    pub fn begin_at<R, H>(
        &mut self,
        pointer: Point,
        radius: f64,
        resolver: &R,
        handler: &mut H,
    ) -> Result<bool, BoundsError>
    where
        R: BoundsResolver + ?Sized,
        H: ResizeHandler + ?Sized,
    {
        match self.handle_at(pointer, radius) {
            Some(direction) => self.begin(pointer, direction, resolver, handler),
            None => Ok(false),
        }
    }

    /// Moves the active drag to `pointer`.
    ///
    /// Returns the reported step, or `None` when no drag is active or
    /// resizing has been disabled. The frame only changes when the handler
    /// commits.
    pub fn update<H>(&mut self, pointer: Point, handler: &mut H) -> Option<ResizeDelta>
    where
        H: ResizeHandler + ?Sized,
    {
        if !self.config.enabled {
            return None;
        }
        let session = self.session.as_ref()?;
        let delta = session.update(pointer);
        match handler.resized(session.direction(), &delta) {
            ResizeResponse::Commit => self.frame = self.frame.with_delta(delta),
            ResizeResponse::Veto => trace!(?delta, "resize step vetoed"),
        }
        Some(delta)
    }

    /// Ends the active drag.
    ///
    /// Reports the last committed position and size. A controlled element
    /// then returns to its frame from before the drag.
    pub fn end<H>(&mut self, handler: &mut H) -> Option<ResizeDelta>
    where
        H: ResizeHandler + ?Sized,
    {
        let session = self.session.take()?;
        let delta = ResizeDelta {
            position: self.frame.position,
            size: self.frame.size,
        };
        if self.config.controlled {
            self.frame = session.start_frame();
        }
        debug!(
            direction = ?session.direction(),
            width = delta.size.width,
            height = delta.size.height,
            "resize session ended"
        );
        handler.resize_stopped(session.direction(), &delta);
        Some(delta)
    }

    /// Abandons the active drag and restores the frame it started from.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(direction = ?session.direction(), "resize session cancelled");
            self.frame = session.start_frame();
        }
    }
}
