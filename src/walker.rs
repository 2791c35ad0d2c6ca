//! The walking-sprite widget itself.
//!
//! A [`Walker`] owns a horizontal [`Strip`] of its host viewport and walks
//! the ninja back and forth inside it: a linear [`crate::anim::Tween`]
//! carries the sprite's center from one edge bound to the other, the art is
//! mirrored at every turn, and the walk halts silently as soon as the
//! viewport stops being displayed. A halted walk resumes when the host
//! reports that the application became active again.

use std::time::Duration;

use crate::{
    anim::Tween,
    frames::{Variant, WalkCycle},
    screen::Screen,
};

/// A displayable surface a walker can be attached to.
///
/// `is_displayed` is the capability query the walker consults before
/// scheduling or continuing a walk leg; hosts report `false` as soon as
/// their surface is gone. [`Screen`] reports `true` exactly while its event
/// loop runs.
pub trait Viewport {
    /// Width of the surface in pixels.
    fn width_px(&self) -> u16;
    /// Whether the surface is currently attached to a visible display.
    fn is_displayed(&self) -> bool;
}

/// Vertical edge a walker's strip is pinned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    #[default]
    Bottom,
}

/// Walker configuration, immutable after construction.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Side length of the sprite's square, in pixels.
    pub side: u16,
    /// Color variant of the built-in art.
    pub variant: Variant,
    /// Duration of one walk leg, edge to edge.
    pub walk_duration: Duration,
    /// Horizontal padding kept between the sprite and the strip edges.
    pub padding: u16,
    /// Edge the strip is pinned to.
    pub anchor: VerticalAnchor,
    /// Distance between the anchor edge and the strip, in pixels.
    pub anchor_offset: u16,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            side: 30,
            variant: Variant::Default,
            walk_duration: Duration::from_secs(5),
            padding: 10,
            anchor: VerticalAnchor::Bottom,
            anchor_offset: 0,
        }
    }
}

/// The walker-owned container band: full viewport width, fixed height,
/// pinned to a vertical anchor with an offset. Lives exactly as long as its
/// walker.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    anchor: VerticalAnchor,
    offset: u16,
    height: u16,
}

impl Strip {
    fn new(anchor: VerticalAnchor, offset: u16, height: u16) -> Self {
        Self {
            anchor,
            offset,
            height,
        }
    }

    /// The strip's top edge within a viewport of the given pixel height.
    pub fn top_in(&self, viewport_height: u16) -> u16 {
        match self.anchor {
            VerticalAnchor::Top => self.offset,
            VerticalAnchor::Bottom => viewport_height.saturating_sub(self.offset + self.height),
        }
    }

    /// Height of the strip in pixels.
    pub fn height_px(&self) -> u16 {
        self.height
    }
}

/// Horizontal bounds for the sprite's center within a strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    /// Leftmost allowed center position.
    pub min_center_x: f32,
    /// Rightmost allowed center position.
    pub max_center_x: f32,
}

impl WalkBounds {
    /// Computes the leftmost and rightmost allowed center positions for a
    /// sprite of width `side` with `padding` kept to each edge.
    ///
    /// When the strip is too narrow to fit the sprite and its padding, both
    /// bounds collapse to the strip midpoint: the sprite stands in place
    /// instead of walking out of the strip.
    pub fn compute(width: u16, side: u16, padding: u16) -> Self {
        let half = side as f32 / 2.0;
        let min = padding as f32 + half;
        let max = width as f32 - half - padding as f32;
        if max < min {
            let mid = width as f32 / 2.0;
            Self {
                min_center_x: mid,
                max_center_x: mid,
            }
        } else {
            Self {
                min_center_x: min,
                max_center_x: max,
            }
        }
    }
}

/// Direction of the walk leg in flight, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Forward,
    Backward,
}

/// The widget controller. See the module documentation.
pub struct Walker {
    config: WalkerConfig,
    strip: Strip,
    cycle: WalkCycle,
    phase: Phase,
    leg: Option<Tween>,
    mirrored: bool,
    center_x: f32,
}

impl Walker {
    /// Creates an idle walker with the built-in art for the configured
    /// variant. The frame cycle starts immediately; no walk leg is
    /// scheduled until [`Walker::start_if_needed`].
    pub fn new(config: WalkerConfig) -> Self {
        let cycle = WalkCycle::builtin(config.variant);
        Self::with_cycle(config, cycle)
    }

    /// Creates an idle walker with custom art instead of the built-in
    /// ninja.
    pub fn with_cycle(config: WalkerConfig, cycle: WalkCycle) -> Self {
        let strip = Strip::new(config.anchor, config.anchor_offset, config.side);
        let center_x = config.padding as f32 + config.side as f32 / 2.0;
        Self {
            strip,
            cycle,
            phase: Phase::Idle,
            leg: None,
            mirrored: false,
            center_x,
            config,
        }
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// The container band this walker draws into.
    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    /// True while a walk leg is in flight.
    pub fn is_walking(&self) -> bool {
        self.leg.is_some()
    }

    /// Whether the sprite is currently mirrored (facing left).
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// The sprite's current center x position, in pixels.
    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    /// The center bounds within the given viewport.
    pub fn bounds_in(&self, viewport: &impl Viewport) -> WalkBounds {
        WalkBounds::compute(viewport.width_px(), self.config.side, self.config.padding)
    }

    /// Starts the walk unless it is already running or the viewport is not
    /// displayed. Safe to call any number of times; redundant calls are
    /// silent no-ops.
    ///
    /// The sprite is reset to the leftmost bound, facing right, and the
    /// first leg heads toward the rightmost bound.
    pub fn start_if_needed(&mut self, viewport: &impl Viewport) {
        if self.is_walking() || !viewport.is_displayed() {
            return;
        }
        let bounds = self.bounds_in(viewport);
        self.center_x = bounds.min_center_x;
        self.mirrored = false;
        self.phase = Phase::Forward;
        self.leg = Some(Tween::new(
            bounds.min_center_x,
            bounds.max_center_x,
            self.config.walk_duration,
        ));
    }

    /// Entry point for the host's "application became active" event.
    /// Hosts route [`crate::event::Event::FocusGained`] here.
    pub fn on_app_activated(&mut self, viewport: &impl Viewport) {
        self.start_if_needed(viewport);
    }

    /// Advances the widget by `dt`.
    ///
    /// The frame cycle always advances. A leg in flight is interrupted and
    /// the walk halts to idle if the viewport is no longer displayed; a leg
    /// that runs to completion toggles the mirror and schedules the
    /// opposite leg, with bounds recomputed against the current viewport
    /// width so resizes take effect at the next turn.
    pub fn tick(&mut self, dt: Duration, viewport: &impl Viewport) {
        self.cycle.tick(dt);
        let Some(leg) = &mut self.leg else {
            return;
        };
        if !viewport.is_displayed() {
            self.halt();
            return;
        }
        let finished = leg.advance(dt);
        self.center_x = leg.value();
        if finished {
            self.mirrored = !self.mirrored;
            let bounds = self.bounds_in(viewport);
            let (phase, target) = match self.phase {
                Phase::Forward => (Phase::Backward, bounds.min_center_x),
                Phase::Backward | Phase::Idle => (Phase::Forward, bounds.max_center_x),
            };
            self.phase = phase;
            self.leg = Some(Tween::new(self.center_x, target, self.config.walk_duration));
        }
    }

    fn halt(&mut self) {
        self.leg = None;
        self.phase = Phase::Idle;
    }

    /// Renders the current frame into the screen, bottom-aligned inside
    /// the strip at the animated center position.
    pub fn draw(&self, screen: &mut Screen) {
        let frame = self.cycle.current(self.mirrored);
        let top = self.strip.top_in(screen.pixel_height());
        let x = (self.center_x - frame.width_px() as f32 / 2.0).round() as i32;
        let y = top as i32 + self.strip.height_px() as i32 - frame.height_px() as i32;
        screen.draw_frame(frame, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeViewport {
        width: u16,
        displayed: bool,
    }

    impl Viewport for FakeViewport {
        fn width_px(&self) -> u16 {
            self.width
        }
        fn is_displayed(&self) -> bool {
            self.displayed
        }
    }

    fn visible(width: u16) -> FakeViewport {
        FakeViewport {
            width,
            displayed: true,
        }
    }

    fn walker() -> Walker {
        Walker::new(WalkerConfig::default())
    }

    const LEG: Duration = Duration::from_secs(5);

    #[test]
    fn bounds_match_geometry() {
        // side 30, padding 10, width 110 -> centers 25 and 75
        let bounds = WalkBounds::compute(110, 30, 10);
        assert_eq!(bounds.min_center_x, 25.0);
        assert_eq!(bounds.max_center_x, 75.0);
    }

    #[test]
    fn narrow_strip_collapses_to_midpoint() {
        let bounds = WalkBounds::compute(40, 30, 10);
        assert_eq!(bounds.min_center_x, 20.0);
        assert_eq!(bounds.max_center_x, 20.0);
    }

    #[test]
    fn start_requires_display() {
        let mut w = walker();
        let vp = FakeViewport {
            width: 110,
            displayed: false,
        };
        w.start_if_needed(&vp);
        assert!(!w.is_walking());
        w.tick(Duration::from_secs(1), &vp);
        assert!(!w.is_walking());
    }

    #[test]
    fn start_is_idempotent() {
        let mut w = walker();
        let vp = visible(110);
        w.start_if_needed(&vp);
        assert!(w.is_walking());
        w.tick(Duration::from_millis(2500), &vp);
        let mid_leg = w.center_x();
        assert_eq!(mid_leg, 50.0);
        // a second start while walking changes nothing
        w.start_if_needed(&vp);
        assert!(w.is_walking());
        assert_eq!(w.center_x(), mid_leg);
    }

    #[test]
    fn walks_edge_to_edge_and_mirrors() {
        let mut w = walker();
        let vp = visible(110);
        w.start_if_needed(&vp);
        assert!(!w.is_mirrored());
        assert_eq!(w.center_x(), 25.0);

        w.tick(Duration::from_millis(2500), &vp);
        assert_eq!(w.center_x(), 50.0);

        // forward leg completes: sprite at the right edge, mirrored
        w.tick(Duration::from_millis(2500), &vp);
        assert_eq!(w.center_x(), 75.0);
        assert!(w.is_mirrored());
        assert!(w.is_walking());

        // backward leg completes: back at the left edge, mirror restored
        w.tick(LEG, &vp);
        assert_eq!(w.center_x(), 25.0);
        assert!(!w.is_mirrored());
        assert!(w.is_walking());

        // mirror state has period 2
        w.tick(LEG, &vp);
        assert!(w.is_mirrored());
        w.tick(LEG, &vp);
        assert!(!w.is_mirrored());
    }

    #[test]
    fn losing_display_interrupts_the_leg() {
        let mut w = walker();
        let mut vp = visible(110);
        w.start_if_needed(&vp);
        w.tick(Duration::from_millis(2500), &vp);
        assert_eq!(w.center_x(), 50.0);

        vp.displayed = false;
        w.tick(Duration::from_secs(1), &vp);
        assert!(!w.is_walking());
        // position is left where the interruption found it
        assert_eq!(w.center_x(), 50.0);

        // no further legs are scheduled while halted
        w.tick(LEG, &vp);
        assert!(!w.is_walking());
    }

    #[test]
    fn activation_resumes_a_halted_walk() {
        let mut w = walker();
        let mut vp = visible(110);
        w.start_if_needed(&vp);
        w.tick(LEG, &vp);
        assert!(w.is_mirrored());

        vp.displayed = false;
        w.tick(Duration::from_secs(1), &vp);
        assert!(!w.is_walking());

        // activation while hidden stays a no-op
        w.on_app_activated(&vp);
        assert!(!w.is_walking());

        // restart resets position and mirror
        vp.displayed = true;
        w.on_app_activated(&vp);
        assert!(w.is_walking());
        assert!(!w.is_mirrored());
        assert_eq!(w.center_x(), 25.0);
    }

    #[test]
    fn narrow_strip_walks_in_place() {
        let mut w = walker();
        let vp = visible(40);
        w.start_if_needed(&vp);
        assert_eq!(w.center_x(), 20.0);
        w.tick(LEG, &vp);
        // the leg completes with zero displacement but keeps alternating
        assert_eq!(w.center_x(), 20.0);
        assert!(w.is_mirrored());
        assert!(w.is_walking());
    }

    #[test]
    fn resize_applies_at_the_next_turn() {
        let mut w = walker();
        let mut vp = visible(110);
        w.start_if_needed(&vp);
        vp.width = 210;
        // the in-flight leg still ends at the old bound...
        w.tick(LEG, &vp);
        assert_eq!(w.center_x(), 75.0);
        // ...the next forward leg targets the new one
        w.tick(LEG, &vp);
        assert_eq!(w.center_x(), 25.0);
        w.tick(LEG, &vp);
        assert_eq!(w.center_x(), 185.0);
    }

    #[test]
    fn strip_pins_to_anchor() {
        let strip = Strip::new(VerticalAnchor::Bottom, 4, 30);
        assert_eq!(strip.top_in(100), 66);
        let strip = Strip::new(VerticalAnchor::Top, 4, 30);
        assert_eq!(strip.top_in(100), 4);
        // undersized viewports clamp instead of wrapping
        let strip = Strip::new(VerticalAnchor::Bottom, 0, 30);
        assert_eq!(strip.top_in(10), 0);
    }

    #[test]
    fn frame_cycle_runs_while_idle() {
        let mut w = walker();
        let vp = FakeViewport {
            width: 110,
            displayed: false,
        };
        let before = w.cycle.frame_index();
        w.tick(Duration::from_millis(500), &vp);
        assert!(!w.is_walking());
        assert_ne!(w.cycle.frame_index(), before);
    }
}
