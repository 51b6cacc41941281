//! Cursor Overlay
//!
//! Pointer-following decoration with a hover variant over links and
//! buttons. Hover detection is delegated: the host attaches one pointer
//! over/out listener pair at the root and asks [`is_interactive`] about the
//! event target and its ancestors.

use std::time::Duration;

/// Viewports at or below this width get no overlay
pub const CURSOR_BREAKPOINT_PX: f64 = 768.0;

const CAPABLE_TAGS: [&str; 2] = ["a", "button"];
const CAPABLE_ROLES: [&str; 2] = ["link", "button"];

/// Whether an element with this tag name and ARIA role triggers hover
pub fn is_interactive(tag_name: &str, role: Option<&str>) -> bool {
    let tag = tag_name.to_ascii_lowercase();
    CAPABLE_TAGS.contains(&tag.as_str())
        || role.is_some_and(|r| CAPABLE_ROLES.contains(&r.trim().to_ascii_lowercase().as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geometry and motion of one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub size: f64,
    pub hover_scale: f64,
    pub transition: Duration,
}

pub const OUTER_RING: RingSpec = RingSpec {
    size: 40.0,
    hover_scale: 1.5,
    transition: Duration::from_millis(100),
};

pub const INNER_RING: RingSpec = RingSpec {
    size: 8.0,
    hover_scale: 2.0,
    transition: Duration::from_millis(50),
};

/// Where a ring should be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub transition: Duration,
}

impl RingTransform {
    /// Inline style moving the ring with a short linear tween
    pub fn style(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); transition: transform {}ms linear;",
            self.x,
            self.y,
            self.scale,
            self.transition.as_millis()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorOverlay {
    position: Point,
    variant: CursorVariant,
    viewport_width: f64,
    breakpoint: f64,
}

impl CursorOverlay {
    pub fn new(viewport_width: f64, breakpoint: f64) -> Self {
        Self {
            position: Point::default(),
            variant: CursorVariant::Default,
            viewport_width,
            breakpoint,
        }
    }

    /// Suppressed on narrow viewports
    pub fn is_enabled(&self) -> bool {
        self.viewport_width > self.breakpoint
    }

    /// Re-checked on every resize
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.position = Point { x, y };
    }

    /// Pointer entered an element; `interactive` is the capability test on it
    pub fn pointer_over(&mut self, interactive: bool) {
        if interactive {
            self.variant = CursorVariant::Hover;
        }
    }

    /// Pointer left an element; `entering_interactive` tests the element it moved into
    pub fn pointer_out(&mut self, entering_interactive: bool) {
        if !entering_interactive {
            self.variant = CursorVariant::Default;
        }
    }

    pub fn outer(&self) -> RingTransform {
        self.ring(&OUTER_RING)
    }

    pub fn inner(&self) -> RingTransform {
        self.ring(&INNER_RING)
    }

    fn ring(&self, ring_spec: &RingSpec) -> RingTransform {
        let offset = ring_spec.size / 2.0;
        RingTransform {
            x: self.position.x - offset,
            y: self.position.y - offset,
            scale: match self.variant {
                CursorVariant::Default => 1.0,
                CursorVariant::Hover => ring_spec.hover_scale,
            },
            transition: ring_spec.transition,
        }
    }
}
