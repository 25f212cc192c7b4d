//! Insert-block menu and double-tap state.
//!
//! Coordinates are viewport cells (or pixels; the unit is whatever the
//! frontend measures in). Nothing here reads or writes the viewport itself.

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

/// A width/height pair in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Distances used when placing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSpacing {
    /// Offset from the pointer to the menu's top-left corner.
    pub pointer_offset: u16,
    /// Minimum gap kept between the menu and the viewport edge.
    pub viewport_padding: u16,
}

impl Default for MenuSpacing {
    fn default() -> Self {
        Self {
            pointer_offset: 8,
            viewport_padding: 8,
        }
    }
}

/// The contextual insert-block menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertMenu {
    visible: bool,
    anchor: Option<usize>,
    position: Point,
    spacing: MenuSpacing,
}

impl InsertMenu {
    pub fn with_spacing(spacing: MenuSpacing) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }

    /// Shows the menu next to `pointer`, remembering `anchor` as the caret
    /// offset a chosen block will be inserted at.
    pub fn open(&mut self, anchor: usize, pointer: Point) {
        let offset = self.spacing.pointer_offset;
        self.visible = true;
        self.anchor = Some(anchor);
        self.position = Point {
            x: pointer.x.saturating_add(offset),
            y: pointer.y.saturating_add(offset),
        };
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.anchor = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the menu back inside `viewport` if a `menu`-sized box at the
    /// current position would overflow the right or bottom edge.
    ///
    /// Returns true if the position changed.
    pub fn fit_within(&mut self, viewport: Size, menu: Size) -> bool {
        let pad = self.spacing.viewport_padding;
        let before = self.position;

        let right = u32::from(self.position.x) + u32::from(menu.width);
        if right > u32::from(viewport.width.saturating_sub(pad)) {
            self.position.x =
                pad.max(viewport.width.saturating_sub(menu.width.saturating_add(pad)));
        }
        let bottom = u32::from(self.position.y) + u32::from(menu.height);
        if bottom > u32::from(viewport.height.saturating_sub(pad)) {
            self.position.y =
                pad.max(viewport.height.saturating_sub(menu.height.saturating_add(pad)));
        }

        self.position != before
    }
}

/// Detects double taps from a stream of tap timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapTracker {
    last_tap_ms: Option<u64>,
}

impl TapTracker {
    /// Two taps closer than this are a double tap.
    pub const DOUBLE_TAP_MS: u64 = 300;

    /// Records a tap and reports whether it completes a double tap.
    pub fn register(&mut self, now_ms: u64) -> bool {
        let double = self
            .last_tap_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < Self::DOUBLE_TAP_MS);
        self.last_tap_ms = Some(now_ms);
        double
    }
}
