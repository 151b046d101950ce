//! Computed style and layout values read from the host.

/// CSS `flex-direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// `row`
    #[default]
    Row,
    /// `row-reverse`
    RowReverse,
    /// `column`
    Column,
    /// `column-reverse`
    ColumnReverse,
}

impl FlexDirection {
    /// Parse a computed `flex-direction` value. Unknown values read as `row`.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "row-reverse" => Self::RowReverse,
            "column" => Self::Column,
            "column-reverse" => Self::ColumnReverse,
            _ => Self::Row,
        }
    }

    /// Returns true for the column directions.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }
}

/// CSS `pointer-events`, reduced to what matters for click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    /// Any value other than `none`.
    #[default]
    Auto,
    /// `none`
    None,
}

impl PointerEvents {
    /// Parse a computed `pointer-events` value.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        if value.trim() == "none" {
            Self::None
        } else {
            Self::Auto
        }
    }
}

/// The subset of computed style the core reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComputedStyle {
    /// `flex-direction`.
    pub flex_direction: FlexDirection,
    /// `pointer-events`.
    pub pointer_events: PointerEvents,
    /// `margin-top` in CSS pixels.
    pub margin_top: f64,
    /// `margin-bottom` in CSS pixels.
    pub margin_bottom: f64,
}

impl ComputedStyle {
    /// Parse a computed pixel length the way `parseInt` does: leading integer
    /// part only, anything unparsable is zero.
    ///
    /// ```
    /// use tabstack_host::ComputedStyle;
    ///
    /// assert_eq!(ComputedStyle::parse_px("12.7px"), 12.0);
    /// assert_eq!(ComputedStyle::parse_px("-4px"), -4.0);
    /// assert_eq!(ComputedStyle::parse_px("auto"), 0.0);
    /// ```
    #[must_use]
    pub fn parse_px(value: &str) -> f64 {
        let value = value.trim();
        let (sign, digits) = match value.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, value.strip_prefix('+').unwrap_or(value)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits[..end].parse::<f64>().map_or(0.0, |n| sign * n)
    }
}

/// Viewport-relative bounding box, as `getBoundingClientRect` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the viewport top to the box top.
    pub top: f64,
    /// Distance from the viewport top to the box bottom.
    pub bottom: f64,
}

impl Rect {
    /// Create a rect from its top edge and height.
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Box height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns true if both edges lie within `0..=viewport_height`.
    #[must_use]
    pub fn is_within_viewport(&self, viewport_height: f64) -> bool {
        let inside = |y: f64| (0.0..=viewport_height).contains(&y);
        inside(self.top) && inside(self.bottom)
    }
}
