//! Geometry and state vocabulary for swipe-to-reveal rows.

use std::fmt;

use thiserror::Error;

/// Maximum tint applied behind a fully revealed row.
const BACKDROP_MAX_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("action panel width must be positive and finite, got {0}")]
pub struct InvalidPanelWidth(pub f32);

/// Width of the revealed action-button region, in layout units.
///
/// Constant for the lifetime of one list.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PanelWidth(f32);

impl PanelWidth {
    /// Both stock lists reveal a 240-unit panel.
    pub const STANDARD: PanelWidth = PanelWidth(240.0);

    pub fn new(width: f32) -> Result<Self, InvalidPanelWidth> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(InvalidPanelWidth(width))
        }
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Offset of a fully revealed panel.
    #[must_use]
    pub fn open_offset(self) -> Offset {
        Offset(-self.0)
    }
}

impl Default for PanelWidth {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Horizontal translation of a row.
///
/// `0` is closed, `-W` is fully open. Values built with [`Offset::clamped`]
/// always lie in `[-W, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Offset(f32);

impl Offset {
    pub const CLOSED: Offset = Offset(0.0);

    /// Raw, unclamped offset. Used for live animator readings which are
    /// already bounded by their endpoints.
    #[must_use]
    pub const fn raw(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn clamped(value: f32, width: PanelWidth) -> Self {
        if value.is_nan() {
            return Self::CLOSED;
        }
        Self(value.clamp(-width.get(), 0.0))
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_closed(self) -> bool {
        self.0 == 0.0
    }

    /// Fraction of the panel revealed, in `[0, 1]`.
    #[must_use]
    pub fn reveal_fraction(self, width: PanelWidth) -> f32 {
        (-self.0 / width.get()).clamp(0.0, 1.0)
    }

    /// Translation of the action panel itself: it trails the row in from
    /// the right edge, `W` when hidden and `0` when fully shown.
    #[must_use]
    pub fn panel_translation(self, width: PanelWidth) -> f32 {
        (self.0 + width.get()).clamp(0.0, width.get())
    }

    /// Tint behind the row, proportional to how far it has been pulled.
    #[must_use]
    pub fn backdrop_opacity(self, width: PanelWidth) -> f32 {
        (self.0.abs() / width.get() * BACKDROP_MAX_OPACITY).clamp(0.0, BACKDROP_MAX_OPACITY)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Pointer movement relative to the gesture start.
///
/// `velocity_x` is in layout units per millisecond; negative is leftward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
    pub velocity_x: f32,
}

impl GestureSample {
    #[must_use]
    pub const fn new(dx: f32, dy: f32, velocity_x: f32) -> Self {
        Self { dx, dy, velocity_x }
    }

    /// A sample with no velocity, as produced by a plain move event.
    #[must_use]
    pub const fn moved(dx: f32, dy: f32) -> Self {
        Self::new(dx, dy, 0.0)
    }

    /// True when both axes stayed strictly inside a `slop` box.
    #[must_use]
    pub fn within(&self, slop: f32) -> bool {
        self.dx.abs() < slop && self.dy.abs() < slop
    }
}

/// Per-row reveal state.
///
/// `Dragging` is the only state in which the offset follows the pointer
/// rather than the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealState {
    #[default]
    Closed,
    Dragging,
    SettlingOpen,
    SettlingClosed,
    Open,
}

impl RevealState {
    /// States the list coordinator counts as "the open row".
    #[must_use]
    pub const fn is_open_intent(self) -> bool {
        matches!(self, RevealState::SettlingOpen | RevealState::Open)
    }

    #[must_use]
    pub const fn is_settling(self) -> bool {
        matches!(self, RevealState::SettlingOpen | RevealState::SettlingClosed)
    }

    /// Action buttons only respond when the panel is fully revealed.
    #[must_use]
    pub const fn accepts_actions(self) -> bool {
        matches!(self, RevealState::Open)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RevealState::Closed => "closed",
            RevealState::Dragging => "dragging",
            RevealState::SettlingOpen => "settling-open",
            RevealState::SettlingClosed => "settling-closed",
            RevealState::Open => "open",
        }
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rest position a settle is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleTarget {
    Open,
    Closed,
}

impl SettleTarget {
    #[must_use]
    pub fn offset(self, width: PanelWidth) -> Offset {
        match self {
            SettleTarget::Open => width.open_offset(),
            SettleTarget::Closed => Offset::CLOSED,
        }
    }

    /// State a row is in while animating toward this target.
    #[must_use]
    pub const fn settling_state(self) -> RevealState {
        match self {
            SettleTarget::Open => RevealState::SettlingOpen,
            SettleTarget::Closed => RevealState::SettlingClosed,
        }
    }

    /// State a row lands in once the animation settles.
    #[must_use]
    pub const fn rest_state(self) -> RevealState {
        match self {
            SettleTarget::Open => RevealState::Open,
            SettleTarget::Closed => RevealState::Closed,
        }
    }
}
