pub(crate) use rgb::RGB8;

/// A pair of endpoints to interpolate between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub start: RGB8,
    pub end: RGB8,
}

impl Transition {
    pub const fn new(start: RGB8, end: RGB8) -> Self {
        Transition { start, end }
    }

    /// Build a transition from two `(r, g, b)` triples.
    pub const fn rgb(start: (u8, u8, u8), end: (u8, u8, u8)) -> Self {
        Transition {
            start: RGB8 { r: start.0, g: start.1, b: start.2 },
            end: RGB8 { r: end.0, g: end.1, b: end.2 },
        }
    }
}

/// Registry a named preset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetKind {
    /// Light to dark shade of a single named color.
    Shade,
    /// Blend from one named color to another.
    TwoColor,
}

/// A named transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub kind: PresetKind,
    pub transition: Transition,
}
