#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

impl TileKind {
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            _ => None,
        }
    }
}

/// Automaton rule applied to floor cells during an evolution step.
///
/// Wall cells follow the same erosion rule under both variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Growth from the 8-neighborhood plus accretion in wide open 5x5 regions.
    #[default]
    Conservative,
    /// Growth from the 8-neighborhood only.
    Smooth,
}
