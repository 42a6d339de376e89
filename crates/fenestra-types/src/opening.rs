use serde::{Deserialize, Serialize};

/// How a panel opens, without its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Fixed,
    Casement,
    Sliding,
    Awning,
    Hopper,
    Folding,
    TiltTurn,
}

impl OpeningType {
    pub const ALL: [OpeningType; 7] = [
        OpeningType::Fixed,
        OpeningType::Casement,
        OpeningType::Sliding,
        OpeningType::Awning,
        OpeningType::Hopper,
        OpeningType::Folding,
        OpeningType::TiltTurn,
    ];

    pub fn is_operable(self) -> bool {
        self != OpeningType::Fixed
    }
}

/// Flat direction value as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningDirection {
    Left,
    Right,
    Top,
    Bottom,
    BiLeft,
    BiRight,
}

/// Horizontal sense of a side-hung, sliding or folding sash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lateral {
    Left,
    Right,
    BiLeft,
    BiRight,
}

impl Lateral {
    /// `None` for the vertical directions, which no lateral opening accepts.
    pub fn from_direction(direction: OpeningDirection) -> Option<Self> {
        match direction {
            OpeningDirection::Left => Some(Lateral::Left),
            OpeningDirection::Right => Some(Lateral::Right),
            OpeningDirection::BiLeft => Some(Lateral::BiLeft),
            OpeningDirection::BiRight => Some(Lateral::BiRight),
            OpeningDirection::Top | OpeningDirection::Bottom => None,
        }
    }

    pub fn direction(self) -> OpeningDirection {
        match self {
            Lateral::Left => OpeningDirection::Left,
            Lateral::Right => OpeningDirection::Right,
            Lateral::BiLeft => OpeningDirection::BiLeft,
            Lateral::BiRight => OpeningDirection::BiRight,
        }
    }

    /// The opposite single-leaf sense; bidirectional values are returned as-is.
    pub fn mirrored(self) -> Self {
        match self {
            Lateral::Left => Lateral::Right,
            Lateral::Right => Lateral::Left,
            other => other,
        }
    }
}

/// Opening type together with the only direction data it can carry.
///
/// Awning sashes are always top-hung and hopper sashes always bottom-hung,
/// so they carry nothing; every side-hung or sliding variant carries a
/// [`Lateral`]. Serialized flat as `{"type": "casement", "direction": "left"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Opening {
    #[default]
    Fixed,
    Casement {
        direction: Lateral,
    },
    Sliding {
        direction: Lateral,
    },
    Awning,
    Hopper,
    Folding {
        direction: Lateral,
    },
    TiltTurn {
        direction: Lateral,
    },
}

impl Opening {
    /// Build an opening from flat user input, coercing the direction to one
    /// the type supports. Vertical directions on lateral types become `Left`.
    pub fn from_parts(kind: OpeningType, direction: OpeningDirection) -> Self {
        let lateral = Lateral::from_direction(direction).unwrap_or(Lateral::Left);
        match kind {
            OpeningType::Fixed => Opening::Fixed,
            OpeningType::Casement => Opening::Casement { direction: lateral },
            OpeningType::Sliding => Opening::Sliding { direction: lateral },
            OpeningType::Awning => Opening::Awning,
            OpeningType::Hopper => Opening::Hopper,
            OpeningType::Folding => Opening::Folding { direction: lateral },
            OpeningType::TiltTurn => Opening::TiltTurn { direction: lateral },
        }
    }

    pub fn kind(&self) -> OpeningType {
        match self {
            Opening::Fixed => OpeningType::Fixed,
            Opening::Casement { .. } => OpeningType::Casement,
            Opening::Sliding { .. } => OpeningType::Sliding,
            Opening::Awning => OpeningType::Awning,
            Opening::Hopper => OpeningType::Hopper,
            Opening::Folding { .. } => OpeningType::Folding,
            Opening::TiltTurn { .. } => OpeningType::TiltTurn,
        }
    }

    /// Flat direction, if the opening has one. Fixed panels have none.
    pub fn direction(&self) -> Option<OpeningDirection> {
        match self {
            Opening::Fixed => None,
            Opening::Awning => Some(OpeningDirection::Top),
            Opening::Hopper => Some(OpeningDirection::Bottom),
            Opening::Casement { direction }
            | Opening::Sliding { direction }
            | Opening::Folding { direction }
            | Opening::TiltTurn { direction } => Some(direction.direction()),
        }
    }

    /// Change the type, keeping the current direction where the new type
    /// accepts it.
    pub fn with_kind(self, kind: OpeningType) -> Self {
        let direction = self.direction().unwrap_or(OpeningDirection::Left);
        Opening::from_parts(kind, direction)
    }

    /// Change the direction, coerced to what the current type accepts.
    pub fn with_direction(self, direction: OpeningDirection) -> Self {
        Opening::from_parts(self.kind(), direction)
    }

    pub fn is_operable(&self) -> bool {
        self.kind().is_operable()
    }
}
