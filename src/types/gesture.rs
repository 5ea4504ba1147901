//! Named gestures and per-hand gesture state

use serde::{Deserialize, Serialize};

/// Gestures the classifier recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GestureKind {
    /// Thumb, middle and ring curled; index and little extended
    Spider,
    /// Index and middle fanned into a V, everything else curled
    Peace,
}

impl GestureKind {
    pub const ALL: [GestureKind; 2] = [GestureKind::Spider, GestureKind::Peace];

    pub fn emoji(&self) -> &'static str {
        match self {
            GestureKind::Spider => "🕷️",
            GestureKind::Peace => "✌️",
        }
    }
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GestureKind::Spider => "SPIDER",
            GestureKind::Peace => "PEACE",
        };
        write!(f, "{}", name)
    }
}

/// Gesture flags for one hand on one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureFlags {
    pub spider_active: bool,
    pub peace_active: bool,
}

impl GestureFlags {
    /// Both gestures inactive
    pub const NONE: GestureFlags = GestureFlags {
        spider_active: false,
        peace_active: false,
    };

    pub fn is_active(&self, kind: GestureKind) -> bool {
        match kind {
            GestureKind::Spider => self.spider_active,
            GestureKind::Peace => self.peace_active,
        }
    }

    pub fn any(&self) -> bool {
        self.spider_active || self.peace_active
    }
}

/// Per-hand gesture state. The `prev_*` fields only exist to derive edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureState {
    pub spider_active: bool,
    pub peace_active: bool,
    pub prev_spider_active: bool,
    pub prev_peace_active: bool,
}

impl GestureState {
    pub fn current(&self) -> GestureFlags {
        GestureFlags {
            spider_active: self.spider_active,
            peace_active: self.peace_active,
        }
    }

    pub fn previous(&self) -> GestureFlags {
        GestureFlags {
            spider_active: self.prev_spider_active,
            peace_active: self.prev_peace_active,
        }
    }

    /// Shift current into previous and store the new flags
    pub fn advance(&mut self, next: GestureFlags) {
        self.prev_spider_active = self.spider_active;
        self.prev_peace_active = self.peace_active;
        self.spider_active = next.spider_active;
        self.peace_active = next.peace_active;
    }
}
