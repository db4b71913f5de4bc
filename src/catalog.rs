//! Token catalog: the closed set of placeable token types and their static
//! attributes.
//!
//! Each [`TokenKind`] maps to exactly one [`TokenType`] record, fixed at
//! compile time. Types that carry a field-of-view cone name a [`FovKind`],
//! whose [`ConeShape`] describes the polygon, reach, and gradient used by the
//! renderer. String tags (as used by palettes and hosts) are resolved through
//! [`lookup`] or `TokenKind::from_str`, which is the only place an unknown
//! type can surface.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// The kind of a placeable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// Show host.
    Host,
    /// Interview guest.
    Guest,
    /// Phone camera with a narrow telephoto cone.
    Iphone,
    /// Main camera with a wide cone.
    Sony,
    /// Key light.
    KeyLight,
    /// Fill light.
    FillLight,
    /// Chair.
    Chair,
    /// Table.
    Table,
}

impl TokenKind {
    /// Every kind, in catalog order.
    pub const ALL: [TokenKind; 8] = [
        Self::Host,
        Self::Guest,
        Self::Iphone,
        Self::Sony,
        Self::KeyLight,
        Self::FillLight,
        Self::Chair,
        Self::Table,
    ];

    /// The static catalog record for this kind.
    #[must_use]
    pub fn spec(self) -> &'static TokenType {
        match self {
            Self::Host => &HOST,
            Self::Guest => &GUEST,
            Self::Iphone => &IPHONE,
            Self::Sony => &SONY,
            Self::KeyLight => &KEY_LIGHT,
            Self::FillLight => &FILL_LIGHT,
            Self::Chair => &CHAIR,
            Self::Table => &TABLE,
        }
    }

    /// Wire/palette tag for this kind (e.g. `"keyLight"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Guest => "guest",
            Self::Iphone => "iphone",
            Self::Sony => "sony",
            Self::KeyLight => "keyLight",
            Self::FillLight => "fillLight",
            Self::Chair => "chair",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TokenKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| PlannerError::UnknownType(s.to_owned()))
    }
}

/// Palette section a token type is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    People,
    Cameras,
    Lights,
    Furniture,
}

impl Group {
    /// Heading shown in front of the group's palette buttons.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Cameras => "Cameras",
            Self::Lights => "Lights",
            Self::Furniture => "Furniture",
        }
    }
}

/// Two-stop diagonal fill for a token box (top-left to bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub from: &'static str,
    pub to: &'static str,
}

impl Fill {
    const fn solid(color: &'static str) -> Self {
        Self { from: color, to: color }
    }

    /// Whether both stops are the same color.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.from == self.to
    }
}

/// Static attributes of a token type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenType {
    pub kind: TokenKind,
    /// Short uppercase label drawn under the icon.
    pub label: &'static str,
    /// Box width in layout units.
    pub width: f64,
    /// Box height in layout units.
    pub height: f64,
    pub fill: Fill,
    /// CSS color for the label and icon.
    pub text_color: &'static str,
    pub group: Group,
    /// Cone geometry, if this type emits a field of view.
    pub field_of_view: Option<FovKind>,
}

impl TokenType {
    /// Whether tokens of this type carry a field-of-view cone.
    #[must_use]
    pub fn has_field_of_view(&self) -> bool {
        self.field_of_view.is_some()
    }

    /// Cone shape for this type, if it has one.
    #[must_use]
    pub fn cone(&self) -> Option<&'static ConeShape> {
        self.field_of_view.map(FovKind::cone)
    }
}

/// Selects a field-of-view cone geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FovKind {
    /// Long, narrow cone.
    Telephoto,
    /// Long, wide cone.
    Wide,
    /// Medium cone for lights.
    Light,
}

impl FovKind {
    /// The static cone shape for this kind.
    #[must_use]
    pub fn cone(self) -> &'static ConeShape {
        match self {
            Self::Telephoto => &TELEPHOTO_CONE,
            Self::Wide => &WIDE_CONE,
            Self::Light => &LIGHT_CONE,
        }
    }
}

/// Cone geometry in a `size` × `size` local frame.
///
/// The first polygon vertex is the apex and sits at the frame center
/// `(size/2, size/2)`, which is placed on the token center. At 0° rotation
/// the cone opens toward +x; the renderer rotates the frame about its center
/// by the token's bearing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeShape {
    /// Side length of the square local frame.
    pub size: f64,
    /// Triangle vertices in local frame coordinates, apex first.
    pub points: [(f64, f64); 3],
    /// Gradient stops at offsets 0, 0.5, and 1 along the opening axis.
    pub gradient: [&'static str; 3],
}

impl ConeShape {
    /// Distance from the apex to the far edge of the frame.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.size / 2.0
    }

    /// Polygon vertices relative to the apex, so the apex is `(0, 0)`.
    #[must_use]
    pub fn points_from_apex(&self) -> [(f64, f64); 3] {
        let half = self.size / 2.0;
        self.points.map(|(x, y)| (x - half, y - half))
    }
}

/// A palette section and the kinds listed in it, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteGroup {
    pub group: Group,
    pub kinds: &'static [TokenKind],
}

/// Resolve a string tag to its catalog record.
///
/// # Errors
///
/// Returns [`PlannerError::UnknownType`] if `tag` names no catalog entry.
pub fn lookup(tag: &str) -> Result<&'static TokenType, PlannerError> {
    tag.parse::<TokenKind>().map(TokenKind::spec)
}

/// The palette layout: people, cameras, lights, furniture.
#[must_use]
pub fn palette() -> &'static [PaletteGroup] {
    &PALETTE
}

// =============================================================
// Static records
// =============================================================

const BRAND_FILL: Fill = Fill { from: "#2A1AFC", to: "#6366f1" };

static HOST: TokenType = TokenType {
    kind: TokenKind::Host,
    label: "HOST",
    width: 70.0,
    height: 70.0,
    fill: BRAND_FILL,
    text_color: "#ffffff",
    group: Group::People,
    field_of_view: None,
};

static GUEST: TokenType = TokenType {
    kind: TokenKind::Guest,
    label: "GUEST",
    width: 70.0,
    height: 70.0,
    fill: Fill { from: "#10b981", to: "#047857" },
    text_color: "#ffffff",
    group: Group::People,
    field_of_view: None,
};

static IPHONE: TokenType = TokenType {
    kind: TokenKind::Iphone,
    label: "iPhone",
    width: 50.0,
    height: 50.0,
    fill: Fill::solid("#ffffff"),
    text_color: "#000000",
    group: Group::Cameras,
    field_of_view: Some(FovKind::Telephoto),
};

static SONY: TokenType = TokenType {
    kind: TokenKind::Sony,
    label: "SONY",
    width: 60.0,
    height: 60.0,
    fill: BRAND_FILL,
    text_color: "#ffffff",
    group: Group::Cameras,
    field_of_view: Some(FovKind::Wide),
};

static KEY_LIGHT: TokenType = TokenType {
    kind: TokenKind::KeyLight,
    label: "KEY",
    width: 50.0,
    height: 50.0,
    fill: Fill::solid("#facc15"),
    text_color: "#000000",
    group: Group::Lights,
    field_of_view: Some(FovKind::Light),
};

static FILL_LIGHT: TokenType = TokenType {
    kind: TokenKind::FillLight,
    label: "FILL",
    width: 50.0,
    height: 50.0,
    fill: Fill::solid("#fde047"),
    text_color: "#000000",
    group: Group::Lights,
    field_of_view: Some(FovKind::Light),
};

static CHAIR: TokenType = TokenType {
    kind: TokenKind::Chair,
    label: "CHAIR",
    width: 70.0,
    height: 70.0,
    fill: Fill { from: "rgba(255, 255, 255, 0.3)", to: "rgba(255, 255, 255, 0.1)" },
    text_color: "#ffffff",
    group: Group::Furniture,
    field_of_view: None,
};

static TABLE: TokenType = TokenType {
    kind: TokenKind::Table,
    label: "TABLE",
    width: 150.0,
    height: 80.0,
    fill: Fill { from: "rgba(255, 255, 255, 0.25)", to: "rgba(255, 255, 255, 0.1)" },
    text_color: "#ffffff",
    group: Group::Furniture,
    field_of_view: None,
};

static TELEPHOTO_CONE: ConeShape = ConeShape {
    size: 250.0,
    points: [(125.0, 125.0), (250.0, 110.0), (250.0, 140.0)],
    gradient: ["rgba(255, 255, 255, 0.6)", "rgba(255, 255, 255, 0.2)", "rgba(255, 255, 255, 0)"],
};

static WIDE_CONE: ConeShape = ConeShape {
    size: 400.0,
    points: [(200.0, 200.0), (400.0, 80.0), (400.0, 320.0)],
    gradient: ["rgba(42, 26, 252, 0.5)", "rgba(99, 102, 241, 0.2)", "rgba(99, 102, 241, 0)"],
};

static LIGHT_CONE: ConeShape = ConeShape {
    size: 300.0,
    points: [(150.0, 150.0), (300.0, 100.0), (300.0, 200.0)],
    gradient: ["rgba(255, 220, 100, 0.5)", "rgba(255, 220, 100, 0.2)", "rgba(255, 220, 100, 0)"],
};

static PALETTE: [PaletteGroup; 4] = [
    PaletteGroup { group: Group::People, kinds: &[TokenKind::Host, TokenKind::Guest] },
    PaletteGroup { group: Group::Cameras, kinds: &[TokenKind::Sony, TokenKind::Iphone] },
    PaletteGroup { group: Group::Lights, kinds: &[TokenKind::KeyLight, TokenKind::FillLight] },
    PaletteGroup { group: Group::Furniture, kinds: &[TokenKind::Chair, TokenKind::Table] },
];
