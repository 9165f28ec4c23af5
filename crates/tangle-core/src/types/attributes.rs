//! Display and semantic attributes carried by edges

use serde::{Deserialize, Serialize};
use crate::constants::DEFAULT_EDGE_WEIGHT;

/// Orientation of an edge relative to its two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `node[0] -> node[1]`
    Forward,
    /// `node[1] -> node[0]`
    Backward,
    /// No orientation
    #[default]
    Undirected,
}

impl Direction {
    /// The same edge read from the other endpoint
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Undirected => Direction::Undirected,
        }
    }

    /// True unless undirected
    pub fn is_directed(self) -> bool {
        self != Direction::Undirected
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black, the default edge colour
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Attributes requested when creating an edge
///
/// Ignored when the edge already exists: dedup returns the existing edge
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Edge orientation
    #[serde(default)]
    pub direction: Direction,
    /// Free-form name
    #[serde(default)]
    pub name: String,
    /// Numeric weight
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Display colour
    #[serde(default)]
    pub color: Rgb,
}

fn default_weight() -> f64 { DEFAULT_EDGE_WEIGHT }

impl Default for EdgeAttributes {
    fn default() -> Self {
        Self {
            direction: Direction::Undirected,
            name: String::new(),
            weight: DEFAULT_EDGE_WEIGHT,
            color: Rgb::BLACK,
        }
    }
}

impl EdgeAttributes {
    /// Set the orientation
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the colour
    pub fn with_color(mut self, color: impl Into<Rgb>) -> Self {
        self.color = color.into();
        self
    }
}
