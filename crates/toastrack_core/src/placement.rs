//! Toast region placement
//!
//! Six anchor points, named `<horizontal>-<vertical>` the same way the
//! configuration surface spells them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToastError;

/// Where the toast region is anchored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Placement {
    #[default]
    RightBottom,
    LeftBottom,
    CenterBottom,
    RightTop,
    LeftTop,
    CenterTop,
}

/// Axis along which a toast can be swiped away
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    X,
    Y,
}

impl Placement {
    pub const ALL: [Placement; 6] = [
        Placement::RightBottom,
        Placement::LeftBottom,
        Placement::CenterBottom,
        Placement::RightTop,
        Placement::LeftTop,
        Placement::CenterTop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::RightBottom => "right-bottom",
            Placement::LeftBottom => "left-bottom",
            Placement::CenterBottom => "center-bottom",
            Placement::RightTop => "right-top",
            Placement::LeftTop => "left-top",
            Placement::CenterTop => "center-top",
        }
    }

    /// Parse a placement, falling back to the default on unknown input
    pub fn parse_or_default(value: &str) -> Self {
        match value.parse() {
            Ok(placement) => placement,
            Err(err) => {
                tracing::warn!("{err}; falling back to {}", Placement::default());
                Placement::default()
            }
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Placement::RightTop | Placement::LeftTop | Placement::CenterTop
        )
    }

    pub fn is_bottom(&self) -> bool {
        !self.is_top()
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Placement::RightTop | Placement::RightBottom)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Placement::LeftTop | Placement::LeftBottom)
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Placement::CenterTop | Placement::CenterBottom)
    }

    /// Swipe axis: vertical for centered regions, horizontal otherwise
    pub fn drag_axis(&self) -> DragAxis {
        if self.is_center() {
            DragAxis::Y
        } else {
            DragAxis::X
        }
    }

    /// Narrow viewports collapse every placement to the centered one on the same edge
    pub fn compact(&self) -> Self {
        if self.is_top() {
            Placement::CenterTop
        } else {
            Placement::CenterBottom
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ToastError::InvalidPlacement(s.to_string()))
    }
}

impl From<String> for Placement {
    fn from(value: String) -> Self {
        Placement::parse_or_default(&value)
    }
}

impl From<Placement> for String {
    fn from(value: Placement) -> Self {
        value.as_str().to_string()
    }
}
