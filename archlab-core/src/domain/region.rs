//! The two-region topology every scenario runs on.

use serde::{Deserialize, Serialize};

/// Which region is serving traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Primary,
    Secondary,
}

impl Region {
    /// AWS-style region name used on dashboards.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "us-east-1",
            Self::Secondary => "us-west-2",
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
