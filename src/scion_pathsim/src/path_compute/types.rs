use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PathError, Result};

pub const DEFAULT_RESULT_CAP: usize = 5000;
pub const DEFAULT_MAX_DUPLICATES: usize = 3;
pub const DEFAULT_EXTRA_HOPS: usize = 3;

/// How a hop's source AS is located inside a link identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMatch {
    /// Compare the parsed AS field of each `ISD-AS-IFID` half.
    #[default]
    Exact,
    /// Legacy: the source AS is on the second half when its decimal text
    /// occurs anywhere in that half. `1` matches `1-12-3`, so short AS
    /// numbers can be misread.
    Substring,
}

impl FromStr for InterfaceMatch {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "substring" => Ok(Self::Substring),
            other => Err(format!("unknown interface match mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearchOptions {
    /// Hard stop for the simple-path walk.
    pub result_cap: usize,
    /// Copies of one AS sequence kept before link assignment.
    pub max_duplicates: usize,
    /// Hops allowed beyond the shortest hop count.
    pub extra_hops: usize,
    pub interface_match: InterfaceMatch,
}

impl Default for PathSearchOptions {
    fn default() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
            max_duplicates: DEFAULT_MAX_DUPLICATES,
            extra_hops: DEFAULT_EXTRA_HOPS,
            interface_match: InterfaceMatch::Exact,
        }
    }
}

impl PathSearchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.result_cap == 0 {
            return Err(PathError::Configuration(
                "result cap must be positive".to_string(),
            ));
        }
        if self.max_duplicates == 0 {
            return Err(PathError::Configuration(
                "duplicate limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
