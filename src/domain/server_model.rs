//! ServerModel - Server Model Categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server model categories a configuration can match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerModel {
    /// GPU-accelerated ARM systems with very large memory
    HighDensity,
    /// General-purpose tower systems
    Tower,
    /// 4U rack-mount systems
    Rack,
    /// POWER-based mainframe systems
    Mainframe,
}

impl ServerModel {
    /// Display name shown in the result list
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerModel::HighDensity => "High Density Server",
            ServerModel::Tower => "Tower Server",
            ServerModel::Rack => "4U Rack Server",
            ServerModel::Mainframe => "Mainframe",
        }
    }
}

impl fmt::Display for ServerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
