//! Cpu - CPU Architecture Identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// CPU architecture choices offered by the composer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cpu {
    /// x86-64 class processors
    X86,
    /// POWER class processors
    Power,
    /// ARM class processors
    Arm,
}

impl Cpu {
    /// All selectable options, in the order the select widget lists them
    pub const ALL: [Cpu; 3] = [Cpu::X86, Cpu::Power, Cpu::Arm];

    /// Canonical identifier shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Cpu::X86 => "X86",
            Cpu::Power => "Power",
            Cpu::Arm => "ARM",
        }
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an identifier outside the closed CPU set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCpu(pub String);

impl fmt::Display for UnknownCpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown CPU identifier: {}", self.0)
    }
}

impl std::error::Error for UnknownCpu {}

impl FromStr for Cpu {
    type Err = UnknownCpu;

    // Case-insensitive; the canonical form wins on display.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86" => Ok(Cpu::X86),
            "power" => Ok(Cpu::Power),
            "arm" => Ok(Cpu::Arm),
            _ => Err(UnknownCpu(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_identifiers() {
        assert_eq!("X86".parse::<Cpu>().expect("parse"), Cpu::X86);
        assert_eq!("Power".parse::<Cpu>().expect("parse"), Cpu::Power);
        assert_eq!("ARM".parse::<Cpu>().expect("parse"), Cpu::Arm);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("power".parse::<Cpu>().expect("parse"), Cpu::Power);
        assert_eq!("arm".parse::<Cpu>().expect("parse"), Cpu::Arm);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("RISC-V".parse::<Cpu>().is_err());
        assert!("".parse::<Cpu>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for cpu in Cpu::ALL {
            let rendered = cpu.to_string();
            assert_eq!(rendered.parse::<Cpu>().expect("parse"), cpu);
        }
    }
}
