use serde::{Deserialize, Serialize};
use std::fmt;

/// The three attributes every product carries. Free-form descriptive strings,
/// stored exactly as supplied and never parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MachineSpec {
    pub ram: String,
    pub hdd: String,
    pub cpu: String,
}

impl MachineSpec {
    pub fn new<S: Into<String>>(ram: S, hdd: S, cpu: S) -> Self {
        Self {
            ram: ram.into(),
            hdd: hdd.into(),
            cpu: cpu.into(),
        }
    }
}

impl fmt::Display for MachineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAM {}, HDD {}, CPU {}", self.ram, self.hdd, self.cpu)
    }
}
