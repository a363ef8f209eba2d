use crate::models::{ComputerType, MachineSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node count used when the caller leaves it unspecified.
pub const DEFAULT_NODE_COUNT: u32 = 2;

/// Computer product built by the factory.
///
/// This is a pure data structure with no business logic. Selection and
/// construction rules live in the factory; a value is immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Computer {
    Pc(MachineSpec),
    Server(MachineSpec),
    MultiNodeSuperComputer { spec: MachineSpec, nodes: u32 },
}

impl Computer {
    /// Returns the shared hardware attributes.
    pub fn spec(&self) -> &MachineSpec {
        match self {
            Self::Pc(spec) | Self::Server(spec) => spec,
            Self::MultiNodeSuperComputer { spec, .. } => spec,
        }
    }

    /// Returns memory size.
    pub fn ram(&self) -> &str {
        &self.spec().ram
    }

    /// Returns storage size.
    pub fn hdd(&self) -> &str {
        &self.spec().hdd
    }

    /// Returns processor speed.
    pub fn cpu(&self) -> &str {
        &self.spec().cpu
    }

    /// Returns the node count for the cluster variant.
    pub fn node_count(&self) -> Option<u32> {
        match self {
            Self::MultiNodeSuperComputer { nodes, .. } => Some(*nodes),
            Self::Pc(_) | Self::Server(_) => None,
        }
    }

    /// Returns the registry member this product corresponds to.
    pub fn computer_type(&self) -> ComputerType {
        match self {
            Self::Pc(_) => ComputerType::Pc,
            Self::Server(_) => ComputerType::Server,
            Self::MultiNodeSuperComputer { .. } => ComputerType::MultiNodeCluster,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Pc(_) => "PC",
            Self::Server(_) => "Server",
            Self::MultiNodeSuperComputer { .. } => "MultiNodeSuperComputer",
        }
    }

    pub fn is_pc(&self) -> bool {
        matches!(self, Self::Pc(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, Self::MultiNodeSuperComputer { .. })
    }
}

impl fmt::Display for Computer {
    // Shared fields first, then variant-specific fields appended.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.variant_name(), self.spec())?;
        if let Some(nodes) = self.node_count() {
            write!(f, ", {} nodes", nodes)?;
        }
        write!(f, ")")
    }
}
