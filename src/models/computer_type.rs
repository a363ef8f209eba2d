use crate::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tags accepted by the basic factory: the common tier as its own
/// narrow enum, so a value of this type is always dispatchable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonType {
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "SERVER")]
    Server,
}

impl CommonType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Server => "SERVER",
        }
    }
}

impl fmt::Display for CommonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl TryFrom<&str> for CommonType {
    type Error = FactoryError;

    // Tags are matched case-sensitively; the conversion is the validation step.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PC" => Ok(Self::Pc),
            "SERVER" => Ok(Self::Server),
            _ => Err(FactoryError::unrecognized(value, TypeTier::Common)),
        }
    }
}

impl From<CommonType> for ComputerType {
    fn from(common: CommonType) -> Self {
        match common {
            CommonType::Pc => Self::Pc,
            CommonType::Server => Self::Server,
        }
    }
}

/// Every recognized type tag across both tiers, flattened into one closed set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputerType {
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "SERVER")]
    Server,
    #[serde(rename = "MASTER_BASED_CLUSTER")]
    MasterBasedCluster,
    #[serde(rename = "MULTI_NODE_CLUSTER")]
    MultiNodeCluster,
}

impl ComputerType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Server => "SERVER",
            Self::MasterBasedCluster => "MASTER_BASED_CLUSTER",
            Self::MultiNodeCluster => "MULTI_NODE_CLUSTER",
        }
    }

    pub fn tier(&self) -> TypeTier {
        match self {
            Self::Pc | Self::Server => TypeTier::Common,
            Self::MasterBasedCluster | Self::MultiNodeCluster => TypeTier::Extended,
        }
    }

    pub fn is_common(&self) -> bool {
        matches!(self.tier(), TypeTier::Common)
    }

    pub fn is_extended(&self) -> bool {
        matches!(self.tier(), TypeTier::Extended)
    }
}

impl fmt::Display for ComputerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Selector for which tier's enumeration a tag is validated against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTier {
    #[serde(rename = "common")]
    Common,
    #[serde(rename = "extended")]
    Extended,
}

impl TypeTier {
    pub fn members(&self) -> &'static [ComputerType] {
        match self {
            Self::Common => &[ComputerType::Pc, ComputerType::Server],
            Self::Extended => &[
                ComputerType::MasterBasedCluster,
                ComputerType::MultiNodeCluster,
            ],
        }
    }

    pub fn contains(&self, computer_type: ComputerType) -> bool {
        computer_type.tier() == *self
    }

    /// Converts a tag to the member of this tier's enumeration.
    ///
    /// Fails for any tag that is not a member of this tier, including tags
    /// that belong only to the other tier.
    pub fn parse(&self, tag: &str) -> Result<ComputerType, FactoryError> {
        self.members()
            .iter()
            .copied()
            .find(|member| member.tag() == tag)
            .ok_or_else(|| FactoryError::unrecognized(tag, *self))
    }

    pub fn tag_list(&self) -> String {
        self.members()
            .iter()
            .map(|member| member.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TypeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Extended => write!(f, "extended"),
        }
    }
}
