use thiserror::Error;

use crate::models::TypeTier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unrecognized computer type `{tag}` in the {tier} tier. Expected one of: {}", .tier.tag_list())]
    UnrecognizedType { tag: String, tier: TypeTier },
}

impl FactoryError {
    pub fn unrecognized<S: Into<String>>(tag: S, tier: TypeTier) -> Self {
        Self::UnrecognizedType {
            tag: tag.into(),
            tier,
        }
    }
}
