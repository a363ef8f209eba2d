// src/factories/computer_factory.rs

use crate::{
    CommonType, Computer, ComputerType, DEFAULT_NODE_COUNT, FactoryError, MachineSpec, TypeTier,
};

/// Factory for constructing [`Computer`] products from type tags.
///
/// The factory pattern takes the choice of concrete variant out of client
/// code: callers hand over a tag string plus attribute values, and the factory
/// alone decides which member of the [`Computer`] family to build. Validation
/// is the tag-to-enum conversion itself: an unrecognized tag fails fast with
/// [`FactoryError::UnrecognizedType`] before any dispatch branch is reached,
/// and never silently falls back to a default variant or an empty result.
#[derive(Debug, Clone)]
pub struct ComputerFactory;

impl ComputerFactory {
    /// Creates a computer from a common-tier type tag.
    ///
    /// # Arguments
    /// * `type_tag` - Type tag, matched case-sensitively against the common
    ///   tier (`PC`, `SERVER`)
    /// * `ram` - Memory size, free-form (e.g. "16 GB")
    /// * `hdd` - Storage size, free-form (e.g. "1 TB")
    /// * `cpu` - Processor speed, free-form (e.g. "2.9 GHz")
    ///
    /// # Returns
    /// * `Ok(Computer)` - The variant matching the tag, carrying exactly the
    ///   given attributes
    /// * `Err(FactoryError)` - The tag is not a member of the common tier
    ///
    /// # Examples
    /// ```
    /// use computer_factory::factories::ComputerFactory;
    ///
    /// let server = ComputerFactory::get_computer("SERVER", "2 GB", "50 GB", "2.4 GHz").unwrap();
    /// assert!(server.is_server());
    /// assert_eq!(server.ram(), "2 GB");
    /// ```
    pub fn get_computer<S: Into<String>>(
        type_tag: &str,
        ram: S,
        hdd: S,
        cpu: S,
    ) -> Result<Computer, FactoryError> {
        let common = CommonType::try_from(type_tag)?;
        let spec = MachineSpec::new(ram, hdd, cpu);

        Ok(match common {
            CommonType::Pc => Computer::Pc(spec),
            CommonType::Server => Computer::Server(spec),
        })
    }

    /// Creates a computer from a tag validated against the selected tier.
    ///
    /// The dispatch below is the single merged table over both tiers'
    /// members, so a common-tier selection still reaches the common products.
    /// `MASTER_BASED_CLUSTER` is a recognized tag with no product defined for
    /// it: that returns `Ok(None)`, a normal outcome distinct from the
    /// unrecognized-tag error.
    ///
    /// # Arguments
    /// * `tier` - Which tier's enumeration `type_tag` is validated against
    /// * `type_tag` - Type tag, matched case-sensitively against `tier`
    /// * `ram` - Memory size, free-form
    /// * `hdd` - Storage size, free-form
    /// * `cpu` - Processor speed, free-form
    /// * `nodes` - Node count for cluster products; `None` means
    ///   [`DEFAULT_NODE_COUNT`]
    ///
    /// # Returns
    /// * `Ok(Some(Computer))` - Constructed product
    /// * `Ok(None)` - Recognized tag with no product defined
    /// * `Err(FactoryError)` - The tag is not a member of the selected tier
    ///
    /// # Examples
    /// ```
    /// use computer_factory::TypeTier;
    /// use computer_factory::factories::ComputerFactory;
    ///
    /// let cluster = ComputerFactory::create_computer(
    ///     TypeTier::Extended,
    ///     "MULTI_NODE_CLUSTER",
    ///     "16 GB",
    ///     "1 TB",
    ///     "2.9 GHz",
    ///     Some(16),
    /// )
    /// .unwrap();
    /// assert_eq!(cluster.unwrap().node_count(), Some(16));
    /// ```
    pub fn create_computer<S: Into<String>>(
        tier: TypeTier,
        type_tag: &str,
        ram: S,
        hdd: S,
        cpu: S,
        nodes: Option<u32>,
    ) -> Result<Option<Computer>, FactoryError> {
        let computer_type = tier.parse(type_tag)?;
        let spec = MachineSpec::new(ram, hdd, cpu);

        Ok(match computer_type {
            ComputerType::Pc => Some(Computer::Pc(spec)),
            ComputerType::Server => Some(Computer::Server(spec)),
            ComputerType::MultiNodeCluster => Some(Computer::MultiNodeSuperComputer {
                spec,
                nodes: nodes.unwrap_or(DEFAULT_NODE_COUNT),
            }),
            ComputerType::MasterBasedCluster => None,
        })
    }
}
