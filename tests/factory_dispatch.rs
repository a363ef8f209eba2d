//! Integration tests for the factory entry points.
//!
//! These drive the same call sequence as the demonstration binary and pin the
//! end-to-end contract through the public API only: tag in,
//! attribute-faithful product out.

use computer_factory::factories::ComputerFactory;
use computer_factory::{Computer, FactoryError, MachineSpec, TypeTier};

/// Test: the canonical end-to-end example.
#[test]
fn test_server_tag_end_to_end() {
    let server = ComputerFactory::get_computer("SERVER", "2 GB", "50 GB", "2.4 GHz").unwrap();

    assert_eq!(
        server,
        Computer::Server(MachineSpec::new("2 GB", "50 GB", "2.4 GHz"))
    );
    assert_eq!(server.ram(), "2 GB");
    assert_eq!(server.hdd(), "50 GB");
    assert_eq!(server.cpu(), "2.4 GHz");
}

/// Test: the full demonstration sequence and its renderings.
#[test]
fn test_demonstration_sequence() {
    let server = ComputerFactory::get_computer("SERVER", "2 GB", "50 GB", "2.4 GHz").unwrap();
    assert_eq!(server.to_string(), "Server (RAM 2 GB, HDD 50 GB, CPU 2.4 GHz)");

    let pc = ComputerFactory::get_computer("PC", "16 GB", "1 TB", "2.9 GHz").unwrap();
    assert_eq!(pc.to_string(), "PC (RAM 16 GB, HDD 1 TB, CPU 2.9 GHz)");

    let cluster = ComputerFactory::create_computer(
        TypeTier::Extended,
        "MULTI_NODE_CLUSTER",
        "16 GB",
        "1 TB",
        "2.9 GHz",
        Some(16),
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        cluster.to_string(),
        "MultiNodeSuperComputer (RAM 16 GB, HDD 1 TB, CPU 2.9 GHz, 16 nodes)"
    );
}

/// Test: a recognized tag without a product and an unrecognized tag are
/// different outcomes, `Ok(None)` versus `Err`.
#[test]
fn test_absent_product_is_not_an_error() {
    let absent = ComputerFactory::create_computer(
        TypeTier::Extended,
        "MASTER_BASED_CLUSTER",
        "2 GB",
        "50 GB",
        "2.4 GHz",
        None,
    );
    assert_eq!(absent, Ok(None));

    let unrecognized = ComputerFactory::create_computer(
        TypeTier::Extended,
        "MAINFRAME",
        "2 GB",
        "50 GB",
        "2.4 GHz",
        None,
    );
    assert_eq!(
        unrecognized,
        Err(FactoryError::unrecognized("MAINFRAME", TypeTier::Extended))
    );
}

/// Test: the unrecognized-tag error renders the tier's expected tags.
#[test]
fn test_error_rendering_lists_expected_tags() {
    let err = ComputerFactory::get_computer("MAINFRAME", "2 GB", "50 GB", "2.4 GHz").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unrecognized computer type `MAINFRAME` in the common tier. Expected one of: PC, SERVER"
    );
}
