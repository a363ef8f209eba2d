// src/factories/mod.rs

mod computer_factory;

pub use computer_factory::ComputerFactory;
