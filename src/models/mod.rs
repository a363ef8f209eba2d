pub mod computer_type;
pub mod machine_spec;

pub use computer_type::*;
pub use machine_spec::*;
