//! Configuration: YAML schema, loading, validation and CLI arguments

pub mod cli;
mod loader;
mod schema;
pub mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, OutputFormat, RunArgs, SimulateArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{EvalSpec, ResamplingSpec, DEFAULT_SEED};
pub use validate::{validate_config, ValidationError};
