mod args;
mod fetch;
mod params;
mod resolved_command;
mod verify;

pub use args::{Args, Command, parse_args};
pub use fetch::{extract_compressed, run_fetch};
pub use params::{FetchParams, VerifyParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use verify::{run_verify, write_and_validate_manifest};
