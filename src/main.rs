//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use snowfall::{init_logging, mount_when_ready};

fn main() {
	init_logging();
	mount_when_ready();
}
