//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` enables info and `-vv` debug for
/// web2md's own targets, with warnings from everything else.
pub fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn default_directive(verbose: u8) -> &'static str {
	match verbose {
		0 => "warn",
		1 => "warn,web2md=info",
		_ => "warn,web2md=debug",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_web2md_level() {
		assert_eq!(default_directive(0), "warn");
		assert_eq!(default_directive(1), "warn,web2md=info");
		assert_eq!(default_directive(5), "warn,web2md=debug");
	}
}
