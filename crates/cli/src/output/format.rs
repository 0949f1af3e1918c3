use clap::ValueEnum;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Plain markdown (or a readable summary for non-markdown commands)
	#[default]
	Text,
	/// JSON envelope
	Json,
	/// Single-line JSON envelope
	Ndjson,
	/// TOON envelope (token-efficient for LLMs)
	Toon,
}

impl OutputFormat {
	/// Whether results are printed as a structured envelope.
	pub fn is_structured(self) -> bool {
		self != OutputFormat::Text
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
			OutputFormat::Toon => write!(f, "toon"),
		}
	}
}
