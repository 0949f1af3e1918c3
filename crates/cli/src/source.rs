//! Page input: remote URL, local file or stdin.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use url::Url;
use web2md_protocol::{ExtractReply, PageData};

use crate::error::{CliError, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("web2md/", env!("CARGO_PKG_VERSION"));

/// Where page HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
	Url(Url),
	File(PathBuf),
	Stdin,
}

/// Raw page text plus the URL it belongs to (empty when unknown).
#[derive(Debug, Clone)]
pub struct LoadedPage {
	pub body: String,
	pub url: String,
}

impl Source {
	/// `-` is stdin, `http(s)://` is fetched, `file://` and anything else is a
	/// file path.
	pub fn parse(raw: &str) -> Self {
		if raw == "-" {
			return Source::Stdin;
		}
		match Url::parse(raw) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Url(url),
			Ok(url) if url.scheme() == "file" => Source::File(url.to_file_path().unwrap_or_else(|()| PathBuf::from(raw))),
			_ => Source::File(PathBuf::from(raw)),
		}
	}

	/// Reads the source. `url_override` replaces the page URL (the fetched
	/// URL after redirects for remote sources, empty otherwise).
	pub async fn load(&self, url_override: Option<&str>) -> Result<LoadedPage> {
		let (body, url) = match self {
			Source::Url(url) => fetch(url).await?,
			Source::File(path) => {
				debug!(target = "web2md", path = %path.display(), "reading file");
				(tokio::fs::read_to_string(path).await?, String::new())
			}
			Source::Stdin => {
				let mut body = String::new();
				tokio::io::stdin().read_to_string(&mut body).await?;
				(body, String::new())
			}
		};
		let url = url_override.map(str::to_string).unwrap_or(url);
		Ok(LoadedPage { body, url })
	}

	pub fn describe(&self) -> String {
		match self {
			Source::Url(url) => url.to_string(),
			Source::File(path) => path.display().to_string(),
			Source::Stdin => "-".to_string(),
		}
	}
}

async fn fetch(url: &Url) -> Result<(String, String)> {
	let failed = |reason: String| CliError::Fetch {
		url: url.to_string(),
		reason,
	};
	info!(target = "web2md", url = %url, "fetching page");
	let client = reqwest::Client::builder()
		.user_agent(USER_AGENT)
		.timeout(FETCH_TIMEOUT)
		.build()
		.map_err(|err| failed(err.to_string()))?;
	let response = client.get(url.clone()).send().await.map_err(|err| failed(err.to_string()))?;
	let status = response.status();
	if !status.is_success() {
		return Err(failed(format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or_default())));
	}
	let final_url = response.url().to_string();
	let body = response.text().await.map_err(|err| failed(err.to_string()))?;
	debug!(target = "web2md", url = %final_url, bytes = body.len(), "fetched page");
	Ok((body, final_url))
}

/// Decodes an already-extracted page: an extraction reply envelope
/// (`{"success": .., "data": ..}`) or a bare page object.
pub fn parse_page_json(body: &str) -> Result<PageData> {
	let value: serde_json::Value = serde_json::from_str(body)?;
	if value.get("success").is_some() {
		let reply: ExtractReply = serde_json::from_value(value)?;
		return reply.into_result().map_err(CliError::InvalidInput);
	}
	Ok(serde_json::from_value(value)?)
}
