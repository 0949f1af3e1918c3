use tracing::info;
use web2md::ExtractionResult;
use web2md_refine::{ChatCompletionsRefiner, Refiner, append_page_info};

use crate::cli::ConvertArgs;
use crate::commands::page::{effective_config, extract_options, extract_page, note_missing_url, page_inputs, write_output};
use crate::delivery::{Notifier, try_copy};
use crate::error::Result;
use crate::output::{ConvertData, DiagnosticLevel, OutputFormat, ResultBuilder, print_result};
use crate::settings::SettingsStore;
use crate::source::{Source, parse_page_json};

pub async fn run(args: ConvertArgs, store: &SettingsStore, format: OutputFormat) -> Result<()> {
	let notifier = Notifier::new(store.settings.show_notifications);
	let outcome = convert(args, store, format, notifier).await;
	if let Err(err) = &outcome {
		notifier.error(&err.notice());
	}
	outcome
}

async fn convert(args: ConvertArgs, store: &SettingsStore, format: OutputFormat, notifier: Notifier) -> Result<()> {
	let settings = &store.settings;
	let mut config = settings.refine_config();
	if let Some(model) = &args.model {
		config = config.with_model(model.as_str());
	}
	if let Some(endpoint) = &args.endpoint {
		config = config.with_endpoint(endpoint.as_str());
	}
	let refiner = ChatCompletionsRefiner::new(config)?;

	let options = extract_options(&args.page, store);
	let page = if args.page_json {
		load_extracted(&args).await?
	} else {
		extract_page(&args.page, &options).await?
	};

	let mut markdown = refiner.refine(&page).await?;
	if settings.append_page_info {
		markdown = append_page_info(&markdown, &page.title, &page.source_url);
	}
	info!(target = "web2md", chars = markdown.len(), "converted page");

	let mut builder = ResultBuilder::new("convert").inputs(page_inputs(&args.page));
	if !args.page_json {
		builder = note_missing_url(builder, &page);
	}
	let mut builder = write_output(builder, args.page.output.as_deref(), &markdown)?;

	let wants_copy = settings.auto_copy && !args.no_copy;
	let copied = try_copy(&markdown, wants_copy);
	if wants_copy && !copied {
		builder = builder.diagnostic_with_source(DiagnosticLevel::Warning, "could not copy to clipboard", "clipboard");
	}
	notifier.converted(copied);

	let mut config = effective_config(store, &options);
	config.model = Some(refiner.config().model.clone());
	config.endpoint = Some(refiner.config().endpoint.clone());
	config.timeout_secs = Some(refiner.config().timeout.as_secs());

	let data = ConvertData {
		title: page.title,
		url: page.source_url,
		model: refiner.config().model.clone(),
		markdown,
		copied,
	};
	print_result(&builder.config(config).data(data).build(), format);
	Ok(())
}

/// Reads a page that was extracted elsewhere. `--url` overrides its URL.
async fn load_extracted(args: &ConvertArgs) -> Result<ExtractionResult> {
	let loaded = Source::parse(&args.page.source).load(None).await?;
	let page = parse_page_json(&loaded.body)?;
	let url = args.page.url.clone().unwrap_or(page.url);
	Ok(ExtractionResult::new(page.title, url, page.content))
}
