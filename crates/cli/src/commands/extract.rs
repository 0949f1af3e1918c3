use crate::cli::ExtractArgs;
use crate::commands::page::{effective_config, extract_options, extract_page, note_missing_url, page_data, page_inputs, write_output};
use crate::delivery::try_copy;
use crate::error::Result;
use crate::output::{DiagnosticLevel, ExtractData, OutputFormat, ResultBuilder, print_result};
use crate::settings::SettingsStore;

pub async fn run(args: ExtractArgs, store: &SettingsStore, format: OutputFormat) -> Result<()> {
	let options = extract_options(&args.page, store);
	let page = extract_page(&args.page, &options).await?;

	let builder = ResultBuilder::new("extract").inputs(page_inputs(&args.page)).config(effective_config(store, &options));
	let builder = note_missing_url(builder, &page);
	let mut builder = write_output(builder, args.page.output.as_deref(), &page.content)?;

	let copied = try_copy(&page.content, args.copy);
	if args.copy && !copied {
		builder = builder.diagnostic_with_source(DiagnosticLevel::Warning, "could not copy to clipboard", "clipboard");
	}

	let data = ExtractData {
		page: page_data(&page),
		include_images: options.include_images,
		copied,
	};
	print_result(&builder.data(data).build(), format);
	Ok(())
}
