mod convert;
mod extract;
mod page;
mod settings;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::output::print_failure;
use crate::settings::{SettingsStore, resolve_path};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let mut store = SettingsStore::load(resolve_path(cli.settings.as_deref()));
	let format = cli.format;

	let (command, outcome) = match cli.command {
		Commands::Extract(args) => ("extract", extract::run(args, &store, format).await),
		Commands::Convert(args) => ("convert", convert::run(args, &store, format).await),
		Commands::Settings { action } => (settings::command_name(&action), settings::run(action, &mut store, format).await),
	};

	if let Err(err) = &outcome {
		if format.is_structured() {
			print_failure(command, err.code(), &err.to_string(), format);
		}
	}
	outcome
}
