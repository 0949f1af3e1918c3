use chrono::Utc;
use tracing::info;
use web2md_refine::ChatCompletionsRefiner;

use crate::cli::SettingsAction;
use crate::error::{CliError, Result};
use crate::output::{ArtifactType, ConnectionData, ModelsData, OutputFormat, ResultBuilder, SettingsData, print_result};
use crate::settings::{Settings, SettingsStore};

pub fn command_name(action: &SettingsAction) -> &'static str {
	match action {
		SettingsAction::Show => "settings.show",
		SettingsAction::Set { .. } => "settings.set",
		SettingsAction::Reset => "settings.reset",
		SettingsAction::Models => "settings.models",
		SettingsAction::Forget { .. } => "settings.forget",
		SettingsAction::Test => "settings.test",
	}
}

pub async fn run(action: SettingsAction, store: &mut SettingsStore, format: OutputFormat) -> Result<()> {
	let command = command_name(&action);
	match action {
		SettingsAction::Show => {
			let data = settings_data(store)?;
			print_result(&ResultBuilder::new(command).data(data).build(), format);
		}
		SettingsAction::Set { key, value } => {
			let name = store.settings.set(&key, &value)?;
			store.settings.record_model(Utc::now().timestamp_millis());
			store.save()?;
			info!(target = "web2md", setting = name, "updated setting");
			emit_saved(command, store, format)?;
		}
		SettingsAction::Reset => {
			store.settings = Settings::default();
			store.save()?;
			emit_saved(command, store, format)?;
		}
		SettingsAction::Models => {
			let data = ModelsData {
				current: store.settings.llm_model.clone(),
				models: store.settings.model_history.clone(),
			};
			print_result(&ResultBuilder::new(command).data(data).build(), format);
		}
		SettingsAction::Forget { model } => {
			if !store.settings.forget_model(&model) {
				return Err(CliError::InvalidInput(format!("model {model:?} is not in the history")));
			}
			store.save()?;
			let data = ModelsData {
				current: store.settings.llm_model.clone(),
				models: store.settings.model_history.clone(),
			};
			print_result(&ResultBuilder::new(command).data(data).build(), format);
		}
		SettingsAction::Test => {
			let refiner = ChatCompletionsRefiner::new(store.settings.refine_config())?;
			refiner.test_connection().await?;
			let data = ConnectionData {
				model: refiner.config().model.clone(),
				endpoint: refiner.config().endpoint.clone(),
			};
			print_result(&ResultBuilder::new(command).data(data).build(), format);
		}
	}
	Ok(())
}

fn settings_data(store: &SettingsStore) -> Result<SettingsData> {
	Ok(SettingsData {
		path: store.path().to_path_buf(),
		settings: store.settings.redacted()?,
	})
}

fn emit_saved(command: &str, store: &SettingsStore, format: OutputFormat) -> Result<()> {
	let data = settings_data(store)?;
	let result = ResultBuilder::new(command).artifact(ArtifactType::Settings, store.path(), None).data(data).build();
	print_result(&result, format);
	Ok(())
}
