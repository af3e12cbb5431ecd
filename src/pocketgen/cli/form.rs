//! Interactive form: the five fields, in order, on the terminal.
//!
//! The model selector only appears for P2Rank with a dataset file. The
//! rendered command is always shown before the run confirmation, and the
//! confirmation defaults to "no".

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use pocketgen::error::{PocketError, Result};
use pocketgen::model::{CommandRequest, FormFields, Model, Predictor};

fn prompt_error(e: dialoguer::Error) -> PocketError {
    PocketError::Prompt(e.to_string())
}

fn text(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

/// Index of `predictor` among the selector items.
fn predictor_index(predictor: Predictor) -> usize {
    Predictor::ALL
        .iter()
        .position(|p| *p == predictor)
        .unwrap_or(0)
}

/// Selector items for the model field: the empty choice first.
fn model_items() -> Vec<&'static str> {
    std::iter::once("")
        .chain(Model::ALL.iter().map(Model::as_str))
        .collect()
}

pub fn collect_fields(default_predictor: Predictor) -> Result<FormFields> {
    let theme = ColorfulTheme::default();

    let input_dir = text(&theme, "input_dir - Input directory (path to input PDB files)")?;
    let input_ds = text(&theme, "input_ds - Dataset file (path to dataset file)")?;
    let output_dir = text(
        &theme,
        "output_dir - Output directory (path to save pocket predictions)",
    )?;

    let predictor_names: Vec<&str> = Predictor::ALL.iter().map(Predictor::as_str).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("predictor")
        .items(&predictor_names)
        .default(predictor_index(default_predictor))
        .interact()
        .map_err(prompt_error)?;

    let mut fields = FormFields {
        input_dir,
        input_ds,
        output_dir,
        predictor: Predictor::ALL[choice],
        model: String::new(),
    };

    if CommandRequest::from_fields(&fields).model_is_solicited() {
        let items = model_items();
        let choice = Select::with_theme(&theme)
            .with_prompt("model (optional)")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        fields.model = items[choice].to_string();
    }

    Ok(fields)
}

pub fn confirm_run() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Run this command?")
        .default(false)
        .interact()
        .map_err(prompt_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_items_start_with_empty_choice() {
        assert_eq!(model_items(), vec!["", "Alphafold"]);
    }

    #[test]
    fn test_predictor_index_matches_selector_order() {
        assert_eq!(predictor_index(Predictor::P2Rank), 0);
        assert_eq!(predictor_index(Predictor::Fpocket), 1);
    }
}
