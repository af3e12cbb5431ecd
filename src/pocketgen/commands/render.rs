use crate::commands::{CmdMessage, CmdResult};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::model::CommandRequest;
use tracing::debug;

pub fn run(config: &PipelineConfig, request: &CommandRequest) -> Result<CmdResult> {
    let input = request.validate()?;
    let mut result = CmdResult::default();

    let Some(input) = input else {
        debug!("no input given, nothing to render");
        result.add_message(CmdMessage::info(
            "No input given: set an input directory or a dataset file",
        ));
        return Ok(result);
    };

    let model = if request.predictor.takes_model() {
        request.model()?
    } else {
        if let Some(model) = &request.model {
            result.add_message(CmdMessage::warning(format!(
                "Ignoring model {}: {} does not take a model",
                model, request.predictor
            )));
        }
        None
    };
    if request.output_dir.is_empty() {
        result.add_message(CmdMessage::warning("No output directory given"));
    }

    let invocation = Invocation::for_request(config, request, &input, model);
    debug!(command = %invocation, "rendered pipeline command");
    Ok(result.with_invocation(Some(invocation)))
}
