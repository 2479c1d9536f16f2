use anyhow::Result;

use ogm_release::config::load_or_default;
use ogm_release::presentation::{create_assemble_use_case, resolve_options, Cli};
use ogm_release::{AssembleEventSink, AssembleResult, ConsoleEventSink, JsonEventSink};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub fn cmd_assemble(cli: &Cli, ui: &UiContext) -> Result<AssembleResult> {
    let (config, warnings) = load_or_default(cli.config.as_deref())?;
    print_config_warnings(&warnings, ui);

    let options = resolve_options(cli, &config);
    let sink: Box<dyn AssembleEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui.verbose, ui.color, ui.unicode))
    };

    let use_case = create_assemble_use_case();
    let result = use_case.execute_with_events(&options, sink.as_ref())?;
    Ok(result)
}
