//! Command dispatch and handlers

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, RenderArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{parse_definition, DomainError, Element, ElementBuilder, ElementRef};

/// Execute a CLI command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        output::disable_colors();
    }

    match &cli.command {
        Some(Commands::Demo) => cmd_demo(),
        Some(Commands::Build {
            root,
            children,
            render,
        }) => cmd_build(&settings, root, children, render),
        Some(Commands::Render { file, render }) => cmd_render(&settings, file, render),
        Some(Commands::Info) => cmd_info(&settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Split `name=text` into its parts; a bare `name` has empty text.
pub fn parse_child_spec(spec: &str) -> CliResult<(String, String)> {
    let (name, text) = spec.split_once('=').unwrap_or((spec, ""));
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgs(format!(
            "child needs a name: '{}'",
            spec
        )));
    }
    Ok((name.to_string(), text.to_string()))
}

/// Format and indent from settings, with command-line overrides applied.
fn resolve_render(settings: &Settings, args: &RenderArgs) -> CliResult<(OutputFormat, usize)> {
    let format = args.format.unwrap_or(settings.format);
    let indent = args.indent.unwrap_or(settings.indent_width);
    if indent == 0 {
        return Err(CliError::InvalidArgs("indent must be at least 1".into()));
    }
    Ok((format, indent))
}

/// Text written to stdout for `element` in the given format.
pub fn render_output(element: &Element, format: OutputFormat, indent: usize) -> String {
    match format {
        OutputFormat::Markup => element.render_with_indent(indent),
        OutputFormat::Tree => element.to_tree().to_string(),
    }
}

/// One-level tree under `root` from `name=text` child specs.
pub fn build_element(root: &str, children: &[String]) -> CliResult<Element> {
    let mut builder = Element::builder(root);
    for spec in children {
        let (name, text) = parse_child_spec(spec)?;
        builder.add_child_fluent(name, text);
    }
    debug!("built {} children under {}", builder.len(), root);
    Ok(builder.into_element())
}

/// Read and parse a tree definition file.
pub fn load_definition(file: &Path) -> CliResult<Element> {
    let content = std::fs::read_to_string(file).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::from(DomainError::FileNotFound(file.to_path_buf())),
        _ => CliError::io(format!("read {}", file.display()), e),
    })?;
    Ok(parse_definition(&content, file)?)
}

#[instrument(skip(settings))]
fn cmd_build(
    settings: &Settings,
    root: &str,
    children: &[String],
    render: &RenderArgs,
) -> CliResult<()> {
    let (format, indent) = resolve_render(settings, render)?;
    let element = build_element(root, children)?;
    output::raw(&render_output(&element, format, indent));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_render(settings: &Settings, file: &Path, render: &RenderArgs) -> CliResult<()> {
    let (format, indent) = resolve_render(settings, render)?;
    let element = load_definition(file)?;
    output::raw(&render_output(&element, format, indent));
    Ok(())
}

fn cmd_demo() -> CliResult<()> {
    output::header("Plain builder");
    let mut builder = ElementBuilder::new("ul");
    builder.add_child("li", "hello");
    builder.add_child("li", "world");
    output::raw(&builder.render());

    output::header("Fluent builder");
    let mut fluent = Element::builder("ul");
    fluent
        .add_child_fluent("li", "hello")
        .add_child_fluent("li", "world");
    output::raw(&fluent.render());

    output::header("Conversion");
    let handle = ElementRef::from(&fluent);
    output::raw(&handle.borrow().render());

    output::header("Clear");
    fluent.clear();
    output::action("builder", "after clear");
    output::raw(&fluent.render());
    output::action("earlier handle", "unchanged");
    output::raw(&handle.borrow().render());

    Ok(())
}

fn cmd_info(settings: &Settings) -> CliResult<()> {
    output::action("version", &env!("CARGO_PKG_VERSION"));
    match global_config_path() {
        Some(path) => output::action("global config", &path.display()),
        None => output::action("global config", &"<unavailable>"),
    }
    output::header("Settings");
    for line in settings.to_toml()?.lines() {
        output::detail(&line);
    }
    Ok(())
}
