//! Command implementations.
//!
//! Each command resolves the unit tree of the context directory and renders
//! the result to a string; printing is left to `main`.

use crate::cli::{Cli, Command, OutputFormat};
use bp_core::{read_all_units, resolve_target, UnitGraph, UnitId};
use bp_protocol::summary_models::UnitSummary;
use color_eyre::eyre::Result;
use colored::Colorize;
use std::fmt::Write;
use tracing::info;

/// Runs the selected command and returns what should be printed.
pub fn execute(cli: &Cli) -> Result<String> {
    let context = match &cli.context {
        Some(context) => context.clone(),
        None => std::env::current_dir()?,
    };
    let options = cli.resolver_options();

    match &cli.command {
        Command::List { format } => {
            let graph = read_all_units(&context, &options)?;
            render_list(&graph, *format)
        }
        Command::Plan { target, format } => {
            let (target, graph) = resolve_target(&context, target.as_deref(), &options)?;
            info!(target = graph.unit(target).name(), "Planning");
            render_plan(&graph, target, *format)
        }
        Command::Show { name } => {
            let (target, graph) = resolve_target(&context, Some(name.as_str()), &options)?;
            render_show(&graph, target)
        }
    }
}

/// One line per unit: `name [root] -> dependencies`. Unresolved names end with `?`.
pub fn render_list(graph: &UnitGraph, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let summaries: Vec<UnitSummary> = graph.iter().map(|(id, _)| graph.summary(id)).collect();
        return Ok(serde_json::to_string_pretty(&summaries)? + "\n");
    }

    let mut out = String::new();
    for (id, unit) in graph.iter() {
        write!(out, "{}", unit.name().bold())?;
        if unit.is_root() {
            write!(out, " {}", "(root)".dimmed())?;
        }

        let dependencies: Vec<String> = graph
            .links(id)
            .iter()
            .map(|link| {
                if link.is_resolved() {
                    link.name.clone()
                } else {
                    format!("{}?", link.name).yellow().to_string()
                }
            })
            .collect();
        if !dependencies.is_empty() {
            write!(out, " -> {}", dependencies.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// Numbered processing steps, dependencies first and the target last.
pub fn render_plan(graph: &UnitGraph, target: UnitId, format: OutputFormat) -> Result<String> {
    let plan = graph.build_plan(target)?;

    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&plan)? + "\n");
    }

    let mut out = String::new();
    for (step, name) in plan.steps().enumerate() {
        writeln!(out, "{}. {name}", step + 1)?;
    }
    Ok(out)
}

pub fn render_show(graph: &UnitGraph, id: UnitId) -> Result<String> {
    let unit = graph.unit(id);
    let summary = graph.summary(id);
    let mut out = String::new();

    writeln!(out, "{}", unit.name().bold())?;
    writeln!(out, "  kind:         {}", unit.kind())?;
    writeln!(out, "  location:     {}", unit.location().display())?;
    if let Some(python) = unit.python() {
        writeln!(out, "  python:       {python}")?;
    }
    if !unit.requirements().is_empty() {
        let names: Vec<&str> = unit.requirements().keys().map(String::as_str).collect();
        writeln!(out, "  requirements: {}", names.join(", "))?;
    }
    writeln!(out, "  dependencies: {}", join_or_dash(&summary.resolved))?;
    if !summary.unresolved.is_empty() {
        writeln!(out, "  unresolved:   {}", summary.unresolved.join(", ").yellow())?;
    }

    let dependents: Vec<String> = graph.dependents(id).map(|u| u.name().to_string()).collect();
    writeln!(out, "  dependents:   {}", join_or_dash(&dependents))?;
    if !summary.group.is_empty() {
        writeln!(out, "  group:        {}", summary.group.join(", "))?;
    }
    if let Some(root) = unit.root_context() {
        writeln!(out, "  root context: {}", root.display())?;
    }
    Ok(out)
}

fn join_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
