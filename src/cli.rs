//! Minimal CLI: load descriptors → (describe | names)
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use gql_typemap::{Classification, Type};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// classify host type descriptors (JSON) the way the GraphQL schema generator sees them
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the full classification of each descriptor as JSON
    Describe(DescribeOut),
    /// print one line per descriptor: schema name and flattened union members
    Names(NamesOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more descriptor files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// worker threads used to load descriptors (rayon default if omitted)
    #[arg(long, short)]
    jobs: Option<usize>,
}

#[derive(clap::Parser, Debug)]
struct DescribeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct NamesOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Serialize, Debug)]
struct Described {
    file: PathBuf,
    #[serde(flatten)]
    classification: Classification,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Load every input, in input order. The first failure aborts.
    fn load_all(&self) -> anyhow::Result<Vec<(PathBuf, Type)>> {
        let source_paths = gql_typemap::descriptor::resolve_inputs(&self.input)
            .context("failed to resolve input file paths")?;
        tracing::debug!(files = source_paths.len(), "resolved inputs");

        let load = || {
            source_paths
                .par_iter()
                .map(|path| -> anyhow::Result<(PathBuf, Type)> {
                    let ty = gql_typemap::descriptor::load_file(path)?;
                    Ok((path.clone(), ty))
                })
                .collect::<anyhow::Result<Vec<_>>>()
        };

        match self.jobs {
            None => load(),
            Some(jobs) => rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("failed to build worker pool")?
                .install(load),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Describe(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let described = target
                    .input_settings
                    .load_all()?
                    .into_iter()
                    .map(|(file, ty)| Described {
                        classification: gql_typemap::classify(&ty),
                        file,
                    })
                    .collect::<Vec<_>>();
                let out_src = serde_json::to_string_pretty(&described)?;
                write_or_print(target.out.as_deref(), &out_src)
            }
            Command::Names(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                match target.color {
                    ColorChoice::Auto => {}
                    ColorChoice::Always => colored::control::set_override(true),
                    ColorChoice::Never => colored::control::set_override(false),
                }

                for (file, ty) in target.input_settings.load_all()? {
                    println!("{}", names_line(&file, &ty));
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn names_line(file: &Path, ty: &Type) -> String {
    let name = gql_typemap::type_name_from_type(ty);
    let mut line = format!("{} {} {}", file.display().to_string().dimmed(), name.bold(), ty.kind_label().cyan());
    if ty.as_union().is_some() {
        let members = gql_typemap::member_types(ty)
            .into_iter()
            .map(gql_typemap::type_name_from_type)
            .collect::<Vec<_>>()
            .join(" | ");
        line.push_str(&format!(" = {members}"));
    }
    if gql_typemap::is_returning_error_or_nil(ty) {
        line.push_str(&format!(" {}", "(error/nil)".yellow()));
    }
    line
}

fn write_or_print(out: Option<&Path>, src: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
        }
        None => println!("{src}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_lists_members_and_outcome() {
        colored::control::set_override(false);
        let ty = Type::union("m:Search", vec![Type::named("Person"), Type::named("Book"), Type::Null]);
        let line = names_line(Path::new("search.json"), &ty);
        assert_eq!(line, "search.json Search union = Person | Book (error/nil)");
    }

    #[test]
    fn cli_parses_globbed_inputs() {
        let cli = CommandLineInterface::parse_from(["gql-typemap", "names", "-i", "a.json", "types/*.json", "--color", "never"]);
        match cli.cmd {
            Command::Names(target) => {
                assert_eq!(target.input_settings.input, ["a.json", "types/*.json"]);
                assert_eq!(target.color, ColorChoice::Never);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
