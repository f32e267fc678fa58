//! Runs every `fixtures/*.json` case through the classifier and compares
//! against the recorded expectation. Exit code 1 on any mismatch.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Deserialize;

use gql_typemap::Type;

#[derive(Debug, Deserialize)]
struct Case {
    descriptor: Type,
    expect: Expect,
}

#[derive(Debug, Deserialize)]
struct Expect {
    name: String,
    error_or_nil: bool,
    /// Only checked for unions.
    #[serde(default)]
    members: Option<Vec<String>>,
}

fn fixtures_dir() -> PathBuf {
    match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"),
    }
}

fn load_case(path: &Path) -> Result<Case> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let de = &mut serde_json::Deserializer::from_str(&source);
    serde_path_to_error::deserialize::<_, Case>(de).map_err(|err| {
        let json_path = err.path().to_string();
        anyhow::anyhow!("{}: at JSON path {json_path} → {}", path.display(), err.into_inner())
    })
}

fn check(case: &Case) -> Vec<String> {
    let mut problems = Vec::new();

    let name = gql_typemap::type_name_from_type(&case.descriptor);
    if name != case.expect.name {
        problems.push(format!("name: expected {:?}, got {name:?}", case.expect.name));
    }

    let error_or_nil = gql_typemap::is_returning_error_or_nil(&case.descriptor);
    if error_or_nil != case.expect.error_or_nil {
        problems.push(format!("error_or_nil: expected {}, got {error_or_nil}", case.expect.error_or_nil));
    }

    if let (Some(expected), Some(_)) = (&case.expect.members, case.descriptor.as_union()) {
        let members = gql_typemap::member_types(&case.descriptor)
            .into_iter()
            .map(gql_typemap::type_name_from_type)
            .collect::<Vec<_>>();
        if &members != expected {
            problems.push(format!("members: expected {expected:?}, got {members:?}"));
        }
    }

    problems
}

fn main() -> Result<()> {
    let dir = fixtures_dir();
    let pattern = dir.join("*.json");
    let mut paths = gql_typemap::descriptor::resolve_inputs([pattern.to_string_lossy()])
        .with_context(|| format!("no fixtures under {}", dir.display()))?;
    paths.sort();

    let mut failed = 0usize;
    for path in &paths {
        let label = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        let case = match load_case(path) {
            Ok(case) => case,
            Err(error) => {
                eprintln!("❌ {label}: {error:#}");
                failed += 1;
                continue;
            }
        };
        let problems = check(&case);
        if problems.is_empty() {
            eprintln!("✅ {}", label.green());
        } else {
            failed += 1;
            eprintln!("❌ {}", label.red());
            for problem in problems {
                eprintln!("   {problem}");
            }
        }
    }

    eprintln!("—— {} passed, {} failed ——", paths.len() - failed, failed);
    if failed > 0 {
        bail!("{failed} fixture(s) failed");
    }
    Ok(())
}
