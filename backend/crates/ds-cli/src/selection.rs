use crate::CliResult;

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

/// Which courses the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseRequest {
    All,
    Named(Vec<String>),
}

/// Requested courses split against what the master database offers for the term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSelection {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Keeps the operator's order and drops repeated names.
pub fn select_courses(request: &CourseRequest, available: &[String]) -> CourseSelection {
    match request {
        CourseRequest::All => CourseSelection {
            valid: available.to_vec(),
            invalid: Vec::new(),
        },
        CourseRequest::Named(names) => {
            let known: BTreeSet<&str> = available.iter().map(String::as_str).collect();
            let mut seen = BTreeSet::new();
            let mut selection = CourseSelection::default();

            for name in names {
                if !seen.insert(name.as_str()) {
                    continue;
                }
                if known.contains(name.as_str()) {
                    selection.valid.push(name.clone());
                } else {
                    selection.invalid.push(name.clone());
                }
            }

            selection
        }
    }
}

/// List the unknown courses and ask whether to go on with the rest. Anything but `y`
/// declines.
pub fn confirm<R: BufRead, W: Write>(
    selection: &CourseSelection,
    mut input: R,
    mut output: W,
) -> CliResult<bool> {
    writeln!(output, "The following courses are invalid:")?;
    writeln!(output, "  {}", selection.invalid.join(", "))?;
    writeln!(output)?;
    writeln!(output, "Proceed syncing valid courses?")?;
    writeln!(output, "  {}", selection.valid.join(", "))?;
    write!(output, "Y/[N]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
