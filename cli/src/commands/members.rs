//! The `members` command - print the named members generated for unions.

use unionname::member::Member;
use unionname::signature::SignatureOptions;
use unionname::union::{Alternatives, UnionSet, UnionSignature};

use crate::cli::MembersArgs;
use crate::common::CliResult;
use crate::common::error::render;
use crate::common::input::collect_inputs;

/// Run the members command.
///
/// Unions with the same alternatives are generated once; later ones are
/// reported as duplicates of the first.
pub fn run(args: MembersArgs, options: &SignatureOptions, no_color: bool) -> CliResult<()> {
    let inputs = collect_inputs(&args.unions, args.file.as_deref())?;
    let mut generated = UnionSet::new();
    let mut first_sources: Vec<&str> = Vec::new();
    let mut has_errors = false;

    for input in &inputs {
        let filename = input.filename.as_deref();
        let union = match UnionSignature::parse(&input.text, options) {
            Ok(union) => union,
            Err(e) => {
                render(&e.with_filename_opt(filename), no_color);
                has_errors = true;
                continue;
            }
        };
        if let Some(warnings) = union.collision_warnings() {
            render(&warnings.with_filename_opt(filename), no_color);
        }

        match generated.insert(union.alternatives().clone()) {
            Some(first) => {
                let first = first_sources.get(first).copied().unwrap_or_default();
                println!("{}\n  duplicate of {}", input.text, first);
            }
            None => {
                first_sources.push(&input.text);
                print!("{}", format_members(&input.text, union.alternatives()));
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }
    Ok(())
}

fn format_members(source: &str, alternatives: &Alternatives) -> String {
    let mut out = format!("{source}\n  hint: {}\n", alternatives.hint_name());
    let namespaces = alternatives.system_namespaces();
    if !namespaces.is_empty() {
        out.push_str(&format!("  using: {}\n", namespaces.join(", ")));
    }

    let members = alternatives.members().members;
    for group in members.chunk_by(|a, b| a.index == b.index) {
        let Some(Member {
            index, declaration, ..
        }) = group.first()
        else {
            continue;
        };
        let names: Vec<_> = group.iter().map(|m| m.name.as_str()).collect();
        out.push_str(&format!("  T{index} {declaration}: {}\n", names.join(", ")));
    }
    out
}
