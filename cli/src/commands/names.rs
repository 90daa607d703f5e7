//! The `names` command - print every name derived from a signature.

use unionname::TypeDescriptor;
use unionname::signature::{SignatureOptions, parse_signature};

use crate::cli::NamesArgs;
use crate::common::CliResult;
use crate::common::error::render;
use crate::common::input::collect_inputs;

/// Run the names command.
pub fn run(args: NamesArgs, options: &SignatureOptions, no_color: bool) -> CliResult<()> {
    let inputs = collect_inputs(&args.signatures, args.file.as_deref())?;
    let mut has_errors = false;

    for input in &inputs {
        match parse_signature(&input.text, options) {
            Ok(signature) => {
                let ty = TypeDescriptor::from_description(&signature);
                print!("{}", format_names(&input.text, &ty));
            }
            Err(e) => {
                render(&e.with_filename_opt(input.filename.as_deref()), no_color);
                has_errors = true;
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }
    Ok(())
}

fn format_names(source: &str, ty: &TypeDescriptor) -> String {
    let mut namespaces: Vec<_> = ty.system_namespaces().into_iter().collect();
    namespaces.sort_unstable();
    let namespaces = if namespaces.is_empty() {
        "-".to_string()
    } else {
        namespaces.join(", ")
    };

    format!(
        "{source}\n  readable:    {}\n  declaration: {}\n  hint:        {}\n  namespaces:  {}\n",
        ty.readable_name(),
        ty.fully_qualified_name(),
        ty.hint_name(),
        namespaces,
    )
}
