//! The `fix` command - rewrite a positional member access.

use unionname::Error;
use unionname::member::PositionalMember;
use unionname::signature::SignatureOptions;
use unionname::union::UnionSignature;

use crate::cli::FixArgs;
use crate::common::CliResult;

/// Run the fix command, printing the replacement for `args.member`.
pub fn run(args: FixArgs, options: &SignatureOptions) -> CliResult<()> {
    let union = UnionSignature::parse(&args.union, options)?;
    let member = args.member.trim();
    let positional = PositionalMember::parse(member).ok_or_else(|| {
        Error::Api(format!(
            "`{member}` is not a positional member; expected IsT<n>, AsT<n>, MapT<n> or TryPickT<n>"
        ))
    })?;

    let alternatives = union.alternatives();
    let rewrite = alternatives.rewrite(&positional).ok_or_else(|| {
        Error::Api(format!(
            "`{positional}` is out of range for a union of {} alternatives",
            alternatives.len()
        ))
    })?;

    println!("{rewrite}");
    Ok(())
}
