//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use unionname::signature::{DEFAULT_UNION_NAME, SignatureOptions};

/// Unionname - readable member names for union alternatives
#[derive(Parser, Debug)]
#[command(name = "unionname", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub signature: SignatureArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the names derived from type signatures
    Names(NamesArgs),

    /// Print the named members generated for unions
    Members(MembersArgs),

    /// Rewrite a positional member such as `IsT0` to its named form
    Fix(FixArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How signatures are read, shared by every command.
#[derive(Args, Debug)]
pub struct SignatureArgs {
    /// Treat NAME as a value type (struct); may be repeated
    #[arg(long = "value-type", value_name = "NAME", global = true)]
    pub value_types: Vec<String>,

    /// Treat NAME as an open type parameter; may be repeated
    #[arg(long = "type-param", value_name = "NAME", global = true)]
    pub type_params: Vec<String>,

    /// Simple name of the union type
    #[arg(long, value_name = "NAME", global = true)]
    #[arg(default_value = DEFAULT_UNION_NAME)]
    pub union_name: String,
}

impl SignatureArgs {
    pub fn to_options(&self) -> SignatureOptions {
        let options = SignatureOptions::default().with_union_name(&self.union_name);
        let options = self
            .value_types
            .iter()
            .fold(options, |options, name| options.with_value_type(name));
        self.type_params
            .iter()
            .fold(options, |options, name| options.with_type_param(name))
    }
}

/// Arguments for the `names` command.
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Type signatures, e.g. `System.Collections.Generic.List<int?>`
    #[arg(required_unless_present = "file")]
    pub signatures: Vec<String>,

    /// Read signatures from a file, one per line (use - for stdin)
    #[arg(long, short)]
    pub file: Option<String>,
}

/// Arguments for the `members` command.
#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Union signatures, e.g. `OneOf<int, string>`
    #[arg(required_unless_present = "file")]
    pub unions: Vec<String>,

    /// Read unions from a file, one per line (use - for stdin)
    #[arg(long, short)]
    pub file: Option<String>,
}

/// Arguments for the `fix` command.
#[derive(Args, Debug)]
pub struct FixArgs {
    /// The union the member belongs to, e.g. `OneOf<int, string>`
    pub union: String,

    /// Positional member: IsT<n>, AsT<n>, MapT<n> or TryPickT<n>
    pub member: String,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
