//! Defines the command-line interface for the application.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "agegate",
    about = "Check a guest's name and age and print an admission decision.",
    disable_help_flag = true
)]
pub struct Cli {
    /// Name of the guest asking to enter.
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub name: String,

    /// The guest's age, in years.
    #[arg(value_name = "AGE", allow_hyphen_values = true)]
    pub age: String,

    /// Tokens past the first two, accepted and ignored.
    #[arg(
        value_name = "IGNORED",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub rest: Vec<String>,
}
