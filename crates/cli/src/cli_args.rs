//! Command-line argument parsing for the `cakecollate` binary.

use clap::Parser;

/// Command-line arguments for the CakeCollate CLI.
///
/// Without a trailing command the binary reads commands from standard input
/// until `exit` or end of input. With one it runs just that command.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cake_collate_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cakecollate", "-o", "/tmp/orders.json", "list"]);
/// assert_eq!(args.one_shot_command().as_deref(), Some("list"));
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Path to the settings YAML file.
    ///
    /// If not provided, defaults to `~/.cakecollate/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Path to the orders JSON file, overriding the settings file.
    #[arg(long, short = 'o')]
    pub orders_path: Option<String>,

    /// Path to the order items JSON file, overriding the settings file.
    #[arg(long, short = 'i')]
    pub order_items_path: Option<String>,

    /// A single command to run instead of starting an interactive session.
    ///
    /// # Examples
    /// ```bash
    /// cakecollate delete 1 3-4
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// The trailing words joined back into one command line, if any were given.
    #[must_use]
    pub fn one_shot_command(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
