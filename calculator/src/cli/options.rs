use std::path::PathBuf;
use structopt::StructOpt;

/// An interactive calculator.
///
/// Enter `<operation> <number1> <number2>`, `help`, `history` or `exit`.
#[derive(StructOpt, Debug)]
pub struct Opt {
    /// The path to a TOML configuration file.
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Read plain lines from stdin (no line editing or recall).
    #[structopt(long)]
    pub plain: bool,
}
