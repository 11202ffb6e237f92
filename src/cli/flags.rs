use clap::Parser;

/// Generate a pronounceable password with a guaranteed digit, an optional
/// symbol, and a minimum estimated entropy.
#[derive(Debug, Default, Parser)]
#[command(name = "pronpass", version)]
pub struct CliFlags {
    /// Password length, at most 4096 [default: 12]
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Require at least one symbol
    #[arg(short, long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Do not require a symbol, even if the settings file does
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'b', long = "board", visible_alias = "copy")]
    pub clipboard: bool,

    /// Minimum estimated entropy in bits [default: 60]
    #[arg(short = 'e', long = "min-entropy", value_name = "BITS")]
    pub min_entropy: Option<f64>,

    /// Give up after this many candidates [default: 10000]
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Symbol characters to draw from [default: !@#]
    #[arg(long, value_name = "CHARS")]
    pub special: Option<String>,

    /// Store these options as defaults in the settings file
    #[arg(long)]
    pub save: bool,

    /// Print only the password
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Symbol requirement given on the command line, if any.
    pub fn symbols_override(&self) -> Option<bool> {
        if self.symbols {
            Some(true)
        } else if self.no_symbols {
            Some(false)
        } else {
            None
        }
    }
}
