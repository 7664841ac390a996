//! Command-line arguments.

use std::path::PathBuf;

use bbgrad_core::{Color, ColorFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Turn text into per-character gradient BBCode.
#[derive(Debug, Parser)]
#[command(name = "bbgrad", version)]
#[command(about = "Turn text into per-character gradient BBCode for forum signatures")]
pub struct Cli {
    /// Log debug output to stderr (BBGRAD_LOG sets the filter otherwise)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile text into gradient markup
    Render(RenderArgs),

    /// Preview existing [COLOR=...] markup in the terminal
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Text to color; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Gradient stop, in order (#RGB or #RRGGBB); repeat for more stops
    #[arg(short, long = "stop", value_name = "COLOR")]
    pub stops: Vec<Color>,

    /// Use a rainbow with one stop per colored character (2 to 24 stops)
    #[arg(long, conflicts_with = "stops")]
    pub rainbow: bool,

    /// Reverse the stop order
    #[arg(long)]
    pub reverse: bool,

    /// How colors are written inside the tags
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Color whitespace too
    #[arg(long, overrides_with = "no_include_spaces")]
    pub include_spaces: bool,

    /// Pass whitespace through uncolored (the default)
    #[arg(long, overrides_with = "include_spaces")]
    pub no_include_spaces: bool,

    /// Escape literal [ and ] as &#91; and &#93; (the default)
    #[arg(long, overrides_with = "no_escape")]
    pub escape: bool,

    /// Leave literal [ and ] unescaped
    #[arg(long, overrides_with = "escape")]
    pub no_escape: bool,

    /// Output length limit
    #[arg(short, long, value_name = "N")]
    pub budget: Option<usize>,

    /// YAML preset with stops and options; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Copy the markup to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Command that receives the markup on stdin (defaults to pbcopy/xclip)
    #[arg(long, value_name = "CMD", requires = "copy")]
    pub copy_command: Option<String>,

    /// Print a colored preview to stderr
    #[arg(long)]
    pub preview: bool,

    /// Print only the markup, no stats
    #[arg(short, long)]
    pub quiet: bool,
}

impl RenderArgs {
    /// Whitespace setting given on the command line, if any. The last of the
    /// pair wins.
    pub fn include_spaces_flag(&self) -> Option<bool> {
        flag_pair(self.include_spaces, self.no_include_spaces)
    }

    /// Bracket escaping given on the command line, if any.
    pub fn escape_flag(&self) -> Option<bool> {
        flag_pair(self.escape, self.no_escape)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Markup to preview; read from stdin when omitted
    #[arg(value_name = "MARKUP")]
    pub markup: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// [COLOR=#RRGGBB]
    Hex,
    /// [COLOR=rgb(R, G, B)]
    Rgb,
}

impl From<FormatArg> for ColorFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => ColorFormat::Hex,
            FormatArg::Rgb => ColorFormat::Rgb,
        }
    }
}
