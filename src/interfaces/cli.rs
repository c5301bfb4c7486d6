use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vox")]
#[command(about = "Translate typed or spoken text and hear the result.")]
#[command(version)]
pub struct Cli {
    /// Source language (tag, ISO code or name)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Target language (tag, ISO code or name)
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Capture the text from the microphone
    #[arg(short = 'l', long)]
    pub listen: bool,

    /// Don't read the translation aloud
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// List supported languages
    #[arg(long)]
    pub languages: bool,

    /// Start an interactive session
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

impl Cli {
    /// No text given on the command line and no capture requested
    pub fn wants_session(&self) -> bool {
        self.interactive || (self.text.is_empty() && !self.listen)
    }
}
