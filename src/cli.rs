use argh::FromArgs;
use tracing::Level;

#[derive(FromArgs, Debug, Default, PartialEq, Eq)]
/// Interactive assistant bot that keeps a phone directory for the session.
pub struct Options {
    #[argh(switch)]
    /// read commands from standard input without the interactive line editor.
    pub plain: bool,

    #[argh(switch, short = 'v')]
    /// log debug diagnostics to standard error.
    pub verbose: bool,
}

impl Options {
    /// Most detailed level that diagnostics are emitted at.
    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }
}
