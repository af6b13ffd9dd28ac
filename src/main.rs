use anyhow::Result;
use assistant_bot::cli::Options;
use assistant_bot::io_adapters::{Editor, LineReader, PlainReader};
use assistant_bot::Interpreter;

fn main() -> Result<()> {
    let opts: Options = argh::from_env();

    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut reader: Box<dyn LineReader> = if opts.plain {
        Box::new(PlainReader::stdin())
    } else {
        match Editor::new() {
            Ok(editor) => Box::new(editor),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "falling back to plain input");
                Box::new(PlainReader::stdin())
            }
        }
    };

    Interpreter::default().run(reader.as_mut(), &mut std::io::stdout());
    Ok(())
}
