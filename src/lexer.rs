//! Splitting a raw input line into a command name and its arguments.

/// One tokenized input line.
///
/// `name` is lower-cased; `args` keep their original spelling and order.
/// Blank input produces an empty `name` and no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// Command token, lower-cased. Empty for blank input.
    pub name: String,
    /// Remaining whitespace-separated tokens, unparsed.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// True when the line held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Tokenize one line of input.
///
/// Splits on any run of whitespace. Never fails: every string is valid input.
///
/// # Arguments
/// * `line` - The raw line as read from the user, with or without a trailing newline.
pub fn tokenize(line: &str) -> ParsedCommand {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return ParsedCommand::default();
    };

    ParsedCommand {
        name: first.to_lowercase(),
        args: words.map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_lowercased_and_args_keep_case() {
        let parsed = tokenize("ADD John 0501234567");
        assert_eq!(parsed.name, "add");
        assert_eq!(parsed.args, vec!["John", "0501234567"]);
    }

    #[test]
    fn test_blank_input_yields_empty_command() {
        for line in ["", "   ", "\t \n"] {
            let parsed = tokenize(line);
            assert!(parsed.is_empty(), "{line:?} should be empty");
            assert!(parsed.args.is_empty());
        }
    }

    #[test]
    fn test_mixed_whitespace_is_collapsed() {
        let parsed = tokenize("  change\tJane   050 \n");
        assert_eq!(parsed.name, "change");
        assert_eq!(parsed.args, vec!["Jane", "050"]);
    }

    #[test]
    fn test_command_without_args() {
        let parsed = tokenize("all");
        assert_eq!(parsed.name, "all");
        assert!(parsed.args.is_empty());
    }
}
