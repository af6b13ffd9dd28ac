use crate::builtin::{self, BuiltinCommand};
use crate::lexer::ParsedCommand;
use crate::normalize::{normalize, Handler};
use crate::store::ContactStore;

/// Table entry for one registered command.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Command name as typed by the user (lower-case).
    pub name: &'static str,
    /// Whether the handler receives the positional arguments.
    pub takes_args: bool,
    /// The handler itself.
    pub handler: Handler,
}

impl Descriptor {
    /// Describe a builtin command.
    pub fn of<T: BuiltinCommand>() -> Self {
        Self {
            name: T::name(),
            takes_args: T::takes_args(),
            handler: T::execute,
        }
    }
}

/// Static lookup from command name to handler.
///
/// Built once when the interpreter starts; see [`Default`] for the commands
/// registered out of the box.
pub struct Dispatcher {
    table: Vec<Descriptor>,
}

impl Dispatcher {
    /// Create a dispatcher over a custom set of commands.
    pub fn new(table: Vec<Descriptor>) -> Self {
        Self { table }
    }

    /// Find the descriptor registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&Descriptor> {
        self.table.iter().find(|d| d.name == name)
    }

    /// Whether `name` is a registered command.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Run `command` against `store` and return the reply.
    ///
    /// Registered commands go through [`normalize`], so the result is always a
    /// plain message. An unknown name yields the invalid-command message.
    pub fn dispatch(&self, command: &ParsedCommand, store: &mut ContactStore) -> String {
        let Some(descriptor) = self.resolve(&command.name) else {
            tracing::debug!(command = %command.name, "unknown command");
            return invalid_command(&command.name);
        };

        let args: &[String] = if descriptor.takes_args {
            &command.args
        } else {
            &[]
        };
        tracing::debug!(command = descriptor.name, args = ?args, "dispatching");
        normalize(descriptor.handler, args, store)
    }
}

/// Reply for a command name nobody registered.
pub fn invalid_command(name: &str) -> String {
    format!("Invalid command: '{name}'. Type 'help' for available commands.")
}

impl Default for Dispatcher {
    /// Create a dispatcher with every builtin:
    /// `add`, `change`, `phone`, `delete`, `search`, `all`, `help`.
    fn default() -> Self {
        use builtin::*;
        Self::new(vec![
            Descriptor::of::<Add>(),
            Descriptor::of::<Change>(),
            Descriptor::of::<Phone>(),
            Descriptor::of::<Delete>(),
            Descriptor::of::<Search>(),
            Descriptor::of::<All>(),
            Descriptor::of::<Help>(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_default_table_registers_builtins() {
        let dispatcher = Dispatcher::default();
        for name in ["add", "change", "phone", "delete", "search", "all", "help"] {
            assert!(dispatcher.contains(name), "{name} is not registered");
        }
        assert!(!dispatcher.contains("hello"));
        assert!(!dispatcher.contains("exit"));
    }

    #[test]
    fn test_arity_flags() {
        let dispatcher = Dispatcher::default();
        assert!(dispatcher.resolve("add").unwrap().takes_args);
        assert!(!dispatcher.resolve("all").unwrap().takes_args);
        assert!(!dispatcher.resolve("help").unwrap().takes_args);
    }

    #[test]
    fn test_unknown_command_message() {
        let dispatcher = Dispatcher::default();
        let mut store = ContactStore::new();
        let out = dispatcher.dispatch(&tokenize("frobnicate now"), &mut store);
        assert_eq!(
            out,
            "Invalid command: 'frobnicate'. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_all_ignores_arguments() {
        let dispatcher = Dispatcher::default();
        let mut store = ContactStore::new();
        dispatcher.dispatch(&tokenize("add Ann 123"), &mut store);
        assert_eq!(dispatcher.dispatch(&tokenize("all please"), &mut store), "Ann: 123");
    }

    #[test]
    fn test_errors_arrive_as_text() {
        let dispatcher = Dispatcher::default();
        let mut store = ContactStore::new();
        assert_eq!(
            dispatcher.dispatch(&tokenize("phone Ghost"), &mut store),
            "Contact 'Ghost' not found."
        );
        assert_eq!(
            dispatcher.dispatch(&tokenize("add"), &mut store),
            "Give me name and phone please."
        );
    }

    #[test]
    fn test_custom_table() {
        let dispatcher = Dispatcher::new(vec![Descriptor::of::<builtin::Help>()]);
        let mut store = ContactStore::new();
        assert!(dispatcher.dispatch(&tokenize("HELP"), &mut store).starts_with("Available commands:"));
        assert!(dispatcher.dispatch(&tokenize("all"), &mut store).starts_with("Invalid command"));
    }
}
