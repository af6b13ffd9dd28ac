use crate::error::{MissingArgs, Result};
use crate::store::{ContactStore, Insertion};

/// Commands the bot knows at compile time.
///
/// Every handler shares the same shape: it receives the positional arguments
/// and the store, and either returns the reply text or a categorized
/// [`CommandError`](crate::error::CommandError). Commands that take no
/// arguments simply ignore `args`.
pub trait BuiltinCommand {
    /// Canonical name of the command, e.g. "add" or "phone".
    fn name() -> &'static str;

    /// Whether the command reads its positional arguments.
    fn takes_args() -> bool {
        true
    }

    /// Executes the command against the store.
    fn execute(args: &[String], store: &mut ContactStore) -> Result<String>;
}

/// First `N` arguments, each required to be non-blank.
fn required<const N: usize>(args: &[String], missing: MissingArgs) -> Result<[&str; N]> {
    if args.len() < N {
        return Err(missing.into());
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        if arg.trim().is_empty() {
            return Err(missing.into());
        }
        *slot = arg.as_str();
    }
    Ok(out)
}

fn format_entries(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(name, phone)| format!("{name}: {phone}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Add a new contact: `add <name> <phone>`.
pub struct Add;

impl BuiltinCommand for Add {
    fn name() -> &'static str {
        "add"
    }

    fn execute(args: &[String], store: &mut ContactStore) -> Result<String> {
        let [name, phone] = required::<2>(args, MissingArgs::Both)?;
        Ok(match store.insert(name, phone) {
            Insertion::Added => "Contact added.".to_string(),
            Insertion::AlreadyExists => {
                format!("Contact '{name}' already exists. Use 'change' to update.")
            }
        })
    }
}

/// Replace the phone of an existing contact: `change <name> <phone>`.
pub struct Change;

impl BuiltinCommand for Change {
    fn name() -> &'static str {
        "change"
    }

    fn execute(args: &[String], store: &mut ContactStore) -> Result<String> {
        let [name, phone] = required::<2>(args, MissingArgs::Both)?;
        let previous = store.update(name, phone)?;
        Ok(format!("Contact '{name}' updated from {previous} to {phone}."))
    }
}

/// Show the phone of one contact: `phone <name>`.
pub struct Phone;

impl BuiltinCommand for Phone {
    fn name() -> &'static str {
        "phone"
    }

    fn execute(args: &[String], store: &mut ContactStore) -> Result<String> {
        let [name] = required::<1>(args, MissingArgs::Name)?;
        let phone = store.lookup(name)?;
        Ok(format!("{name}: {phone}"))
    }
}

/// Remove a contact: `delete <name>`.
pub struct Delete;

impl BuiltinCommand for Delete {
    fn name() -> &'static str {
        "delete"
    }

    fn execute(args: &[String], store: &mut ContactStore) -> Result<String> {
        let [name] = required::<1>(args, MissingArgs::Name)?;
        let phone = store.remove(name)?;
        Ok(format!("Contact '{name}' ({phone}) deleted."))
    }
}

/// Find contacts by part of the name or phone: `search <query>`.
pub struct Search;

impl BuiltinCommand for Search {
    fn name() -> &'static str {
        "search"
    }

    fn execute(args: &[String], store: &mut ContactStore) -> Result<String> {
        let [query] = required::<1>(args, MissingArgs::SearchQuery)?;
        let query = query.to_lowercase();
        let matches = store.search(&query);
        if matches.is_empty() {
            return Ok(format!("No contacts found matching '{query}'"));
        }
        Ok(format!(
            "Found {} contact(s):\n{}",
            matches.len(),
            format_entries(&matches)
        ))
    }
}

/// List every contact sorted by name: `all`.
pub struct All;

impl BuiltinCommand for All {
    fn name() -> &'static str {
        "all"
    }

    fn takes_args() -> bool {
        false
    }

    fn execute(_args: &[String], store: &mut ContactStore) -> Result<String> {
        if store.is_empty() {
            return Ok("No contacts found.".to_string());
        }
        Ok(format_entries(&store.list_all()))
    }
}

/// Usage text printed by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  hello                     - Greeting
  add <name> <phone>        - Add new contact
  change <name> <phone>     - Change existing contact
  phone <name>              - Show phone for contact
  delete <name>             - Delete contact
  search <query>            - Search contacts by name or phone
  all                       - Show all contacts
  help                      - Show this help
  close, exit, quit, bye    - Exit the program

Examples:
  add John 0501234567
  change John 0509876543
  phone John
  delete John
  search 050
  all";

/// Print usage: `help`.
pub struct Help;

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn takes_args() -> bool {
        false
    }

    fn execute(_args: &[String], _store: &mut ContactStore) -> Result<String> {
        Ok(HELP_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_add_then_phone() {
        let mut store = ContactStore::new();
        let out = Add::execute(&args(&["John", "0501234567"]), &mut store).unwrap();
        assert_eq!(out, "Contact added.");

        let out = Phone::execute(&args(&["John"]), &mut store).unwrap();
        assert_eq!(out, "John: 0501234567");
    }

    #[test]
    fn test_add_duplicate_is_soft() {
        let mut store = ContactStore::new();
        Add::execute(&args(&["John", "111"]), &mut store).unwrap();
        let out = Add::execute(&args(&["John", "222"]), &mut store).unwrap();
        assert_eq!(out, "Contact 'John' already exists. Use 'change' to update.");
        assert_eq!(store.lookup("John").unwrap(), "111");
    }

    #[test]
    fn test_add_requires_name_and_phone() {
        let mut store = ContactStore::new();
        for input in [args(&[]), args(&["John"]), args(&["John", " "])] {
            let err = Add::execute(&input, &mut store).unwrap_err();
            assert!(matches!(err, CommandError::InvalidArguments(MissingArgs::Both)));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_ignores_extra_args() {
        let mut store = ContactStore::new();
        Add::execute(&args(&["John", "111", "extra"]), &mut store).unwrap();
        assert_eq!(store.lookup("John").unwrap(), "111");
    }

    #[test]
    fn test_change_reports_old_and_new() {
        let mut store = ContactStore::new();
        store.insert("John", "0501234567");
        let out = Change::execute(&args(&["John", "0509876543"]), &mut store).unwrap();
        assert_eq!(out, "Contact 'John' updated from 0501234567 to 0509876543.");
    }

    #[test]
    fn test_change_missing_contact() {
        let mut store = ContactStore::new();
        let err = Change::execute(&args(&["Ghost", "123"]), &mut store).unwrap_err();
        assert!(matches!(err, CommandError::NotFound(ref n) if n == "Ghost"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_phone_and_delete_require_name() {
        let mut store = ContactStore::new();
        let err = Phone::execute(&[], &mut store).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(MissingArgs::Name)));
        let err = Delete::execute(&[], &mut store).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(MissingArgs::Name)));
    }

    #[test]
    fn test_delete_reports_removed_phone() {
        let mut store = ContactStore::new();
        store.insert("John", "0509876543");
        let out = Delete::execute(&args(&["John"]), &mut store).unwrap();
        assert_eq!(out, "Contact 'John' (0509876543) deleted.");
        assert!(matches!(
            Phone::execute(&args(&["John"]), &mut store),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn test_search_lists_matches() {
        let mut store = ContactStore::new();
        store.insert("John", "0501234567");
        store.insert("Bob", "0931111111");
        let out = Search::execute(&args(&["JO"]), &mut store).unwrap();
        assert_eq!(out, "Found 1 contact(s):\nJohn: 0501234567");
    }

    #[test]
    fn test_search_reply_in_insertion_order() {
        let mut store = ContactStore::new();
        store.insert("Zed", "0501111111");
        store.insert("Amy", "0502222222");
        let out = Search::execute(&args(&["050"]), &mut store).unwrap();
        assert_eq!(out, "Found 2 contact(s):\nZed: 0501111111\nAmy: 0502222222");
    }

    #[test]
    fn test_search_no_matches_and_missing_query() {
        let mut store = ContactStore::new();
        store.insert("John", "0501234567");
        let out = Search::execute(&args(&["Zed"]), &mut store).unwrap();
        assert_eq!(out, "No contacts found matching 'zed'");

        let err = Search::execute(&[], &mut store).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(MissingArgs::SearchQuery)));
    }

    #[test]
    fn test_all_empty_and_sorted() {
        let mut store = ContactStore::new();
        assert_eq!(All::execute(&[], &mut store).unwrap(), "No contacts found.");

        store.insert("bob", "2");
        store.insert("Alice", "1");
        assert_eq!(All::execute(&[], &mut store).unwrap(), "Alice: 1\nbob: 2");
    }

    #[test]
    fn test_help_mentions_every_command() {
        let out = Help::execute(&[], &mut ContactStore::new()).unwrap();
        for cmd in ["hello", "add", "change", "phone", "delete", "search", "all", "help", "close", "exit", "quit", "bye"] {
            assert!(out.contains(cmd), "help is missing {cmd}");
        }
    }
}
