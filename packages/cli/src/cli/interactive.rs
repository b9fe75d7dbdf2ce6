//! Interactive menu shown when no subcommand is given

use super::key_ops;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use keygate_key::{KeyGenerator, KeyStore};
use std::io::Write;

/// Entries of the interactive menu, in display order
pub const MENU_ITEMS: [&str; 3] = ["Generate new keys", "List all keys", "Validate key"];

/// Action picked from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Issue new keys
    Generate,
    /// Show both collections
    List,
    /// Redeem one key
    Validate,
}

impl MenuChoice {
    /// Map a position in [`MENU_ITEMS`] to its action
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Generate),
            1 => Some(Self::List),
            2 => Some(Self::Validate),
            _ => None,
        }
    }
}

/// Show the menu once and run the chosen action
pub fn run_menu<G: KeyGenerator>(
    store: &KeyStore<G>,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = ColorfulTheme::default();

    writeln!(out, "=== Key Manager ===")?;
    let selection = Select::with_theme(&theme)
        .with_prompt("Choose an action")
        .items(&MENU_ITEMS)
        .default(0)
        .interact()?;

    match MenuChoice::from_index(selection) {
        Some(MenuChoice::Generate) => {
            let count: usize = Input::with_theme(&theme)
                .with_prompt("How many keys to create?")
                .default(1)
                .interact_text()?;
            key_ops::handle_create(store, count, false, out)
        }
        Some(MenuChoice::List) => key_ops::handle_list(store, false, out),
        Some(MenuChoice::Validate) => {
            let input: String = Input::with_theme(&theme)
                .with_prompt("Enter key")
                .allow_empty(true)
                .interact_text()?;
            match normalize_key_input(&input) {
                Some(key) => key_ops::handle_validate(store, key, false, out),
                None => {
                    writeln!(out, "Enter an access key")?;
                    Ok(())
                }
            }
        }
        None => Err(format!("unknown menu selection {selection}").into()),
    }
}

/// Strip surrounding whitespace from typed input; `None` when nothing is left
#[must_use]
pub fn normalize_key_input(input: &str) -> Option<&str> {
    let key = input.trim();
    (!key.is_empty()).then_some(key)
}
