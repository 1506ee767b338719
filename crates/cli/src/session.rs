//! Text menu session.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the whole menu can
//! be driven from tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};

use partbin_core::InventoryError;
use partbin_inventory::{InventoryStore, LoadError, load_from_path, render};

use crate::config::Config;

/// Load the startup inventory.
///
/// A configured path must open; otherwise the user is prompted until a file
/// opens. A file that opens but fails to parse is always fatal.
pub fn open_inventory<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<InventoryStore> {
    if let Some(path) = &config.inventory_file {
        return load_from_path(path)
            .with_context(|| format!("failed to load inventory from {}", path.display()));
    }

    loop {
        write!(output, "Enter name of inventory file: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("no inventory file given");
        };
        let file_name = line.trim();
        if file_name.is_empty() {
            continue;
        }

        match load_from_path(file_name) {
            Ok(store) => return Ok(store),
            Err(LoadError::Open { source, .. }) => {
                tracing::debug!(file = file_name, error = %source, "could not open inventory file");
                writeln!(output, "Error opening file. Please try again.")?;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to load inventory from {file_name}"));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a loaded store.
pub struct Session<R, W> {
    store: InventoryStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: InventoryStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn into_store(self) -> InventoryStore {
        self.store
    }

    /// Show the inventory, then run the menu until `q` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(bins = self.store.len(), "session started");
        self.show_inventory()?;

        while self.menu()? == Flow::Continue {}

        self.output.flush()?;
        tracing::info!(bins = self.store.len(), "session ended");
        Ok(())
    }

    fn menu(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nMenu:")?;
        writeln!(self.output, "Add a new item (a)")?;
        writeln!(self.output, "Select a bin (s)")?;
        writeln!(self.output, "Quit (q)")?;

        let Some(choice) = self.prompt_choice("\nSelection: ")? else {
            return Ok(Flow::Quit);
        };

        match choice {
            'a' => self.add_item(),
            's' => self.select_bin(),
            'q' => {
                writeln!(self.output, "Good Bye!!!")?;
                Ok(Flow::Quit)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn add_item(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Add Item")?;
        let Some(name) = self.prompt_line("Enter Part Description: ")? else {
            return Ok(Flow::Quit);
        };

        if self.store.contains(&name) {
            writeln!(self.output, "Already in the bin")?;
            return Ok(Flow::Continue);
        }

        let Some(count) = self.prompt_number("Number of Parts in the Bin: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(count) = count else {
            return Ok(Flow::Continue);
        };

        match self.store.create_bin(name, count) {
            Ok(()) => self.show_inventory()?,
            Err(InventoryError::CapacityExceeded { .. }) => {
                writeln!(self.output, "Cannot add the item")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn select_bin(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt_line("Bin Selection: ")? else {
            return Ok(Flow::Quit);
        };

        if !self.store.contains(&name) {
            writeln!(self.output, "No {name} in bin")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "Add parts (a)")?;
        writeln!(self.output, "Remove parts (r)")?;
        let Some(choice) = self.prompt_choice("\nSelection: ")? else {
            return Ok(Flow::Quit);
        };

        match choice {
            'a' => self.add_parts(&name),
            'r' => self.remove_parts(&name),
            _ => Ok(Flow::Continue),
        }
    }

    fn add_parts(&mut self, name: &str) -> io::Result<Flow> {
        let Some(delta) = self.prompt_number("Number of parts to add: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(delta) = delta else {
            return Ok(Flow::Continue);
        };

        match self.store.add_parts(name, delta) {
            Ok(_) => self.show_inventory()?,
            Err(InventoryError::CapacityExceeded { .. }) => {
                writeln!(self.output, "Exceeding maximum number of parts")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_parts(&mut self, name: &str) -> io::Result<Flow> {
        let Some(delta) = self.prompt_number("Number of parts to remove: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(delta) = delta else {
            return Ok(Flow::Continue);
        };

        match self.store.remove_parts(name, delta) {
            Ok(_) => self.show_inventory()?,
            Err(InventoryError::InsufficientParts { .. }) => {
                writeln!(self.output, "Not enough parts to remove")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn show_inventory(&mut self) -> io::Result<()> {
        self.output.write_all(render(&self.store.list()).as_bytes())
    }

    fn report(&mut self, err: &InventoryError) -> io::Result<()> {
        tracing::warn!(error = %err, "unexpected store rejection");
        writeln!(self.output, "{err}")
    }

    /// `None` on end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        read_line(&mut self.input)
    }

    /// First non-blank character of the next line; blank lines are skipped.
    fn prompt_choice(&mut self, prompt: &str) -> io::Result<Option<char>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        loop {
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            if let Some(c) = line.trim().chars().next() {
                return Ok(Some(c));
            }
        }
    }

    /// Outer `None` on end of input, inner `None` when the entry is not a
    /// whole number (the user has already been told).
    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        let Some(line) = self.prompt_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(n) => Ok(Some(Some(n))),
            Err(_) => {
                writeln!(self.output, "Please enter a whole number")?;
                Ok(Some(None))
            }
        }
    }
}

/// Next line without its line terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
