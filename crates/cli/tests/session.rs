//! End-to-end menu sessions driven through in-memory input/output.

use std::fs;
use std::path::PathBuf;

use partbin_cli::{Config, Session, open_inventory};
use partbin_inventory::{BinSnapshot, InventoryStore, load_from_reader};

fn run(store: InventoryStore, script: &str) -> (InventoryStore, String) {
    let mut output = Vec::new();
    let mut session = Session::new(store, script.as_bytes(), &mut output);
    session.run().unwrap();
    let store = session.into_store();
    (store, String::from_utf8(output).unwrap())
}

fn seeded() -> InventoryStore {
    load_from_reader("Valve\n10\nBearing\n5\n".as_bytes()).unwrap()
}

fn snapshot(name: &str, count: u32) -> BinSnapshot {
    BinSnapshot {
        name: name.to_string(),
        count,
    }
}

fn temp_inventory(tag: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "partbin-{}-{tag}.txt",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn shows_inventory_then_quits() {
    let (store, out) = run(seeded(), "q\n");
    assert!(out.starts_with("Valve                10\nBearing               5\n"));
    assert!(out.contains("\nMenu:\nAdd a new item (a)\nSelect a bin (s)\nQuit (q)\n\nSelection: "));
    assert!(out.ends_with("Good Bye!!!\n"));
    assert_eq!(store, seeded());
}

#[test]
fn adds_a_new_bin_with_spaces_in_its_name() {
    let (store, out) = run(seeded(), "a\nHex Bolts 3/8\n12\nq\n");
    assert!(out.contains("Add Item\nEnter Part Description: Number of Parts in the Bin: "));
    assert!(out.contains("Hex Bolts 3/8        12\n"));
    assert_eq!(
        store.list(),
        vec![snapshot("Valve", 10), snapshot("Bearing", 5), snapshot("Hex Bolts 3/8", 12)]
    );
}

#[test]
fn rejects_duplicate_and_oversized_bins() {
    let (store, out) = run(seeded(), "a\nValve\na\nGear\n31\nq\n");
    assert!(out.contains("Already in the bin\n"));
    assert!(out.contains("Cannot add the item\n"));
    assert_eq!(store, seeded());
}

#[test]
fn adds_and_removes_parts_on_selected_bin() {
    let (store, out) = run(seeded(), "s\nValve\na\n20\ns\nBearing\nr\n5\nq\n");
    assert!(out.contains("Bin Selection: Menu:\nAdd parts (a)\nRemove parts (r)\n"));
    assert!(out.contains("Number of parts to add: "));
    assert!(out.contains("Number of parts to remove: "));
    assert_eq!(store.list(), vec![snapshot("Valve", 30), snapshot("Bearing", 0)]);
}

#[test]
fn reports_capacity_and_shortage() {
    let (store, out) = run(seeded(), "s\nValve\na\n21\ns\nBearing\nr\n6\nq\n");
    assert!(out.contains("Exceeding maximum number of parts\n"));
    assert!(out.contains("Not enough parts to remove\n"));
    assert_eq!(store, seeded());
}

#[test]
fn unknown_bin_returns_to_menu() {
    let (store, out) = run(seeded(), "s\nvalve\nq\n");
    assert!(out.contains("No valve in bin\n"));
    assert_eq!(store, seeded());
}

#[test]
fn end_of_input_ends_session_quietly() {
    let (store, out) = run(seeded(), "s\nValve\n");
    assert!(!out.contains("Good Bye!!!"));
    assert_eq!(store, seeded());
}

#[test]
fn configured_file_is_loaded_without_prompting() {
    let path = temp_inventory("configured", "Valve\n10\n");
    let config = Config {
        inventory_file: Some(path.clone()),
    };
    let mut output = Vec::new();
    let store = open_inventory(&config, &mut "".as_bytes(), &mut output).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.is_empty());
    assert_eq!(store.list(), vec![snapshot("Valve", 10)]);
}

#[test]
fn prompts_until_a_file_opens() {
    let path = temp_inventory("prompted", "Gear\n3\n");
    let script = format!("/no/such/inventory.txt\n{}\n", path.display());
    let mut output = Vec::new();
    let store = open_inventory(&Config::default(), &mut script.as_bytes(), &mut output).unwrap();
    fs::remove_file(&path).unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_eq!(
        out,
        concat!(
            "Enter name of inventory file: ",
            "Error opening file. Please try again.\n",
            "Enter name of inventory file: ",
        )
    );
    assert_eq!(store.list(), vec![snapshot("Gear", 3)]);
}

#[test]
fn malformed_file_is_fatal() {
    let path = temp_inventory("malformed", "Gear\nthree\n");
    let config = Config {
        inventory_file: Some(path.clone()),
    };
    let err = open_inventory(&config, &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(format!("{err:#}").contains("'three' is not a whole number"));
}

#[test]
fn unreadable_file_at_prompt_is_fatal() {
    let path = temp_inventory("not-utf8", b"Va\xfflve\n10\n");
    let script = format!("{}\nnever-read.txt\n", path.display());
    let mut output = Vec::new();
    let err = open_inventory(&Config::default(), &mut script.as_bytes(), &mut output).unwrap_err();
    fs::remove_file(&path).unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_eq!(out, "Enter name of inventory file: ");
    assert!(format!("{err:#}").contains("failed to read inventory"));
}

#[test]
fn missing_configured_file_is_fatal() {
    let config = Config {
        inventory_file: Some(PathBuf::from("/no/such/inventory.txt")),
    };
    assert!(open_inventory(&config, &mut "".as_bytes(), &mut Vec::new()).is_err());
}
