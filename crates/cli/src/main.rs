use std::io;

use anyhow::Context;

use partbin_cli::{Config, Session, open_inventory};

fn main() -> anyhow::Result<()> {
    partbin_observability::init();

    let config = Config::from_env();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let store = open_inventory(&config, &mut input, &mut output)?;

    Session::new(store, input, output)
        .run()
        .context("interactive session failed")?;
    Ok(())
}
