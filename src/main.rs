// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use billfold::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut ledger = store::load_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store::save(&ledger)?;
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("tx", sub)) => {
            commands::transactions::handle(&mut ledger, sub)?;
            store::save(&ledger)?;
        }
        Some(("goal", sub)) => {
            commands::goals::handle(&mut ledger, sub)?;
            store::save(&ledger)?;
        }
        Some(("card", sub)) => {
            commands::cards::handle(&mut ledger, sub)?;
            store::save(&ledger)?;
        }
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("categories", _)) => commands::categories::handle()?,
        Some(("import", sub)) => {
            commands::importer::handle(&mut ledger, sub)?;
            store::save(&ledger)?;
        }
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ledger)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
