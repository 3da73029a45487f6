use propkeys::{PropertyKeyTable, TableVersion};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{open_table, KeyRow},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct ListOutput {
    version: TableVersion,
    keys: Vec<KeyRow>,
    count: usize,
}

/// Keys of `table` whose full name contains `filter`, ignoring ASCII case.
fn collect(table: &PropertyKeyTable, filter: Option<&str>) -> ListOutput {
    let needle = filter.map(str::to_ascii_lowercase);

    let keys: Vec<KeyRow> = table
        .entries()
        .into_iter()
        .filter(|entry| match &needle {
            Some(needle) => entry.name.to_ascii_lowercase().contains(needle.as_str()),
            None => true,
        })
        .map(KeyRow::from)
        .collect();

    ListOutput {
        version: table.version(),
        count: keys.len(),
        keys,
    }
}

pub fn run(filter: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let output = collect(&open_table(opts), filter);

    print_output(&output, opts, |out| {
        let mut tw = TabWriter::new(&[
            ("Code", Align::Right),
            ("Name", Align::Left),
            ("Short name", Align::Left),
        ]);
        for key in &out.keys {
            tw.row([key.code.to_string(), key.name.to_string(), key.short_name.clone()]);
        }
        tw.print()?;
        println!("\n{} keys ({} table)", out.count, out.version);
        Ok(())
    })
}
