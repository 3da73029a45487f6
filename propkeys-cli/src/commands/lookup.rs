use propkeys::{tables::Entry, PropertyKeyTable, TableConfig, TableVersion};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{is_code, open_table, parse_code, KeyRow},
    output::{format_code, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct LookupResult {
    version: TableVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<KeyRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn resolve(table: &PropertyKeyTable, query: &str) -> anyhow::Result<Entry> {
    if is_code(query) {
        let code = parse_code(query)?;
        Ok(Entry {
            name: table.name_of(code)?,
            code,
        })
    } else {
        Ok(table.entry_of(query.trim())?)
    }
}

pub fn run(query: &str, all: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    if !all {
        let table = open_table(opts);
        let entry = resolve(&table, query)?;
        let result = LookupResult {
            version: table.version(),
            key: Some(KeyRow::from(entry)),
            error: None,
        };

        return print_output(&result, opts, |res| {
            if let Some(key) = &res.key {
                println!("Name:       {}", key.name);
                println!("Short name: {}", key.short_name);
                println!("Code:       {}", format_code(key.code));
                println!("Table:      {}", res.version);
            }
            Ok(())
        });
    }

    let results: Vec<LookupResult> = TableVersion::all()
        .map(|version| {
            let config = TableConfig {
                version,
                ..opts.table_config()
            };
            match resolve(&PropertyKeyTable::with_config(config), query) {
                Ok(entry) => LookupResult {
                    version,
                    key: Some(KeyRow::from(entry)),
                    error: None,
                },
                Err(e) => LookupResult {
                    version,
                    key: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    print_output(&results, opts, |results| {
        let mut tw = TabWriter::new(&[
            ("Table", Align::Left),
            ("Code", Align::Right),
            ("Name", Align::Left),
        ]);
        for res in results {
            match &res.key {
                Some(key) => tw.row([
                    res.version.to_string(),
                    key.code.to_string(),
                    key.name.to_string(),
                ]),
                None => tw.row([res.version.to_string(), "-".to_string(), "-".to_string()]),
            }
        }
        tw.print()?;
        Ok(())
    })
}
