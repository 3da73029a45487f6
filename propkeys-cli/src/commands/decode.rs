use std::io::Read;

use anyhow::Context;
use propkeys::{
    tables::{current, legacy, Entry, KeyTable},
    wire, TableVersion,
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::KeyRow,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct DecodeOutput {
    version: TableVersion,
    keys: Vec<KeyRow>,
}

fn read_payload(arg: &str) -> anyhow::Result<String> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read payload from stdin")?;
        Ok(text)
    } else {
        Ok(arg.to_string())
    }
}

fn decode<K: KeyTable>(text: &str) -> propkeys::Result<Vec<KeyRow>> {
    Ok(wire::decode_payload::<K>(text)?
        .into_iter()
        .map(|key| KeyRow::from(Entry::of(key)))
        .collect())
}

pub fn run(payload: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let text = read_payload(payload)?;
    let version = opts.table_version;

    let keys = match version {
        TableVersion::Current => decode::<current::PropertyKey>(&text),
        TableVersion::Legacy => decode::<legacy::PropertyKey>(&text),
    }
    .with_context(|| format!("failed to decode payload against the {version} table"))?;

    let output = DecodeOutput { version, keys };

    print_output(&output, opts, |out| {
        let mut tw = TabWriter::new(&[("Code", Align::Right), ("Name", Align::Left)]);
        for key in &out.keys {
            tw.row([key.code.to_string(), key.name.to_string()]);
        }
        tw.print()?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_by_version() {
        let payload = r#"{"dirtyProperties":[111]}"#;
        assert_eq!(
            decode::<current::PropertyKey>(payload).unwrap()[0].name,
            "kPropertyOnUp"
        );
        assert_eq!(
            decode::<legacy::PropertyKey>(payload).unwrap()[0].name,
            "kPropertyOpacity"
        );
        assert!(decode::<legacy::PropertyKey>("[175]").is_err());
    }
}
