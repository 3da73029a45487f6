use anyhow::Context;
use propkeys::{diff::translate, PropertyKeyTable, TableVersion};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::parse_code,
    output::{format_code, print_output},
};

#[derive(Debug, Serialize)]
struct Translation {
    name: &'static str,
    from: TableVersion,
    from_code: u16,
    to: TableVersion,
    to_code: u16,
}

/// Translate the code spelled `code` (decimal or hex) from `from` to `to`.
fn build(code: &str, from: TableVersion, to: TableVersion) -> anyhow::Result<Translation> {
    let from_code = parse_code(code)?;
    let to_code = translate(from_code, from, to)
        .with_context(|| format!("cannot translate code {from_code} from {from} to {to}"))?;

    Ok(Translation {
        name: PropertyKeyTable::new(from).name_of(from_code)?,
        from,
        from_code,
        to,
        to_code,
    })
}

pub fn run(
    code: &str,
    from: TableVersion,
    to: TableVersion,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let result = build(code, from, to)?;

    print_output(&result, opts, |t| {
        println!("{}", t.name);
        println!("  {:<8} {}", t.from.tag(), format_code(t.from_code));
        println!("  {:<8} {}", t.to.tag(), format_code(t.to_code));
        Ok(())
    })
}
