use propkeys::{
    diff::{diff, TableDiff},
    TableVersion,
};

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

/// Diff `from` against `to`, dropping the renumbered list unless `show_renumbered`.
fn compare(from: TableVersion, to: TableVersion, show_renumbered: bool) -> TableDiff {
    let mut result = diff(from, to);
    if !show_renumbered {
        result.renumbered.clear();
    }
    result
}

pub fn run(
    from: TableVersion,
    to: TableVersion,
    show_renumbered: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let result = compare(from, to, show_renumbered);

    log::info!(
        "{} -> {}: {} added, {} removed",
        from,
        to,
        result.added.len(),
        result.removed.len()
    );

    print_output(&result, opts, |d| {
        if d.is_identical() {
            println!("{} and {} are identical", d.from, d.to);
            return Ok(());
        }

        for (title, entries) in [("Added", &d.added), ("Removed", &d.removed)] {
            if entries.is_empty() {
                continue;
            }
            println!("{title}:");
            let mut tw =
                TabWriter::new(&[("Code", Align::Right), ("Name", Align::Left)]).indent("  ");
            for entry in entries {
                tw.row([entry.code.to_string(), entry.name.to_string()]);
            }
            tw.print()?;
            println!();
        }

        if !d.renumbered.is_empty() {
            println!("Renumbered:");
            let mut tw = TabWriter::new(&[
                (d.from.tag(), Align::Right),
                (d.to.tag(), Align::Right),
                ("Name", Align::Left),
            ])
            .indent("  ");
            for r in &d.renumbered {
                tw.row([r.from.to_string(), r.to.to_string(), r.name.to_string()]);
            }
            tw.print()?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_with_renumbered() {
        let d = compare(TableVersion::Legacy, TableVersion::Current, true);
        assert_eq!(d.added.len(), 7);
        assert!(d.removed.is_empty());
        assert_eq!(d.renumbered.len(), 173);
    }

    #[test]
    fn test_compare_without_renumbered() {
        let d = compare(TableVersion::Current, TableVersion::Legacy, false);
        assert!(d.renumbered.is_empty());
        assert!(d.added.is_empty());
        assert_eq!(d.removed.len(), 7);
        assert!(!d.is_identical());

        // Same version stays identical either way
        assert!(compare(TableVersion::Legacy, TableVersion::Legacy, false).is_identical());
    }
}
