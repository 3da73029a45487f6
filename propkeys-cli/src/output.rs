use std::io::{self, Write};

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
///
/// Errors from `display_fn` are returned to the caller.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
        Ok(())
    } else {
        display_fn(data)
    }
}

/// Format a code the way the native headers spell it: decimal plus hex.
pub fn format_code(code: u16) -> String {
    format!("{code:>3} (0x{code:02x})")
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Borderless, whitespace-aligned table for key listings.
pub struct TabWriter {
    table: Table,
    indent: String,
}

impl TabWriter {
    /// Create a writer with `(header, alignment)` columns.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(columns.iter().map(|(name, _)| *name));

        // Two spaces between columns, none at the outer edges
        let last = columns.len().saturating_sub(1);
        for (i, (_, align)) in columns.iter().enumerate() {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(match align {
                    Align::Left => CellAlignment::Left,
                    Align::Right => CellAlignment::Right,
                });
                col.set_padding((u16::from(i != 0), u16::from(i != last)));
            }
        }

        Self {
            table,
            indent: String::new(),
        }
    }

    /// Prefix every line with `prefix`.
    pub fn indent(mut self, prefix: &str) -> Self {
        self.indent = prefix.to_string();
        self
    }

    /// Add a row in column order.
    pub fn row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.table
            .add_row(values.into_iter().map(|v| v.to_string()).collect::<Vec<_>>());
    }

    /// Write the table to `out`, trimming trailing whitespace.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for line in self.table.to_string().lines() {
            writeln!(out, "{}{}", self.indent, line.trim_end())?;
        }
        Ok(())
    }

    /// Print the table to stdout.
    ///
    /// # Errors
    /// Returns the underlying error if stdout cannot be written, e.g. a closed pipe.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_code() {
        assert_eq!(format_code(0), "  0 (0x00)");
        assert_eq!(format_code(181), "181 (0xb5)");
    }

    #[test]
    fn test_tabwriter_alignment() {
        let mut tw = TabWriter::new(&[("Code", Align::Right), ("Name", Align::Left)]).indent("  ");
        tw.row(["0", "kPropertyScrollDirection"]);
        tw.row(["181", "kPropertyWrap"]);

        let mut out = Vec::new();
        tw.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("  ")));
        assert!(lines[1].contains("  0  kPropertyScrollDirection"));
        assert!(lines[2].contains("181  kPropertyWrap"));
    }

    #[test]
    fn test_tabwriter_reports_write_errors() {
        let mut tw = TabWriter::new(&[("Code", Align::Right), ("Name", Align::Left)]);
        tw.row(["116", "kPropertyOpacity"]);

        let err = tw.write_to(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_print_output_propagates_display_errors() {
        let opts = GlobalOptions::try_parse_from(["propkeys"]).unwrap();
        let mut tw = TabWriter::new(&[("Code", Align::Right)]);
        tw.row(["0"]);

        let result = print_output(&0u16, &opts, |_| Ok(tw.write_to(&mut ClosedPipe)?));
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
