//! Output formatting (JSON/text) for configuration elements.

mod printable;

pub use printable::{ConnectorView, SslCertificateView, SslHostView};

use std::io::Write;

use xmltree::Element;

use crate::attr::get_attr;

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Pretty print (for JSON).
    pub pretty: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Trait for types that can be printed.
pub trait Printable {
    /// Print as plain text.
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()>;

    /// Convert to JSON value.
    fn to_json(&self) -> serde_json::Value;

    /// Print in the specified format.
    fn print<W: Write>(
        &self,
        w: &mut W,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => self.print_text(w, opts),
            OutputFormat::Json => write_json(w, &self.to_json(), opts),
        }
    }
}

/// Print a search result.
///
/// Text output starts with an `<N> entries matched` line followed by the
/// entries, separated by one blank line. JSON output is a single array.
pub fn print_matched<W: Write, T: Printable>(
    w: &mut W,
    items: &[T],
    format: OutputFormat,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(w, "{} entries matched", items.len())?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    writeln!(w)?;
                }
                item.print_text(w, opts)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::Value::Array(items.iter().map(Printable::to_json).collect());
            write_json(w, &json, opts)
        }
    }
}

fn write_json<W: Write>(
    w: &mut W,
    json: &serde_json::Value,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    if opts.pretty {
        serde_json::to_writer_pretty(&mut *w, json)?;
    } else {
        serde_json::to_writer(&mut *w, json)?;
    }
    writeln!(w)
}

/// Write a `Label: value` line if the attribute is set.
pub(crate) fn write_param<W: Write>(
    w: &mut W,
    element: &Element,
    name: &str,
    label: &str,
) -> std::io::Result<()> {
    match get_attr(element, name) {
        Some(value) if !value.is_empty() => writeln!(w, "  {}: {}", label, value),
        _ => Ok(()),
    }
}

/// Collect every set attribute of `element` into a JSON object.
pub(crate) fn attrs_to_json(element: &Element) -> serde_json::Map<String, serde_json::Value> {
    element
        .attributes
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.clone(), serde_json::json!(v)))
        .collect()
}
