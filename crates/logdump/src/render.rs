use std::fmt::Write;

use crate::describe::Describe;
use crate::scan::PropertyScan;
use crate::shape::Shape;

/// Dump a value in compact mode: no whitespace anywhere.
pub fn dump<T: Describe + ?Sized>(value: &T) -> String {
    render(&value.describe(), &Layout::compact())
}

/// Dump a value in debug mode: one child per line, tab indentation.
///
/// ```
/// assert_eq!(logdump::dump_debug(&vec![1, 2]), "[\n\t1,\n\t2\n]");
/// ```
pub fn dump_debug<T: Describe + ?Sized>(value: &T) -> String {
    render(&value.describe(), &Layout::debug("\t"))
}

/// Dump a value in debug mode with a caller-supplied indent unit.
pub fn dump_indented<T: Describe + ?Sized>(value: &T, indent: &str) -> String {
    render(&value.describe(), &Layout::debug(indent))
}

/// Indent context threaded through the recursive descent, never mutated.
struct Layout<'a> {
    debug: bool,
    indent: &'a str,
}

impl<'a> Layout<'a> {
    fn compact() -> Layout<'static> {
        Layout {
            debug: false,
            indent: "",
        }
    }

    fn debug(indent: &'a str) -> Layout<'a> {
        Layout {
            debug: true,
            indent,
        }
    }

    fn break_line(&self, out: &mut String, depth: usize) {
        if !self.debug {
            return;
        }
        out.push('\n');
        for _ in 0..depth {
            out.push_str(self.indent);
        }
    }
}

fn render(shape: &Shape<'_>, layout: &Layout<'_>) -> String {
    let mut out = String::new();
    // Depth starts at 1 for the outermost value's children.
    write_shape(&mut out, shape, layout, 1);
    out
}

fn write_shape(out: &mut String, shape: &Shape<'_>, layout: &Layout<'_>, depth: usize) {
    match shape {
        Shape::Null => out.push_str("null"),
        Shape::Scalar(scalar) => {
            let _ = write!(out, "{}", scalar);
        }
        Shape::Text(text) => write_quoted(out, text),
        Shape::Sequence(items) => write_sequence(out, items, layout, depth),
        Shape::Entries(entries) => {
            let pairs: Vec<KeyValue<'_>> = entries
                .iter()
                .map(|(key, value)| KeyValue {
                    key: *key,
                    value: *value,
                })
                .collect();
            let items: Vec<&dyn Describe> = pairs.iter().map(|pair| pair as &dyn Describe).collect();
            write_sequence(out, &items, layout, depth);
        }
        Shape::Composite(scan) => match scan.text_override() {
            Some(text) => write_quoted(out, text),
            None => write_object(out, scan, layout, depth),
        },
    }
}

fn write_sequence(out: &mut String, items: &[&dyn Describe], layout: &Layout<'_>, depth: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        layout.break_line(out, depth);
        write_shape(out, &item.describe(), layout, depth + 1);
    }
    layout.break_line(out, depth - 1);
    out.push(']');
}

fn write_object(out: &mut String, scan: &PropertyScan<'_>, layout: &Layout<'_>, depth: usize) {
    if scan.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (index, (name, value)) in scan.entries().enumerate() {
        if index > 0 {
            out.push(',');
        }
        layout.break_line(out, depth);
        write_quoted(out, name);
        out.push(':');
        if layout.debug {
            out.push(' ');
        }
        write_shape(out, &value.describe(), layout, depth + 1);
    }
    layout.break_line(out, depth - 1);
    out.push('}');
}

/// Backslash and double-quote are the only escapes; everything else,
/// control characters included, passes through raw.
fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out.push('"');
}

/// Flattened map entry, re-entering the pipeline as a composite with
/// exactly two logical properties.
struct KeyValue<'a> {
    key: &'a dyn Describe,
    value: &'a dyn Describe,
}

impl Describe for KeyValue<'_> {
    fn describe(&self) -> Shape<'_> {
        let mut scan = PropertyScan::new();
        scan.field("key", &self.key).field("value", &self.value);
        Shape::Composite(scan)
    }
}
