//! Line-level helpers shared by both renderers.
//!
//! The dump primitive offers no per-node style control, so the renderers
//! patch its output line by line. These helpers keep that patching in one
//! place: quote stripping, comma-list splitting, folded-block re-rendering,
//! and the double-quote preference pass.

/// Split a comma-separated input into trimmed, non-empty elements.
pub fn split_csv(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}

/// Strip one leading and one trailing quote character (single or double),
/// each independently of the other.
pub fn strip_quotes(value: &str) -> &str {
    let value = trim_one(value, |v| v.strip_prefix('"').or_else(|| v.strip_prefix('\'')));
    trim_one(value, |v| v.strip_suffix('"').or_else(|| v.strip_suffix('\'')))
}

fn trim_one<'a>(value: &'a str, strip: impl Fn(&'a str) -> Option<&'a str>) -> &'a str {
    strip(value).unwrap_or(value)
}

/// Column of the first non-whitespace character, or `None` for blank lines.
pub fn indent_of(line: &str) -> Option<usize> {
    line.char_indices().find(|(_, c)| !c.is_whitespace()).map(|(index, _)| index)
}

/// True for the digits/dot/colon shorthand of a port mapping, e.g.
/// `8080:8080` or `127.0.0.1:8080:8080`.
pub fn is_port_shorthand(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ':')
}

/// Re-render a multi-line value as a strip-chomped folded block scalar.
///
/// Each input line is trimmed; a blank input line becomes two blank output
/// lines (a paragraph break in folded style); list-marker lines keep their
/// breaks by sitting two spaces deeper than the continuation indent.
pub fn fold_block_scalar(key: &str, text: &str) -> Vec<String> {
    let mut lines = vec![format!("{key}: >-")];
    for raw in text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            lines.push(String::new());
        } else if trimmed.starts_with('-') {
            lines.push(format!("    {trimmed}"));
        } else {
            lines.push(format!("  {trimmed}"));
        }
    }
    lines
}

/// Rewrite one dumper-emitted single-quoted scalar to double-quoted form.
///
/// Only simple values with no embedded quotes or backslashes are touched,
/// since those are the only ones whose escaping is identical in both styles.
/// Returns `None` when the line carries no such scalar.
fn requote_scalar(line: &str) -> Option<String> {
    let indent = indent_of(line).unwrap_or(0);
    let rest = &line[indent..];
    // Sequence items first: the dumped value may itself contain `": "`,
    // which must not be mistaken for a key separator.
    let value_at = if rest.starts_with("- ") {
        indent + 2
    } else if let Some(position) = rest.find(": ") {
        indent + position + 2
    } else {
        return None;
    };
    let inner = line[value_at..].strip_prefix('\'')?.strip_suffix('\'')?;
    if inner.contains('\'') || inner.contains('"') || inner.contains('\\') {
        return None;
    }
    Some(format!("{}\"{inner}\"", &line[..value_at]))
}

/// Apply the double-quote scalar preference the dump primitive lacks.
///
/// Walks the dumped lines, skipping the bodies of block scalars (their lines
/// are raw text, not YAML), and converts eligible single-quoted scalars to
/// double-quoted form.
pub fn apply_double_quote_preference(lines: &mut [String]) {
    let mut block_indent: Option<usize> = None;
    for line in lines.iter_mut() {
        let indent = indent_of(line);
        if let Some(scalar_indent) = block_indent {
            match indent {
                None => continue,
                Some(column) if column > scalar_indent => continue,
                _ => block_indent = None,
            }
        }
        if let Some(rewritten) = requote_scalar(line) {
            *line = rewritten;
        } else if opens_block_scalar(line) {
            block_indent = indent;
        }
    }
}

fn opens_block_scalar(line: &str) -> bool {
    let trimmed = line.trim_end();
    [": |", ": |-", ": |+", ": >", ": >-", ": >+"]
        .iter()
        .any(|suffix| trimmed.ends_with(suffix))
}
