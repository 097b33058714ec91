//! Output line model: rendered statements grouped by user blank lines.

/// One rendered statement (or block) at print time.
///
/// `buffer` carries the statement text including its indentation prefix. The
/// trailing comment stays in its own field so a group of lines can
/// column-align it before serialization.
#[derive(Debug, Clone, Default)]
pub(crate) struct Line {
    pub(crate) leading: String,
    pub(crate) buffer: String,
    pub(crate) trailing: String,
}

impl Line {
    pub(crate) fn write_into(&self, out: &mut String) {
        out.push_str(&self.leading);
        out.push_str(&self.buffer);
        if !self.trailing.is_empty() {
            out.push(' ');
            out.push_str(&self.trailing);
        }
        out.push('\n');
    }

    /// Width of the last visual line of the buffer, in characters.
    fn visible_width(&self) -> usize {
        self.buffer.rsplit('\n').next().unwrap_or("").chars().count()
    }
}

pub(crate) type Lines = Vec<Line>;

/// Lines partitioned at user blank lines.
///
/// Trailing-comment alignment never crosses a group boundary, preserving the
/// visual separation the blank line signaled.
#[derive(Debug, Default)]
pub(crate) struct GroupedLines {
    groups: Vec<Lines>,
}

impl GroupedLines {
    pub(crate) fn push(&mut self, lines: Lines) {
        if !lines.is_empty() {
            self.groups.push(lines);
        }
    }

    /// Pads buffers so every trailing comment in a group starts at the same
    /// column.
    pub(crate) fn align(&mut self) {
        for group in &mut self.groups {
            if !group.iter().any(|line| !line.trailing.is_empty()) {
                continue;
            }
            let width = group.iter().map(Line::visible_width).max().unwrap_or(0);
            for line in group.iter_mut().filter(|line| !line.trailing.is_empty()) {
                let pad = width - line.visible_width();
                line.buffer.push_str(&" ".repeat(pad));
            }
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            for line in group {
                line.write_into(&mut out);
            }
        }
        out
    }

    #[cfg(test)]
    fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }
}
