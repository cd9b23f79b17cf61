//! Line/column tracking over byte offsets.

/// Forward-only cursor converting byte offsets to 1-based line/column.
///
/// Newline starts a new line at column 1; carriage return does not move
/// the cursor; every other character (tab included) advances the column
/// by one.
#[derive(Clone, Debug)]
pub(crate) struct LineTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> LineTracker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance to `target` and return the position there.
    ///
    /// Offsets behind the cursor return the current position.
    pub(crate) fn advance_to(&mut self, target: usize) -> (u32, u32) {
        if target > self.offset {
            let end = target.min(self.source.len());
            let skipped = self.source.get(self.offset..end).unwrap_or_default();
            for ch in skipped.chars() {
                match ch {
                    '\n' => {
                        self.line += 1;
                        self.column = 1;
                    }
                    '\r' => {}
                    _ => self.column += 1,
                }
            }
            self.offset = end;
        }
        (self.line, self.column)
    }
}
