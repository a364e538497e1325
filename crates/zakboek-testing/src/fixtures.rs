//! Fixtures for CHR statement generation.
//!
//! Builds statement payloads line by line so tests can state exactly which
//! bags a statement counts, without hand-writing separator soup.

/// Builder for CHR statement text.
///
/// # Example
/// ```
/// use zakboek_testing::fixtures::StatementBuilder;
///
/// let text = StatementBuilder::new("29-2-2024")
///     .with_bag(8412, "1,00")
///     .with_bag(8412, "0,75")
///     .build();
/// ```
pub struct StatementBuilder {
    date: String,
    lines: Vec<String>,
}

impl StatementBuilder {
    /// Start a statement with the given processing date (`d-m-Y`, unpadded).
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            lines: Vec::new(),
        }
    }

    /// Add a counted bag line.
    ///
    /// The amount is written the way CHR writes it, with a decimal comma
    /// (e.g. `"1,75"`).
    pub fn with_bag(mut self, id: u64, amount: &str) -> Self {
        self.lines
            .push(format!("2;891;0;0;0;{};0;0;110;0;{}", id, amount));
        self
    }

    /// Add a crate line (kind code 150), which the parser must skip.
    pub fn with_crate_line(mut self, id: u64, amount: &str) -> Self {
        self.lines
            .push(format!("2;891;0;0;0;{};0;0;150;0;{}", id, amount));
        self
    }

    /// Add a verbatim line, for malformed-input tests.
    pub fn with_raw_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Render the statement: header, detail lines, trailer.
    pub fn build(&self) -> String {
        let mut out = vec![format!("0;CHR;STATEMENT;038;1;0;0;{}", self.date)];
        out.extend(self.lines.iter().cloned());
        out.push(format!("9;TRAILER;{}", self.lines.len()));
        out.join("\n")
    }
}

/// A small statement with known figures: bags 8412 (1.75 across two lines)
/// and 8413 (0.25), plus a crate line the parser skips. Total 2.00 over
/// 2 bags, processed 2024-02-29.
pub fn sample_statement() -> String {
    StatementBuilder::new("29-2-2024")
        .with_bag(8412, "1,00")
        .with_bag(8413, "0,25")
        .with_crate_line(9001, "4,00")
        .with_bag(8412, "0,75")
        .build()
}
