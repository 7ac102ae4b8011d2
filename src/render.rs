//! Text rendering of sequences and trace steps.

use std::fmt;
use std::io::Write;

use crate::trace::{SortStats, Step, Trace};
use crate::Result;

/// Comma-delimited display of a sequence, every value followed by `,`
pub struct Rendered<'a>(pub &'a [i32]);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{value},")?;
        }
        Ok(())
    }
}

/// `[5, 7, 8, 9]` renders as `5,7,8,9,`; an empty slice as the empty string.
pub fn render(data: &[i32]) -> String {
    Rendered(data).to_string()
}

/// One trace line: `(<n>) <status>: (<a>,<b>) | i=<i>,j=<j> | <sequence>`
pub struct TraceLine<'a> {
    pub step: &'a Step,
    pub sequence: &'a [i32],
}

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.step;
        write!(
            f,
            "({}) {}: ({},{}) | i={},j={} | {}",
            step.number,
            step.status(),
            step.pair.0,
            step.pair.1,
            step.i,
            step.j,
            Rendered(self.sequence)
        )
    }
}

/// Drive `trace` to completion, writing one line per comparison.
pub fn write_trace<W: Write>(mut trace: Trace<'_>, out: &mut W) -> Result<SortStats> {
    while let Some(step) = trace.next() {
        let line = TraceLine {
            step: &step,
            sequence: trace.sequence(),
        };
        writeln!(out, "{line}")?;
    }
    Ok(trace.stats())
}
