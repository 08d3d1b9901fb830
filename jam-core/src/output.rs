//! Case output
//!
//! Renders each solution as `Case #k: value` (or `Case #k:` and the value on
//! the next line), writes it and flushes before the next solution is pulled.
//! A broken pipe on the sink ends emission quietly.

use std::fmt;
use std::io::{self, Write};

use jam_config::OutputConfig;
use tracing::{debug, trace};

use crate::target;

/// Where the solution goes relative to the `Case #k:` prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseLayout {
    /// `Case #k: value`
    #[default]
    SameLine,
    /// `Case #k:` then `value` on its own line
    NextLine,
}

impl CaseLayout {
    pub fn from_insert_newline(insert_newline: bool) -> Self {
        if insert_newline {
            CaseLayout::NextLine
        } else {
            CaseLayout::SameLine
        }
    }

    fn separator(&self) -> char {
        match self {
            CaseLayout::SameLine => ' ',
            CaseLayout::NextLine => '\n',
        }
    }
}

impl From<OutputConfig> for CaseLayout {
    fn from(config: OutputConfig) -> Self {
        Self::from_insert_newline(config.insert_newline)
    }
}

/// 1-based case number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseIndex(usize);

impl CaseIndex {
    pub fn first() -> Self {
        CaseIndex(1)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        CaseIndex(self.0 + 1)
    }
}

impl Default for CaseIndex {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for CaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}", self.0)
    }
}

/// Summary of an emission run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emitted {
    /// Complete cases written and flushed
    pub cases: usize,
    /// The sink went away (broken pipe) before the solutions ran out
    pub interrupted: bool,
}

/// Render one case, including the trailing newline
pub fn format_case(case: CaseIndex, solution: &impl fmt::Display, layout: CaseLayout) -> String {
    format!("{}:{}{}\n", case, layout.separator(), solution)
}

/// Write every solution as a numbered case, flushing after each one
///
/// `insert_newline` puts the solution on the line after `Case #k:`.
pub fn format_and_emit<I, S, E, W>(solutions: I, sink: &mut W, insert_newline: bool) -> Result<Emitted, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: fmt::Display,
    E: From<io::Error>,
    W: Write + ?Sized,
{
    emit_cases(solutions, sink, CaseLayout::from_insert_newline(insert_newline))
}

/// Write every solution as a numbered case in the given layout
///
/// The next solution is only pulled once the previous case is written and
/// flushed. A solution error is returned unchanged. A broken pipe stops
/// emission and is reported through [`Emitted::interrupted`], not as an
/// error; any other write error is returned.
pub fn emit_cases<I, S, E, W>(solutions: I, sink: &mut W, layout: CaseLayout) -> Result<Emitted, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: fmt::Display,
    E: From<io::Error>,
    W: Write + ?Sized,
{
    let mut emitted = Emitted::default();
    let mut case = CaseIndex::first();

    for solution in solutions {
        let line = format_case(case, &solution?, layout);
        match write_line(sink, &line) {
            Ok(()) => {
                trace!(target: target::OUTPUT, case = case.get(), "case written");
            }
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                debug!(target: target::OUTPUT, case = case.get(), "output closed, stopping");
                emitted.interrupted = true;
                return Ok(emitted);
            }
            Err(err) => return Err(err.into()),
        }
        emitted.cases += 1;
        case = case.next();
    }

    debug!(target: target::OUTPUT, cases = emitted.cases, "all cases written");
    Ok(emitted)
}

/// One write for the whole line so a case is never split across writes
fn write_line<W: Write + ?Sized>(sink: &mut W, line: &str) -> io::Result<()> {
    sink.write_all(line.as_bytes())?;
    sink.flush()
}
