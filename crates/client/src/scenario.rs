//! The fixed demo duel.
use std::io::{self, Write};

use anyhow::Result;
use duel_core::{
    BuildError, CombatError, Combatant, DuelConfig, DuelError, ErrorSeverity, LoggingCombatant,
    Session, SessionError, SessionSnapshot, SnapshotHistory,
};

/// Writer handle onto the process's standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutWriter;

impl Write for StdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// What the duel left behind.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub history: SnapshotHistory,
    /// Session state after the final restore.
    pub restored: SessionSnapshot,
}

/// Play the demo duel, writing the transcript and strike lines to `out`.
///
/// Both combatants strike once, the session is saved, the first strikes
/// again, and the saved state is restored.
pub fn run<W>(duel: &DuelConfig, mut out: W) -> Result<ScenarioOutcome>
where
    W: Write + Clone + 'static,
{
    let first = LoggingCombatant::with_writer(duel.first.build()?, out.clone());
    let second = LoggingCombatant::with_writer(duel.second.build()?, out.clone());

    let mut session = Session::new();
    session.set_first(&first);
    session.set_second(&second);
    session.start_battle()?;
    tracing::info!(first = %first.kind(), second = %second.kind(), "duel started");

    writeln!(out, "{session}")?;

    first.strike()?;
    second.strike()?;
    writeln!(out, "{session}")?;

    let mut history = SnapshotHistory::new();
    history.record(session.save()?);

    first.strike()?;
    writeln!(out, "{session}")?;

    session.restore(history.last())?;
    writeln!(out, "After restore:")?;
    writeln!(out, "{session}")?;

    let restored = session.save()?;
    tracing::info!(snapshots = history.len(), "duel finished");

    Ok(ScenarioOutcome { history, restored })
}

/// Severity and code of the duel error behind `err`, if there is one.
pub fn classify(err: &anyhow::Error) -> Option<(ErrorSeverity, &'static str)> {
    fn describe(err: &impl DuelError) -> (ErrorSeverity, &'static str) {
        (err.severity(), err.error_code())
    }

    err.downcast_ref::<CombatError>()
        .map(describe)
        .or_else(|| err.downcast_ref::<SessionError>().map(describe))
        .or_else(|| err.downcast_ref::<BuildError>().map(describe))
}
