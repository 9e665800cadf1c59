//! DTMF feedback tones.
//!
//! `ToneGenerator` owns the lazily initialized audio handle and turns a
//! symbol into two sine oscillations scheduled on the backend's clock. The
//! generator never waits for a tone to finish; overlapping presses produce
//! overlapping tones.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::ToneConfig;
use crate::error::KeypadError;
use crate::symbol::CanonicalSymbol;

/// Low/high frequency pair of a DTMF tone, in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub low: f32,
    pub high: f32,
}

impl ToneSpec {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }
}

/// Symbol → frequency pair table.
#[derive(Debug, Clone)]
pub struct ToneTable {
    tones: AHashMap<CanonicalSymbol, ToneSpec>,
}

const ROWS: [f32; 4] = [697.0, 770.0, 852.0, 941.0];
const COLUMNS: [f32; 3] = [1209.0, 1336.0, 1477.0];

impl ToneTable {
    /// The standard DTMF grid: keypad row picks the low tone, column the high one.
    pub fn dtmf() -> Self {
        let tones = CanonicalSymbol::ALL
            .iter()
            .enumerate()
            .map(|(position, symbol)| {
                (*symbol, ToneSpec::new(ROWS[position / 3], COLUMNS[position % 3]))
            })
            .collect();
        Self { tones }
    }

    /// A table holding only the given entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (CanonicalSymbol, ToneSpec)>) -> Self {
        Self {
            tones: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, symbol: CanonicalSymbol) -> Result<ToneSpec, KeypadError> {
        self.tones
            .get(&symbol)
            .copied()
            .ok_or(KeypadError::UnknownSymbol(symbol))
    }

    pub fn set(&mut self, symbol: CanonicalSymbol, spec: ToneSpec) {
        self.tones.insert(symbol, spec);
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::dtmf()
    }
}

/// A fully resolved tone ready for the audio backend.
///
/// `start` and `stop` are absolute times in seconds on the backend clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub symbol: CanonicalSymbol,
    pub spec: ToneSpec,
    pub gain: f32,
    pub start: f64,
    pub stop: f64,
}

/// Audio output primitive the generator schedules tones on.
pub trait AudioBackend {
    /// Backend-specific context, created once and reused.
    type Handle;

    fn initialize(&mut self) -> Result<Self::Handle, KeypadError>;

    /// Current time on the audio clock, in seconds.
    fn now(&self, handle: &Self::Handle) -> f64;

    /// Start two sine oscillators at `tone.spec` frequencies, mixed at
    /// `tone.gain`, between `tone.start` and `tone.stop`.
    fn schedule(&mut self, handle: &Self::Handle, tone: &ScheduledTone) -> Result<(), KeypadError>;
}

/// Lifecycle of the shared audio handle.
#[derive(Debug)]
pub enum AudioState<H> {
    Uninitialized,
    Ready(H),
    /// The last attempt failed; the next `play` retries initialization.
    Failed,
}

impl<H> AudioState<H> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// What happened to a `play` request that did not hit an internal error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneOutcome {
    Scheduled(ScheduledTone),
    /// Audio was unavailable; the keypress otherwise proceeds normally.
    Degraded,
}

pub struct ToneGenerator<B: AudioBackend> {
    backend: B,
    state: AudioState<B::Handle>,
    table: ToneTable,
    gain: f32,
    latency: f64,
    duration: f64,
}

impl<B: AudioBackend> ToneGenerator<B> {
    /// Generator with the DTMF table and default timing.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ToneTable::dtmf(), &ToneConfig::default())
    }

    pub fn with_config(backend: B, table: ToneTable, config: &ToneConfig) -> Self {
        Self {
            backend,
            state: AudioState::Uninitialized,
            table,
            gain: config.gain,
            latency: config.latency_ms as f64 / 1000.0,
            duration: config.duration_ms as f64 / 1000.0,
        }
    }

    pub fn state(&self) -> &AudioState<B::Handle> {
        &self.state
    }

    pub fn table(&self) -> &ToneTable {
        &self.table
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Schedule the tone for `symbol`.
    ///
    /// Fails only with `UnknownSymbol`. Audio failures are logged, reset the
    /// handle and yield `ToneOutcome::Degraded`.
    pub fn play(&mut self, symbol: CanonicalSymbol) -> Result<ToneOutcome, KeypadError> {
        let spec = self.table.get(symbol).map_err(|e| {
            error!(%symbol, "tone table has no entry for resolved symbol");
            e
        })?;

        if !self.state.is_ready() {
            match self.backend.initialize() {
                Ok(handle) => {
                    info!("audio output initialized");
                    self.state = AudioState::Ready(handle);
                }
                Err(e) => {
                    warn!(error = %e, "audio initialization failed");
                    self.state = AudioState::Failed;
                    return Ok(ToneOutcome::Degraded);
                }
            }
        }

        let AudioState::Ready(handle) = &self.state else {
            return Ok(ToneOutcome::Degraded);
        };

        let start = self.backend.now(handle) + self.latency;
        let tone = ScheduledTone {
            symbol,
            spec,
            gain: self.gain,
            start,
            stop: start + self.duration,
        };

        match self.backend.schedule(handle, &tone) {
            Ok(()) => {
                debug!(%symbol, low = spec.low, high = spec.high, start, "tone scheduled");
                Ok(ToneOutcome::Scheduled(tone))
            }
            Err(e) => {
                warn!(error = %e, "tone scheduling failed, dropping audio handle");
                self.state = AudioState::Failed;
                Ok(ToneOutcome::Degraded)
            }
        }
    }
}

/// Backend that only logs what it would play. Its clock starts at
/// initialization.
#[derive(Debug, Default)]
pub struct LoggingBackend;

impl AudioBackend for LoggingBackend {
    type Handle = Instant;

    fn initialize(&mut self) -> Result<Instant, KeypadError> {
        Ok(Instant::now())
    }

    fn now(&self, handle: &Instant) -> f64 {
        handle.elapsed().as_secs_f64()
    }

    fn schedule(&mut self, _handle: &Instant, tone: &ScheduledTone) -> Result<(), KeypadError> {
        info!(
            symbol = %tone.symbol,
            low = tone.spec.low,
            high = tone.spec.high,
            gain = tone.gain,
            start = tone.start,
            stop = tone.stop,
            "play tone"
        );
        Ok(())
    }
}
