//! Save/load of a running engine.
//!
//! A snapshot holds everything needed to rebuild an engine: the grid as a
//! row-major matrix of raw token ids (0 = empty), the active index, the
//! elapsed move count, and the config.
//!
//! ## Format
//!
//! ```text
//! magic   4 bytes  "CNK1"
//! version u16 LE   1
//! payload bincode  Snapshot
//! ```
//!
//! Nothing may follow the payload.
//!
//! Loading validates the decoded config and checks the state against it, so
//! a snapshot that decodes but doesn't fit its own config is reported as
//! [`PersistError::CorruptState`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameConfig, GameState};
use crate::error::{EngineError, PersistError};
use crate::rules::BoardEngine;

const MAGIC: &[u8; 4] = b"CNK1";
const VERSION: u16 = 1;
const MAX_PAYLOAD_BYTES: u64 = 16 * 1024 * 1024;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_PAYLOAD_BYTES)
}

/// Persisted engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row-major raw token ids, 0 = empty.
    pub grid: Vec<Vec<u8>>,
    pub active: usize,
    pub elapsed: u64,
    pub config: GameConfig,
}

impl Snapshot {
    /// Capture a started engine.
    pub fn capture(engine: &BoardEngine) -> Result<Self, EngineError> {
        let state = engine.state()?;
        Ok(Self {
            grid: state.board.to_rows(),
            active: state.active,
            elapsed: state.elapsed,
            config: engine.config().clone(),
        })
    }

    /// Rebuild a started engine from this snapshot.
    pub fn restore(self) -> Result<BoardEngine, PersistError> {
        let mut engine = BoardEngine::new(self.config)
            .map_err(|e| PersistError::CorruptState(format!("invalid config: {e}")))?;

        let board = Board::from_rows(&self.grid)
            .ok_or_else(|| PersistError::CorruptState("ragged grid".to_string()))?;
        let state = GameState {
            board,
            active: self.active,
            elapsed: self.elapsed,
        };

        engine.start(Some(state)).map_err(|e| match e {
            EngineError::IllegalState(msg) => PersistError::CorruptState(msg),
            other => PersistError::Engine(other),
        })?;
        Ok(engine)
    }

    /// Write header and payload.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), PersistError> {
        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        codec().serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read and check header, then decode the payload.
    ///
    /// The snapshot must be the whole stream; bytes after the payload are
    /// rejected.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, PersistError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(PersistError::BadMagic);
        }

        let mut version = [0u8; 2];
        reader.read_exact(&mut version)?;
        let version = u16::from_le_bytes(version);
        if version != VERSION {
            return Err(PersistError::UnsupportedVersion(version));
        }

        let snapshot = codec().deserialize_from(&mut reader)?;

        let mut rest = [0u8; 1];
        if reader.read(&mut rest)? != 0 {
            return Err(PersistError::TrailingData);
        }
        Ok(snapshot)
    }
}

impl BoardEngine {
    /// Serialize this engine to a writer.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        Snapshot::capture(self)?.write_to(writer)
    }

    /// Serialize this engine to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        let mut buf = Vec::new();
        self.save(&mut buf)?;
        Ok(buf)
    }

    /// Serialize this engine to a file, replacing it.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let file = File::create(path)?;
        self.save(BufWriter::new(file))
    }

    /// Rebuild an engine from a reader.
    pub fn load<R: Read>(reader: R) -> Result<Self, PersistError> {
        Snapshot::read_from(reader)?.restore()
    }

    /// Rebuild an engine from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        Self::load(bytes)
    }

    /// Rebuild an engine from a file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }
}
