// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Audio(AudioError),
}

/// Specific error types for the audio backend.
///
/// A rejected play request is expected (not exceptional): it is the sole
/// driver of the session's `Blocked` state and is recovered by a user
/// gesture, never propagated as a hard failure.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No audio output device is available on this system.
    NoOutputDevice,

    /// The output device exists but refused the stream (config query or
    /// stream start failed).
    StreamRejected(String),

    /// The device reports a sample format we cannot render.
    Unsupported(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "No audio output device found"),
            AudioError::StreamRejected(msg) => write!(f, "Audio stream rejected: {}", msg),
            AudioError::Unsupported(msg) => write!(f, "Unsupported audio format: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
