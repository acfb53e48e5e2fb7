//! Shared types for the command facade and the state holder.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// The two files the host keeps UI state in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileId {
    #[serde(rename = "greet.txt")]
    GreetFile,
    #[serde(rename = "name.txt")]
    NameFile,
}

impl FileId {
    pub const ALL: [FileId; 2] = [FileId::GreetFile, FileId::NameFile];

    /// Logical path passed to the host's `read`/`write` commands.
    pub fn path(self) -> &'static str {
        match self {
            FileId::GreetFile => "greet.txt",
            FileId::NameFile => "name.txt",
        }
    }

    /// The state field backed by this file.
    pub fn field(self) -> StateField {
        match self {
            FileId::GreetFile => StateField::Greet,
            FileId::NameFile => StateField::Name,
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Identifies a field of [`crate::GlobalState`] in change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    Name,
    Greet,
}

/// Synthesised audio: raw samples and their sample rate.
///
/// Passed through from the host untouched. Encoded on the wire as the pair
/// `[[samples...], sample_rate]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResult(pub Vec<f32>, pub u32);

impl VoiceResult {
    pub fn samples(&self) -> &[f32] {
        &self.0
    }

    pub fn sample_rate(&self) -> u32 {
        self.1
    }
}

// ─── Argument Records ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddArgs {
    #[serde(serialize_with = "serialize_number")]
    pub a: f64,
    #[serde(serialize_with = "serialize_number")]
    pub b: f64,
}

/// Encode whole numbers as JSON integers so hosts with integer parameters
/// accept them. Fractions and non-finite values go through as `f64`, which
/// JSON renders as a float or `null`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatArgs {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceArgs {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadArgs {
    pub path: FileId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteArgs {
    pub path: FileId,
    pub contents: String,
}
