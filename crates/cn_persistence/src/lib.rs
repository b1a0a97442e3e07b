//! RON persistence for field settings and golden noise vectors.

pub mod golden;
pub mod settings_io;

pub use golden::{evaluate, load_vectors, save_vectors, verify, Mismatch, SamplePoint, TestVector};
pub use settings_io::{load_settings, save_settings, SettingsIoError};
