use std::fs;
use std::path::Path;

use cn_core::NoiseError;
use cn_noise::FieldSettings;

/// Error type for settings I/O operations.
#[derive(Debug)]
pub enum SettingsIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
    /// The file parsed but describes an unusable noise field.
    Invalid(NoiseError),
}

impl From<std::io::Error> for SettingsIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for SettingsIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for SettingsIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl From<NoiseError> for SettingsIoError {
    fn from(err: NoiseError) -> Self {
        Self::Invalid(err)
    }
}

impl std::fmt::Display for SettingsIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
            Self::Invalid(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::RonSpanned(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

/// Save field settings to a RON file.
pub fn save_settings(path: &Path, settings: &FieldSettings) -> Result<(), SettingsIoError> {
    let pretty_config = ron::ser::PrettyConfig::new().depth_limit(2);
    let ron_string = ron::ser::to_string_pretty(settings, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load field settings from a RON file.
///
/// Missing fields take their defaults. The result is validated, so a returned
/// value always samples without error.
pub fn load_settings(path: &Path) -> Result<FieldSettings, SettingsIoError> {
    let contents = fs::read_to_string(path)?;
    let settings: FieldSettings = ron::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}
