use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selection cancelled")]
    Cancelled,

    #[error("Force exit")]
    ForcedExit,

    #[error("A selection menu needs at least one option.")]
    EmptyOptions,

    #[error("Initial index {} is out of range for {} options.", .index, .len)]
    InitialIndexOutOfRange { index: usize, len: usize },

    #[error("Input closed before a selection was made.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No categories were found in the menu definition YAML. Is `{}` empty?", .path)]
    EmptyMenuDefinition { path: String },

    #[error("Category `{}` has no options to choose from.", .0)]
    EmptyCategory(String),
}

impl Error {
    pub fn empty_menu_definition(path: String) -> Self {
        Self::EmptyMenuDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// True for the outcomes a user produces on purpose (Escape, `q`, Ctrl+C).
    #[must_use]
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::Cancelled | Self::ForcedExit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(Error::Cancelled.to_string(), "Selection cancelled");
        assert_eq!(Error::ForcedExit.to_string(), "Force exit");
        assert_eq!(
            Error::InitialIndexOutOfRange { index: 4, len: 3 }.to_string(),
            "Initial index 4 is out of range for 3 options."
        );
    }

    #[test]
    fn test_is_user_abort() {
        assert!(Error::Cancelled.is_user_abort());
        assert!(Error::ForcedExit.is_user_abort());
        assert!(!Error::EmptyOptions.is_user_abort());
        assert!(!Error::InputClosed.is_user_abort());
    }
}
