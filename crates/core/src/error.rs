use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures surfaced to the caller.
///
/// Bad operator input never shows up here; it is reported as a
/// [`Rejection`](crate::prompt::Rejection) and re-prompted instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt must not be blank!")]
    EmptyPrompt,

    #[error("Min must be less than max! (min: {}, max: {})", .min, .max)]
    InvalidRange { min: String, max: String },

    #[error("Min must be less than max! (min: {:?}, max: {:?})", .min, .max)]
    InvalidCharRange { min: char, max: char },

    #[error("trueString cannot equal falseString! (`{}`)", .0)]
    IdenticalTokens(String),

    #[error("Delimiter must not be empty!")]
    EmptyDelimiter,

    #[error("A menu needs at least one option.")]
    EmptyMenu,

    #[error("Container must be exactly two characters, got \"{}\"", .0)]
    InvalidContainer(String),

    #[error("Must draw at least 1 item!")]
    InvalidDrawCount,

    #[error("Not enough items in the deck! (requested {}, available {})", .requested, .available)]
    NotEnoughItems { requested: usize, available: usize },

    #[error("Cannot choose from an empty set of choices.")]
    EmptyChoices,

    #[error("Unknown address form: \"{}\"", .0)]
    UnknownAddressForm(String),

    #[error("The input stream was closed before a valid value was entered.")]
    StreamClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No options were found in the menu definition YAML. Is `{}` empty?", .path)]
    EmptyMenuDefinition { path: String },
}

impl Error {
    pub fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

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

    /// True for errors caused by the caller passing an invalid contract,
    /// as opposed to the terminal, a file, or its contents.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrompt
                | Self::InvalidRange { .. }
                | Self::InvalidCharRange { .. }
                | Self::IdenticalTokens(_)
                | Self::EmptyDelimiter
                | Self::EmptyMenu
                | Self::InvalidContainer(_)
                | Self::InvalidDrawCount
                | Self::NotEnoughItems { .. }
                | Self::EmptyChoices
        )
    }
}
