//! Reading menu definition files.
//!
//! A menu definition file is a YAML list of entries:
//!
//! ```yaml
//! - id: deploy
//!   description: Deploy the current branch
//! - id: status
//! ```

use std::fs::File;

use log::debug;

use crate::error::{Error, Result};
use crate::menu::MenuEntry;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads and parses the menu entries stored at `menu_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or doesn't match the expected structure
/// - The file defines no entries
pub fn get_menu_entries(menu_path: &str) -> Result<Vec<MenuEntry>> {
    let reader = get_reader("menu definition", menu_path)?;

    let entries: Vec<MenuEntry> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "menu definition".to_string(),
            menu_path.to_string(),
            e,
        )
    })?;

    if entries.is_empty() {
        return Err(Error::empty_menu_definition(menu_path.to_string()));
    }

    debug!("Loaded {} menu entries from `{menu_path}`", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_menu(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_get_menu_entries() {
        let file = write_menu(
            r#"
- id: deploy
  description: Deploy the current branch
- id: status
"#,
        );

        let entries = get_menu_entries(file.path().to_str().unwrap()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "deploy");
        assert_eq!(
            entries[0].description,
            Some("Deploy the current branch".to_string())
        );
        assert_eq!(entries[1].description, None);
    }

    #[test]
    fn test_empty_menu_definition() {
        let file = write_menu("[]");
        let result = get_menu_entries(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::EmptyMenuDefinition { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_menu("- description: missing id\n");
        let result = get_menu_entries(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = get_menu_entries("/definitely/not/a/menu.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
