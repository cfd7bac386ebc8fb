// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::CommonsConfig;
use crate::error::Result;
use crate::models::Application;
use crate::table::{Footer, render_to};
use crate::validation::validate_record;
use std::fs;
use std::io;
use std::path::Path;

pub struct AppCommand<'a> {
    config: &'a CommonsConfig,
}

impl<'a> AppCommand<'a> {
    pub fn new(config: &'a CommonsConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Loads an application description, checks that it is complete and
    /// prints it with its version line.
    pub fn execute(&self, file: &Path) -> Result<()> {
        let app = load_application(file)?;
        validate_record(&app)?;

        let mut stdout = io::stdout().lock();
        render_to(
            &mut stdout,
            std::slice::from_ref(&app),
            &Footer::new(),
            &self.config.render_options(),
        )?;
        println!("{}", app.version_line());
        Ok(())
    }
}

fn load_application(file: &Path) -> Result<Application> {
    let contents = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommonsError;
    use tempfile::TempDir;

    #[test]
    fn test_load_application() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        fs::write(
            &path,
            r#"{
                "name": "demo",
                "description": "Demo tool",
                "style": {"color": {"background": "blue", "foreground": "white"}},
                "usage": "demo [FILE]",
                "version": "0.3.0"
            }"#,
        )
        .unwrap();

        let app = load_application(&path).unwrap();
        assert_eq!(app.name, "demo");
        assert_eq!(app.style.color.background, "blue");
        assert!(validate_record(&app).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_application(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CommonsError::Io(_)));
    }
}
