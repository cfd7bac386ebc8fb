use crate::error::Result;
use crate::platform::{current_os, format_path};

pub struct PathCommand;

impl PathCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self, path: &str, os: Option<&str>) -> Result<()> {
        let os = os.unwrap_or(current_os());
        println!("{}", format_path(path, os));
        Ok(())
    }
}
