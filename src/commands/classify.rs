use crate::error::Result;
use crate::filter::is_extension_valid;
use crate::models::FileType;
use colored::Colorize;

pub struct ClassifyCommand {
    file_type: FileType,
}

impl ClassifyCommand {
    pub fn new(file_type: &str) -> Result<Self> {
        Ok(Self {
            file_type: file_type.parse()?,
        })
    }

    pub fn execute(&self, paths: &[String]) -> Result<()> {
        for path in paths {
            let mark = if is_extension_valid(self.file_type, path) {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            println!("{mark} {path}");
        }

        let matched = paths
            .iter()
            .filter(|path| is_extension_valid(self.file_type, path))
            .count();
        log::info!("{matched} of {} paths are {}", paths.len(), self.file_type);

        Ok(())
    }
}
