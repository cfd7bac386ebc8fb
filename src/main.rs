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

use clap::{Parser, Subcommand};
use commons::commands::app::AppCommand;
use commons::commands::classify::ClassifyCommand;
use commons::commands::path::PathCommand;
use commons::commands::size::SizeCommand;
use commons::commands::table::{TableCommand, TableOptions};
use commons::config::new_commons_config;
use commons::error::{Result, format_error_chain, get_exit_code};
use commons::logging;
use commons::table::TablePreset;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commons")]
#[command(author, version, about = "Shared formatting, table and file helpers", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format, parse and compare file sizes
    Size {
        #[command(subcommand)]
        command: SizeCommand,
    },

    /// Check paths against a file type's extensions
    #[command(visible_alias = "c")]
    Classify {
        /// File type (any, video, image, archive, documents)
        file_type: String,

        /// Paths to check
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Render a JSON array of objects as a table
    #[command(visible_alias = "t")]
    Table {
        /// JSON file holding an array of objects
        file: PathBuf,

        /// Sort rows by this field (key or header, case-insensitive)
        #[arg(short, long, value_name = "FIELD")]
        sort: Option<String>,

        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Footer cell as HEADER=VALUE, repeatable
        #[arg(long = "total", value_name = "HEADER=VALUE")]
        totals: Vec<String>,

        /// Table style, overriding the configuration
        #[arg(long, value_enum)]
        preset: Option<TablePreset>,

        /// Reject rows with empty strings or empty nested objects
        #[arg(long)]
        validate: bool,
    },

    /// Convert path separators for an operating system
    Path {
        /// Path to convert
        path: String,

        /// Target operating system (windows, linux, darwin); defaults to the host
        #[arg(long)]
        os: Option<String>,
    },

    /// Validate and display an application description
    App {
        /// JSON file describing the application
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = match new_commons_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Size { command } => command.execute(),
        Commands::Classify { file_type, paths } => {
            let command = ClassifyCommand::new(&file_type)?;
            command.execute(&paths)
        }
        Commands::Table {
            file,
            sort,
            desc,
            totals,
            preset,
            validate,
        } => {
            let command = TableCommand::new(&config)?;
            command.execute(
                &file,
                &TableOptions {
                    sort: sort.as_deref(),
                    descending: desc,
                    totals: &totals,
                    preset,
                    validate,
                },
            )
        }
        Commands::Path { path, os } => {
            let command = PathCommand::new()?;
            command.execute(&path, os.as_deref())
        }
        Commands::App { file } => {
            let command = AppCommand::new(&config)?;
            command.execute(&file)
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
