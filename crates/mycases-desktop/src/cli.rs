use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mycases", version, about = "Child-development intake case manager")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create, browse, edit and delete cases.
    #[command(subcommand)]
    Cases(CasesCommand),
    /// Attach and inspect survey questionnaires.
    #[command(subcommand)]
    Surveys(SurveysCommand),
    /// Write PDF or DOCX reports.
    #[command(subcommand)]
    Export(ExportCommand),
    /// Inspect or change the application config.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum CasesCommand {
    /// List cases, optionally filtered.
    List(ListArgs),
    Show {
        id: String,
    },
    /// Create a case from a JSON file of field values.
    Create {
        #[arg(long, value_name = "JSON")]
        file: PathBuf,
    },
    /// Update a case from a JSON file. Omitted fields are kept.
    Edit {
        id: String,
        #[arg(long, value_name = "JSON")]
        file: PathBuf,
    },
    Delete {
        id: String,
        /// Repeat the case id (or type "حذف") to confirm.
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Part of the child's name, any case.
    #[arg(long)]
    pub name: Option<String>,
    /// Age in whole years.
    #[arg(long)]
    pub age: Option<String>,
    /// Part of the diagnosis, any case.
    #[arg(long)]
    pub diagnosis: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SurveysCommand {
    /// List the available survey forms.
    Types,
    List {
        id: String,
    },
    /// Fill in a survey for a case from a JSON file.
    Add {
        id: String,
        #[arg(long = "type", value_name = "SURVEY")]
        survey: String,
        #[arg(long, value_name = "JSON")]
        file: PathBuf,
    },
    Show {
        id: String,
        filename: String,
    },
    Delete {
        id: String,
        filename: String,
        /// Repeat the file name (or type "حذف") to confirm.
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Export a case with all of its surveys.
    Case {
        id: String,
        /// Target file; `.docx` writes Word, anything else PDF.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export a single survey with its case context.
    Survey {
        id: String,
        filename: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    /// Point the application at a different data folder.
    SetDataPath {
        path: PathBuf,
    },
}
