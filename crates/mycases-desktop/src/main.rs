use std::path::Path;

use clap::Parser;
use eyre::{Result, WrapErr};

use mycases_core::models::case::CaseRecord;
use mycases_desktop::cli::{CasesCommand, Cli, Command, ConfigCommand, ExportCommand, SurveysCommand};
use mycases_desktop::commands::{self, SurveyInput};
use mycases_desktop::config::{self, MyCasesConfig};
use mycases_desktop::dialogs;
use mycases_desktop::state::DesktopState;
use mycases_search::query::CaseFilter;
use mycases_storage::DataRoot;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let loaded = if config::has_config() {
        match config::load_config() {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                None
            }
        }
    } else {
        None
    };

    match cli.command {
        Command::Config(command) => run_config(command, loaded),
        Command::Cases(command) => run_cases(&open_state(loaded.as_ref())?, command),
        Command::Surveys(command) => run_surveys(&open_state(loaded.as_ref())?, command),
        Command::Export(command) => run_export(&open_state(loaded.as_ref())?, command),
    }
}

fn open_state(loaded: Option<&MyCasesConfig>) -> Result<DesktopState> {
    let data_path = dialogs::resolve_data_path(loaded)?;
    Ok(DesktopState::from_config(DataRoot::new(data_path), loaded))
}

fn now() -> jiff::civil::DateTime {
    jiff::Zoned::now().datetime()
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let bytes = std::fs::read(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).wrap_err_with(|| format!("parsing {}", path.display()))
}

fn print_case(folder: &str, record: &CaseRecord) {
    println!("[{folder}]");
    println!("{}: {}", mycases_core::labels::CASE_ID_LABEL, record.case_id);
    for row in record.rows() {
        println!("{}: {}", row.label, row.value);
    }
}

fn run_cases(state: &DesktopState, command: CasesCommand) -> Result<()> {
    let today = now().date();
    match command {
        CasesCommand::List(args) => {
            let filter = CaseFilter {
                name: args.name,
                age_years: args.age,
                diagnosis: args.diagnosis,
            };
            for summary in commands::list_cases(state, &filter, today)? {
                println!("{}", summary.display_name);
            }
        }
        CasesCommand::Show { id } => {
            let (folder, record) = commands::show_case(state, &id)?;
            print_case(&folder, &record);
        }
        CasesCommand::Create { file } => {
            let saved = commands::create_case(state, read_json(&file)?, today)?;
            println!("{} ({})", saved.message, saved.folder);
        }
        CasesCommand::Edit { id, file } => {
            let saved = commands::edit_case(state, &id, read_json(&file)?, today)?;
            println!("{} ({})", saved.message, saved.folder);
        }
        CasesCommand::Delete { id, confirm } => {
            println!("{}", commands::delete_case(state, &id, &confirm)?);
        }
    }
    Ok(())
}

fn run_surveys(state: &DesktopState, command: SurveysCommand) -> Result<()> {
    match command {
        SurveysCommand::Types => {
            for survey in commands::survey_types() {
                println!("{}\t{}", survey.id, survey.title);
            }
        }
        SurveysCommand::List { id } => {
            for survey in commands::list_surveys(state, &id)? {
                println!(
                    "{}\t{}",
                    survey.filename.as_deref().unwrap_or(&survey.survey_type),
                    survey.survey_date.as_deref().unwrap_or("-")
                );
            }
        }
        SurveysCommand::Add { id, survey, file } => {
            let input: SurveyInput = serde_json::from_value(read_json(&file)?)
                .wrap_err("survey file must hold survey_date and answers")?;
            let filename = commands::add_survey(state, &id, &survey, input, now())?;
            println!("{} ({filename})", mycases_storage::surveys::SAVED_MESSAGE);
        }
        SurveysCommand::Show { id, filename } => {
            let survey = commands::show_survey(state, &id, &filename)?;
            println!("{}", serde_json::to_string_pretty(&survey)?);
        }
        SurveysCommand::Delete {
            id,
            filename,
            confirm,
        } => {
            println!("{}", commands::delete_survey(state, &id, &filename, &confirm)?);
        }
    }
    Ok(())
}

fn run_export(state: &DesktopState, command: ExportCommand) -> Result<()> {
    let now = now();
    let (report, out) = match command {
        ExportCommand::Case { id, out } => {
            let report = commands::case_report(state, &id, now)?;
            let out = match out {
                Some(out) => Some(out),
                None => {
                    let (_, case) = commands::show_case(state, &id)?;
                    dialogs::pick_export_path(&commands::default_case_export_name(&case))
                }
            };
            (report, out)
        }
        ExportCommand::Survey { id, filename, out } => {
            let report = commands::survey_report(state, &id, &filename, now)?;
            let out = match out {
                Some(out) => Some(out),
                None => {
                    let (_, case) = commands::show_case(state, &id)?;
                    let survey = commands::show_survey(state, &id, &filename)?;
                    dialogs::pick_export_path(&commands::default_survey_export_name(&survey, &case))
                }
            };
            (report, out)
        }
    };

    let Some(out) = out else {
        tracing::info!("export cancelled");
        return Ok(());
    };
    let format = commands::export_report(state, &report, &out)?;
    println!("{format:?}: {}", out.display());
    Ok(())
}

fn run_config(command: ConfigCommand, loaded: Option<MyCasesConfig>) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            println!("config: {}", config::config_path()?.display());
            match loaded {
                Some(config) => println!("{}", serde_json::to_string_pretty(&config)?),
                None => println!("(no config saved)"),
            }
        }
        ConfigCommand::SetDataPath { path } => {
            std::fs::create_dir_all(&path)
                .wrap_err_with(|| format!("creating {}", path.display()))?;
            let path = std::fs::canonicalize(&path)?;
            if !config::is_usable_data_path(&path) {
                eyre::bail!("{} is not a usable data folder", path.display());
            }
            let mut config = loaded.unwrap_or_else(|| MyCasesConfig::new(&path));
            config.data_path = path;
            config::save_config(&config)?;
            println!("data path: {}", config.data_path.display());
        }
    }
    Ok(())
}
