use crate::{constants::*, terminal::Stylus, utils::*};
use anyhow::Error;
use clausify_fol::{
    pipeline::{normalize_str, Stage},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};
use std::fs;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "clausify",
    about = "Normalizes a first-order sentence into a set of clauses"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(help = "The input sentence; read from --input or stdin when missing")]
    formula: Option<String>,
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "Path to the input sentence file"
    )]
    input: Option<std::path::PathBuf>,
    #[structopt(long = "rename-apart", help = "Rename the variables of each clause apart.")]
    rename_apart: bool,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<std::path::PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let stylus = Stylus::new(!self.no_color);

        let text = if let Some(formula) = self.formula {
            formula
        } else if let Some(input) = &self.input {
            read_sentence_from_file(input)?
        } else {
            read_sentence_from_stdin()?
        };

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());
        let rename_apart = self.rename_apart;

        let run = || -> Result<(), Error> {
            let normalization = normalize_str(text.trim())
                .map_err(|e| Error::new(e).context("failed to normalize the input sentence"))?;

            normalization
                .stages()
                .iter()
                .for_each(|(stage, formula)| {
                    print_stage(stage.heading(), &formula.to_string(), &stylus)
                });
            print_clauses(Stage::Clauses.heading(), &normalization.clauses, &stylus);

            if rename_apart {
                print_clauses(
                    RENAMED_HEADING,
                    &normalization.clauses_renamed_apart(),
                    &stylus,
                );
            }
            Ok(())
        };

        if let Some(log) = log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("failed to create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
