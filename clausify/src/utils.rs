use crate::terminal::{Stylus, Tone};
use anyhow::Error;
use clausify_fol::syntax::ClauseSet;
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};

pub(crate) fn read_sentence_from_file(path: &Path) -> Result<String, Error> {
    let mut f = fs::File::open(path)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;
    Ok(contents)
}

pub(crate) fn read_sentence_from_stdin() -> Result<String, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    Ok(s)
}

pub(crate) fn print_stage(heading: &str, formula: &str, stylus: &Stylus) {
    stylus.set(Tone::Heading);
    println!("{}", heading);
    stylus.set(Tone::Formula);
    println!("{}", formula);
    println!();
}

pub(crate) fn print_clauses(heading: &str, clauses: &ClauseSet, stylus: &Stylus) {
    stylus.set(Tone::Heading);
    println!("{}", heading);
    stylus.set(Tone::Clause);
    println!("{}", clauses.iter().map(|c| c.to_string()).join("\n"));
    println!();
}
