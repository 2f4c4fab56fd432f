// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_reports {
        for (slug, title) in crate::runner::list_reports() {
            println!("{},{}", slug, title);
        }
        return Ok(());
    }
    crate::runner::run(&params).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-d" | "--db" => {
                let v = args.next().ok_or("Missing value for --db")?;
                params.db = PathBuf::from(v); }
            "-r" | "--reports" => {
                let v = args.next().ok_or("Missing value for --reports")?;
                params.reports = Some(parse_slug_list(&v)?);}
            "--list-reports" => params.list_reports = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--page" => params.page = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_slug_list(s: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let slug = part.to_ascii_lowercase();
        // Drop repeats wherever they appear, keep first-seen order
        if !out.contains(&slug) { out.push(slug); }
    }
    if out.is_empty() {
        return Err("Empty report list".into());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_list_splits_trims_and_lowercases() {
        let v = parse_slug_list(" Teams , BEST-3PT-TEAMS ,").unwrap();
        assert_eq!(v, vec!["teams", "best-3pt-teams"]);
    }

    #[test]
    fn empty_slug_list_is_an_error() {
        assert!(parse_slug_list(" , ,").is_err());
    }

    #[test]
    fn repeated_slugs_collapse_even_when_not_adjacent() {
        let v = parse_slug_list("teams,best-3pt-teams,teams").unwrap();
        assert_eq!(v, vec!["teams", "best-3pt-teams"]);
    }
}
