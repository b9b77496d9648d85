//! Command dispatch and the `create` operation.
//!
//! Command surface:
//!
//! - `broadcast create <path>` converts `<path>/broadcast.yaml` into
//!   `<path>/broadcast.html`
//! - `broadcast v` / `broadcast version` prints the version
//! - anything else (or nothing) prints a one-line diagnostic and
//!   terminates normally
//!
//! Usage mistakes print a message and end the run normally; conversion
//! failures propagate as errors to [`run`], which reports them on stderr
//! and turns them into a nonzero exit status. Nothing here calls
//! `process::exit` directly.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use broadcast_markup::{Ruleset, Transformer};
use broadcast_render::Pipeline;
use clap::{value_parser, Arg, ArgMatches, Command};
use console::style;

/// File name of the rendered page, written into the source directory.
pub const OUTPUT_FILE: &str = "broadcast.html";

/// Builds the clap command tree.
///
/// Unknown first arguments are accepted as external subcommands so that
/// dispatch can answer them with a diagnostic instead of a clap error.
pub fn command() -> Command {
    Command::new("broadcast")
        .about("Render broadcast documents to themed HTML pages")
        .version(env!("CARGO_PKG_VERSION"))
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("create")
                .about("Convert the broadcast at PATH into PATH/broadcast.html")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(Command::new("version").alias("v").about("Print the version"))
}

/// Entry point: dispatches and converts the outcome into an exit status.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match dispatch(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red());
            ExitCode::FAILURE
        }
    }
}

/// Routes the parsed command line to its operation.
///
/// Usage errors resolve to `Ok` after printing their diagnostic; only
/// load/render/write failures surface as `Err`.
pub fn dispatch<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            // clap renders help/--version output and argument errors
            // itself; all of them end the run normally.
            let _ = err.print();
            return Ok(());
        }
    };

    match matches.subcommand() {
        None => {
            println!("No command specified.");
            Ok(())
        }
        Some(("create", sub)) => run_create(sub),
        Some(("version", _)) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(_) => {
            println!("Command does not exist.");
            Ok(())
        }
    }
}

fn run_create(matches: &ArgMatches) -> Result<()> {
    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("No path specified.");
        return Ok(());
    };

    let started = Instant::now();
    create(path)?;

    println!(
        "[{}] Create broadcast. {}ms",
        style("DONE").green(),
        started.elapsed().as_millis()
    );
    Ok(())
}

/// Converts the broadcast in `path` and writes the page next to it.
///
/// The output file is only created after rendering has fully succeeded, so
/// a failed conversion never leaves partial output behind. The page is
/// written with permissive permissions (0o777 on Unix).
pub fn create(path: &Path) -> Result<()> {
    let pipeline = Pipeline::new(Transformer::new(Ruleset::builtin()));
    let buffer = pipeline
        .build(path)
        .with_context(|| format!("failed to build broadcast from {}", path.display()))?;

    let out = path.join(OUTPUT_FILE);
    fs::write(&out, &buffer).with_context(|| format!("failed to write {}", out.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&out, fs::Permissions::from_mode(0o777))
            .with_context(|| format!("failed to set permissions on {}", out.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_path_is_parsed() {
        let matches = command()
            .try_get_matches_from(["broadcast", "create", "some/dir"])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "create");
        assert_eq!(
            sub.get_one::<PathBuf>("path"),
            Some(&PathBuf::from("some/dir"))
        );
    }

    #[test]
    fn test_create_path_is_optional() {
        let matches = command()
            .try_get_matches_from(["broadcast", "create"])
            .unwrap();

        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<PathBuf>("path"), None);
    }

    #[test]
    fn test_version_alias() {
        let matches = command().try_get_matches_from(["broadcast", "v"]).unwrap();
        assert_eq!(matches.subcommand_name(), Some("version"));
    }

    #[test]
    fn test_unknown_command_is_external_subcommand() {
        let matches = command()
            .try_get_matches_from(["broadcast", "destroy"])
            .unwrap();
        assert_eq!(matches.subcommand_name(), Some("destroy"));
    }

    #[test]
    fn test_no_command() {
        let matches = command().try_get_matches_from(["broadcast"]).unwrap();
        assert!(matches.subcommand().is_none());
    }
}
