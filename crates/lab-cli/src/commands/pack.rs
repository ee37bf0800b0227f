use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use lab_config::{LabConfig, PackConfig};
use lab_pack::PackOptions;

use crate::cli::root_commands::PackArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

const CONFIRMATION: &str = "Submission created!";

/// Handle `lab pack`.
pub fn handle(args: &PackArgs, config: &LabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => prompt_folder(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };
    let root = PathBuf::from(dir.trim());

    let options = pack_options(&config.pack);
    let now = chrono::Local::now().naive_local();
    let report = lab_pack::pack(&root, &options, now)
        .with_context(|| format!("failed to pack {}", root.display()))?;

    if flags.format == OutputFormat::Table {
        if !flags.quiet {
            println!(
                "{} ({} files)",
                report.archive.display(),
                report.entries.len()
            );
        }
    } else {
        output(&report, flags.format)?;
    }
    confirm(flags.format, &mut std::io::stdout(), &mut std::io::stderr())
}

/// Print the confirmation line. Structured formats keep stdout parseable, so
/// it goes to `stderr` there.
fn confirm(format: OutputFormat, stdout: &mut impl Write, stderr: &mut impl Write) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        writeln!(stdout, "{CONFIRMATION}")?;
    } else {
        writeln!(stderr, "{CONFIRMATION}")?;
    }
    Ok(())
}

fn pack_options(config: &PackConfig) -> PackOptions {
    PackOptions {
        skip_dirs: config.skip_dirs.clone(),
        allowed_files: config.allowed_files.clone(),
        allowed_dirs: config.allowed_dirs.clone(),
        archive_prefix: config.archive_prefix.clone(),
    }
}

fn prompt_folder(input: &mut impl BufRead, prompt: &mut impl Write) -> anyhow::Result<String> {
    write!(prompt, "Folder name: ")?;
    prompt.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read folder name")?;
    let name = line.trim();
    if name.is_empty() {
        anyhow::bail!("folder name is required");
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompt_reads_one_trimmed_line() {
        let mut input = "  my_project \nignored\n".as_bytes();
        let mut shown = Vec::new();
        let name = prompt_folder(&mut input, &mut shown).unwrap();
        assert_eq!(name, "my_project");
        assert_eq!(String::from_utf8(shown).unwrap(), "Folder name: ");
    }

    #[test]
    fn empty_answer_is_rejected() {
        let mut input = "\n".as_bytes();
        assert!(prompt_folder(&mut input, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn options_follow_config() {
        let mut config = PackConfig::default();
        config.archive_prefix = "lab".into();
        config.allowed_files.push("settings.py".into());
        let options = pack_options(&config);
        assert_eq!(options.archive_prefix, "lab");
        assert!(options.allowed_files.contains(&"settings.py".to_string()));
    }

    #[test]
    fn confirmation_follows_format() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        confirm(OutputFormat::Table, &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Submission created!\n");
        assert!(err.is_empty());

        for format in [OutputFormat::Json, OutputFormat::Raw] {
            let (mut out, mut err) = (Vec::new(), Vec::new());
            confirm(format, &mut out, &mut err).unwrap();
            assert!(out.is_empty());
            assert_eq!(String::from_utf8(err).unwrap(), "Submission created!\n");
        }
    }
}
