use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use a7p_codec::TextCodec;
use a7p_sdk::{FileStatus, ProfileService, VerifyReport};
use a7p_server::{A7pServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let dir = cli.profiles_dir();
    let format = cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args, cli.dir),
        Command::List => cmd_list(&open(&dir)?, format, &mut io::stdout().lock()),
        Command::Show(args) => cmd_show(&open(&dir)?, &args.name, &mut io::stdout().lock()),
        Command::Put(args) => {
            let text = read_input(args.input.as_deref())?;
            cmd_put(&open(&dir)?, &args.name, &text, &mut io::stdout().lock())
        }
        Command::Delete(args) => cmd_delete(&open(&dir)?, &args.name, &mut io::stdout().lock()),
        Command::Verify => cmd_verify(&open(&dir)?, format, &mut io::stdout().lock()),
    }
}

fn open(dir: &Path) -> anyhow::Result<ProfileService> {
    ProfileService::open_dir(dir)
        .with_context(|| format!("cannot open profile directory {}", dir.display()))
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("cannot read stdin")?;
            Ok(text)
        }
    }
}

fn cmd_serve(args: ServeArgs, dir: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(dir) = dir {
        config.profiles_dir = dir;
    }
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(A7pServer::new(config).serve())?;
    Ok(())
}

fn cmd_list(
    svc: &ProfileService,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let names = svc.list()?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&names)?)?,
        OutputFormat::Text if names.is_empty() => writeln!(out, "No profiles.")?,
        OutputFormat::Text => {
            for name in &names {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

fn cmd_show(svc: &ProfileService, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let payload = svc.load_payload(name)?;
    writeln!(out, "{}", TextCodec::to_text_pretty(&payload)?)?;
    Ok(())
}

fn cmd_put(
    svc: &ProfileService,
    name: &str,
    text: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    svc.store(name, text)?;
    writeln!(out, "{} Stored {}", "✓".green().bold(), name.bold())?;
    Ok(())
}

fn cmd_delete(svc: &ProfileService, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    svc.delete(name)?;
    writeln!(out, "Deleted {}", name.yellow())?;
    Ok(())
}

fn cmd_verify(
    svc: &ProfileService,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = svc.verify()?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => print_report(&report, out)?,
    }
    let failed = report.failed().count();
    if failed > 0 {
        bail!("{failed} of {} profiles failed verification", report.entries.len());
    }
    Ok(())
}

fn print_report(report: &VerifyReport, out: &mut impl Write) -> io::Result<()> {
    for entry in &report.entries {
        match &entry.status {
            FileStatus::Ok => writeln!(out, "  {} {}", "✓".green(), entry.name)?,
            FileStatus::Failed { reason, .. } => {
                writeln!(out, "  {} {}: {}", "✗".red(), entry.name, reason.red())?
            }
        }
    }
    let summary = format!("{}/{} profiles valid", report.ok_count(), report.entries.len());
    if report.all_ok() {
        writeln!(out, "{} {}", "✓".green().bold(), summary)
    } else {
        writeln!(out, "{} {}", "✗".red().bold(), summary)
    }
}
