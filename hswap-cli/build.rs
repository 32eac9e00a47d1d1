//! Build script for hswap-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Name of the `[[bin]]` target, exported to the crate as `HSWAP_BIN_NAME`.
const BIN_NAME: &str = "hswap";

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let swap_args = [
        Arg::new("workspace")
            .long("workspace")
            .value_name("DIR")
            .env("HSWAP_WORKSPACE")
            .help("Workspace root for the project-wide search"),
        Arg::new("open-with")
            .long("open-with")
            .value_name("CMD")
            .env("HSWAP_OPEN_WITH")
            .help("Command used to open the counterpart; the path is appended"),
        Arg::new("no-cache")
            .long("no-cache")
            .action(ArgAction::SetTrue)
            .help("Do not remember resolved pairs"),
    ];

    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Jump between header and source files")
        .long_about(
            "Find the counterpart of a C-family header or source file: the same \
             directory first, then below the project's include/src root, then the \
             whole workspace.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("HSWAP_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("swap")
                .about("Print the counterpart of a header or source file")
                .arg(Arg::new("file").value_name("FILE").required(true))
                .arg(
                    Arg::new("pick")
                        .long("pick")
                        .value_parser(["prompt", "first", "none", "report"])
                        .default_value("prompt"),
                )
                .args(swap_args.clone()),
            Command::new("session")
                .about("Answer swap requests read from stdin")
                .long_about("Read one path per line from stdin and answer each with one JSON line")
                .arg(
                    Arg::new("pick")
                        .long("pick")
                        .value_parser(["first", "none", "report"])
                        .default_value("report"),
                )
                .args(swap_args),
            Command::new("show-config")
                .about("Print the merged configuration")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["yaml", "json"])
                        .default_value("yaml"),
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
                ),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join(format!("{BIN_NAME}.1")), buffer)?;

    println!("cargo:rustc-env=HSWAP_BIN_NAME={BIN_NAME}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
