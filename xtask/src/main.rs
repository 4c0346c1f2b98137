//! Runs workspace chores, following the [xtask convention][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{bail, Context as _, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

/// What to run.
#[derive(Debug, PartialEq, Eq)]
enum Task {
  Help,
  /// Everything CI checks.
  Ci,
  /// Tests, either for the whole workspace or for one crate.
  Test(Option<String>),
}

impl Task {
  fn parse(mut args: Arguments) -> Result<Self> {
    if args.contains(["-h", "--help"]) {
      return Ok(Task::Help);
    }
    let ret = match args.subcommand()?.as_deref() {
      None => Task::Help,
      Some("ci") => Task::Ci,
      Some("test") => Task::Test(args.opt_free_from_str()?),
      Some(other) => bail!("unknown subcommand: {other}"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
      bail!("unused arguments: {rest:?}");
    }
    Ok(ret)
  }

  fn run(self) -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).parent().context("xtask has no parent dir")?;
    let _d = pushd(root)?;
    match self {
      Task::Help => print!("{}", include_str!("help.txt")),
      Task::Ci => {
        cmd!("cargo test --no-run").run()?;
        cmd!("cargo fmt -- --check").run()?;
        cmd!("cargo clippy").run()?;
        cmd!("cargo test").run()?;
      }
      Task::Test(Some(krate)) => cmd!("cargo test -p {krate}").run()?,
      Task::Test(None) => cmd!("cargo test").run()?,
    }
    Ok(())
  }
}

fn main() {
  if let Err(e) = Task::parse(Arguments::from_env()).and_then(Task::run) {
    eprintln!("{e}");
    std::process::exit(1);
  }
}
