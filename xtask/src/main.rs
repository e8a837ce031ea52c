use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for qfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    /// Run tests including the property suites
    Proptest,
    Clippy,
    Fmt,
    Analyze,
    Bench,
    Demo {
        /// Name of the demo to run
        #[arg(default_value = "basic_usage")]
        name: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status()?,
        Commands::Test => test_command(&cfg).status()?,
        Commands::Proptest => proptest_command(&cfg).status()?,
        Commands::Clippy => clippy_command().status()?,
        Commands::Fmt => fmt_command().status()?,
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                fmt
            } else {
                clippy_command().status()?
            }
        }
        Commands::Bench => bench_command(&cfg).status()?,
        Commands::Demo { name } => demo_command(&cfg, &name).status()?,
    };

    if !status.success() {
        anyhow::bail!("command exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
fn main() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo_default() {
        let cli = Cli::parse_from(["xtask", "demo"]);
        match cli.command {
            Commands::Demo { name } => assert_eq!(name, "basic_usage"),
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_proptest_command() {
        let cli = Cli::parse_from(["xtask", "proptest"]);
        assert!(matches!(cli.command, Commands::Proptest));
    }
}
