use clap::{error::ErrorKind, Parser, ValueEnum};
use spv_embed::{write_word_header, PartialWord};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Convert a SPIR-V binary to a constexpr uint32_t array of little-endian words.
struct Cli {
    /// The input .spv file.
    input: String,
    /// The output .h file.
    output: String,
    /// The array variable name. This should be a valid C++ identifier.
    variable_name: String,

    /// Additional arguments after the variable name are ignored.
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// How to handle inputs that are not a multiple of 4 bytes.
    #[arg(long, value_enum, default_value_t = PartialWordArg::Reject)]
    partial_word: PartialWordArg,
}

#[derive(Copy, PartialEq, Clone, Eq, ValueEnum)]
enum PartialWordArg {
    Reject,
    ZeroPad,
}

impl From<PartialWordArg> for PartialWord {
    fn from(value: PartialWordArg) -> Self {
        match value {
            PartialWordArg::Reject => PartialWord::Reject,
            PartialWordArg::ZeroPad => PartialWord::ZeroPad,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            std::process::exit(1);
        }
    };

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init()?;

    if !cli.ignored.is_empty() {
        log::warn!("Ignoring extra arguments {:?}", cli.ignored);
    }

    write_word_header(
        &cli.input,
        &cli.output,
        &cli.variable_name,
        cli.partial_word.into(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_name() {
        let result = Cli::try_parse_from(["spv_to_constexpr", "a.spv", "a.h"]);
        assert_eq!(
            ErrorKind::MissingRequiredArgument,
            result.err().unwrap().kind()
        );
    }

    #[test]
    fn all_arguments() {
        let cli = Cli::try_parse_from(["spv_to_constexpr", "a.spv", "a.h", "a_spv"]).unwrap();
        assert_eq!("a.spv", cli.input);
        assert_eq!("a.h", cli.output);
        assert_eq!("a_spv", cli.variable_name);
        assert!(cli.partial_word == PartialWordArg::Reject);
    }

    #[test]
    fn extra_arguments_ignored() {
        let cli =
            Cli::try_parse_from(["spv_to_constexpr", "a.spv", "a.h", "a_spv", "extra"]).unwrap();
        assert_eq!("a.spv", cli.input);
        assert_eq!("a.h", cli.output);
        assert_eq!("a_spv", cli.variable_name);
        assert_eq!(vec!["extra"], cli.ignored);
    }

    #[test]
    fn zero_pad_argument() {
        let cli = Cli::try_parse_from([
            "spv_to_constexpr",
            "a.spv",
            "a.h",
            "a_spv",
            "--partial-word",
            "zero-pad",
        ])
        .unwrap();
        assert_eq!(PartialWord::ZeroPad, PartialWord::from(cli.partial_word));
    }
}
