use anyhow::Result;
use clap::Args;
use clap::Command;
use clap::FromArgMatches;
use pine::parser::render_error;
use pine::parser::Parser;
use pine::parser::Scanner;
use std::io::Read;
use tracing::debug;
use tracing::Level;

/// Scan and parse pine modules
#[derive(Args, Debug)]
#[command(version, about)]
struct PineArgs {
    /// The input file (- is interpreted as stdin)
    #[arg(default_value = "-")]
    input: String,
    /// Print the token stream instead of the parsed module
    #[arg(long)]
    print_tokens: bool,
    /// Print debug logs
    #[arg(long)]
    debug: bool,
}

fn cli() -> Command {
    let cli = Command::new("pine");
    PineArgs::augment_args(cli)
}

fn read_input(input: &str) -> Result<String> {
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(text)
}

fn run(args: &PineArgs, src: &str) -> Result<String> {
    if args.print_tokens {
        let tokens = Scanner::scan(src)?;
        debug!("scanned {} tokens", tokens.len());
        let lines = tokens
            .iter()
            .map(|token| token.describe())
            .collect::<Vec<String>>();
        Ok(lines.join("\n"))
    } else {
        let module = Parser::parse(src)?;
        Ok(module.to_string())
    }
}

fn main() {
    let matches = cli().get_matches();
    let args = match PineArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    if let Err(e) = pine::init_subscriber(level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let src = match read_input(&args.input) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", args.input);
            std::process::exit(1);
        }
    };

    match run(&args, &src) {
        Ok(result) => println!("{result}"),
        Err(err) => {
            eprintln!("{}", render_error(&src, &err));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pine::parser::SyntaxError;

    fn run_app(args: Vec<&str>, input_text: &str) -> Result<String> {
        let cli = cli();
        let args_owned: Vec<String> = args.iter().map(|&s| s.to_string()).collect();
        let matches = cli.try_get_matches_from(args_owned)?;
        let args = PineArgs::from_arg_matches(&matches)?;
        run(&args, input_text)
    }

    #[test]
    fn test_help() {
        let args = vec!["pine", "--help"];
        let result = run_app(args, "");
        let err = match result {
            Ok(_) => panic!("Expected an error"),
            Err(e) => e,
        };
        let result = err.to_string();
        println!("{result}");
        assert!(result.contains("Usage: pine"));
        assert!(result.contains("--print-tokens"));
    }

    #[test]
    fn test_invalid_args() {
        let result = run_app(vec!["pine", "--invalid-flag"], "");
        assert!(result.is_err());
    }

    #[test]
    fn test_print_tokens() {
        let src = "module m { x = 1; }";
        let actual = run_app(vec!["pine", "--print-tokens"], src).unwrap();
        let expected = indoc! {"
        {module: }
        {id: m}
        {lbrace: }
        {id: x}
        {equals: }
        {number: 1}
        {semicolon: }
        {rbrace: }
        {eof: }"};
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_print_module() {
        let src = "module m { var x; x = x - 1; }";
        let actual = run_app(vec!["pine"], src).unwrap();
        let expected = indoc! {"
        module m {
          var x;
          x = x - 1;
        }"};
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_syntax_error() {
        let src = "module { }";
        let err = run_app(vec!["pine"], src).unwrap_err();
        assert!(err.downcast_ref::<SyntaxError>().is_some());
        let rendered = render_error(src, &err);
        assert!(rendered.contains("^ Expected id"));
    }
}
