use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_calculator::interpreter::{evaluate_expression, Evaluation};
use log::info;
use std::io;
use std::io::Write;

const DEMO_EXPRESSIONS: [&str; 4] = [
    "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3",
    "(2+3)*4 - 10/5",
    "10 + 2 * 6",
    "100 * (2 + 12) / 14",
];

/// Evaluates arithmetic expressions and shows their postfix form
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. A set of demo expressions is used when none are given
    expressions: Vec<String>,

    /// Only print the postfix form of each expression
    #[clap(long)]
    postfix_only: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

fn run(args: &Arguments, out: &mut impl Write) -> Result<()> {
    let expressions: Vec<&str> = if args.expressions.is_empty() {
        info!("No expressions given, evaluating the demo expressions");
        DEMO_EXPRESSIONS.to_vec()
    } else {
        args.expressions.iter().map(String::as_str).collect()
    };

    for expression in expressions {
        let evaluation = evaluate_expression(expression).map_err(|error| {
            let stage = error.stage();
            anyhow::Error::new(error)
                .context(format!("Could not evaluate {:?} during {}", expression, stage))
        })?;
        let report = if args.postfix_only {
            format!("{}\n", evaluation.postfix_notation())
        } else {
            format_report(expression, &evaluation)
        };
        out.write_all(report.as_bytes())
            .context("Failed to write evaluation")?;
    }

    Ok(())
}

fn format_report(expression: &str, evaluation: &Evaluation) -> String {
    format!(
        "Infix: {}\nPostfix: {}\nResult: {:?}\n\n",
        expression,
        evaluation.postfix_notation(),
        evaluation.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(arguments: &[&str]) -> Result<String> {
        let args = Arguments::parse_from(
            std::iter::once("expression-calculator").chain(arguments.iter().copied()),
        );
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn report_keeps_decimal_point_on_integral_results() {
        let output = run_with(&["10 + 2 * 6"]).unwrap();

        assert_eq!(output, "Infix: 10 + 2 * 6\nPostfix: 10 2 6 * +\nResult: 22.0\n\n");
    }

    #[test]
    fn postfix_only_prints_one_line_per_expression() {
        let output = run_with(&["--postfix-only", "(1+2)*3", "2^3^2"]).unwrap();

        assert_eq!(output, "1 2 + 3 *\n2 3 2 ^ ^\n");
    }

    #[test]
    fn demo_expressions_are_used_without_arguments() {
        let output = run_with(&[]).unwrap();

        assert_eq!(output.matches("Infix: ").count(), DEMO_EXPRESSIONS.len());
        assert!(output.contains("Postfix: 100 2 12 + * 14 /\nResult: 100.0\n"));
        assert!(output.contains("Postfix: 2 3 + 4 * 10 5 / -\nResult: 18.0\n"));
    }

    #[test]
    fn failing_expression_names_expression_and_stage() {
        let error = run_with(&["1 + 1", "(1+2"]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Could not evaluate \"(1+2\" during conversion"
        );
        assert_eq!(error.root_cause().to_string(), "mismatched parentheses");
    }
}
