use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use equation_solver::solver;
use equation_solver::solver::error::EvaluationError;
use log::debug;
use std::io;
use std::io::Write;

/// Solves arithmetic equations
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The equation to solve; leave it out to start an interactive session
    #[clap(allow_hyphen_values = true)]
    equation: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    match arguments.equation {
        Some(equation) => {
            debug!("solving {}", equation);
            println!("{}", display_line(solver::solve(&equation)));
            Ok(())
        }
        None => run_interactive(),
    }
}

/// Runs the prompt loop. Solved equations and their displayed results form
/// the session history; runtime errors are shown but never recorded.
fn run_interactive() -> Result<()> {
    println!("Enter an equation to solve it.");
    println!("Commands: 'history' lists this session's results, 'quit' leaves.");

    let mut history: Vec<(String, String)> = Vec::new();
    let mut buffer = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush the prompt")?;

        buffer.clear();
        let bytes_read = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read input")?;
        if bytes_read == 0 {
            break; // End of input.
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "q" => break,
            "history" => {
                for (equation, result) in &history {
                    println!("{} = {}", equation, result);
                }
            }
            equation => {
                debug!("solving {}", equation);
                let outcome = solver::solve(equation);
                let record = should_record(&outcome);
                let displayed = display_line(outcome);
                println!("{}", displayed);
                if record {
                    history.push((equation.to_string(), displayed));
                }
            }
        }
    }
    Ok(())
}

/// Maps a solver outcome onto the line shown to the user: the numeric
/// result, the invalid-equation notice, or an error line.
fn display_line(outcome: Result<String, EvaluationError>) -> String {
    match outcome {
        Ok(result) => result,
        Err(error @ EvaluationError::InvalidExpression) => error.to_string(),
        Err(error) => format!("Error: {}", error),
    }
}

/// Whether an outcome belongs in the session history: solved results and the
/// invalid-equation notice are kept, runtime errors are not.
fn should_record(outcome: &Result<String, EvaluationError>) -> bool {
    matches!(outcome, Ok(_) | Err(EvaluationError::InvalidExpression))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_solved_equation_displays_its_result() {
        assert_eq!(display_line(Ok("5".to_string())), "5")
    }

    #[test]
    fn an_invalid_equation_displays_the_notice_verbatim() {
        let line = display_line(Err(EvaluationError::InvalidExpression));
        assert_eq!(line, "Invalid equation")
    }

    #[test]
    fn runtime_errors_display_with_the_error_prefix() {
        let divided = display_line(Err(EvaluationError::DivisionByZero));
        assert_eq!(divided, "Error: division by zero");

        let malformed = display_line(Err(EvaluationError::MalformedNumber(
            "1.2.3".to_string(),
        )));
        assert_eq!(malformed, "Error: malformed number `1.2.3`")
    }

    #[test]
    fn results_and_invalid_equations_enter_the_history() {
        assert!(should_record(&Ok("5".to_string())));
        assert!(should_record(&Err(EvaluationError::InvalidExpression)))
    }

    #[test]
    fn runtime_errors_stay_out_of_the_history() {
        assert!(!should_record(&Err(EvaluationError::DivisionByZero)));
        assert!(!should_record(&Err(EvaluationError::MalformedNumber(
            "1.2.3".to_string()
        ))))
    }
}
