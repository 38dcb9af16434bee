use std::ffi::OsString;
use std::io;

use itertools::Itertools;
use log::debug;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::analysis::Analysis;
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "expr";
static ABOUT: &str = "Parse and analyse an expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// The expression, read from the standard input if missing
    expression: Option<String>,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["expression", "parse"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        // Start by parsing arguments to handle help without any context
        let config: Config = Config::from_iter(args);

        let source = match config.expression {
            Some(e) => e,
            None => {
                println!("Enter an expression with spaces between tokens, e.g. ( a | b ) & ! c");
                let mut line = String::new();
                io::stdin().read_line(&mut line)?;
                line
            }
        };

        debug!("Analysing expression: {}", source.trim());
        let analysis = Analysis::parse(source.trim())?;
        println!("Expression: {}", analysis.expression());
        println!("Variables: {}", analysis.variables());
        println!("RPN: {}", analysis.expression().rpn().iter().join(" "));
        context.set_analysis(analysis);
        Ok(())
    }
}
