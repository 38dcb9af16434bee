use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{selected_forms, CLICommand, CommandContext};
use crate::func::Form;
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "primes";
static ABOUT: &str = "Compute the prime implicants of the current expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Only show the implicants of the sum of products
    #[structopt(long)]
    sop: bool,

    /// Only show the implicates of the product of sums
    #[structopt(long)]
    pos: bool,

    /// Show the raw patterns and covered terms
    #[structopt(short, long)]
    patterns: bool,
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
        &["pi", "implicants"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let config: Config = Config::from_iter(args);

        let analysis = context.get_analysis()?;
        for form in selected_forms(config.sop, config.pos) {
            let primes = analysis.primes(form);
            let kind = match form {
                Form::Sop => "implicants",
                Form::Pos => "implicates",
            };
            println!(
                "Prime {} ({}): {}",
                kind,
                form,
                primes.to_expressions(analysis.variables(), form)?.join(", ")
            );
            if config.patterns {
                print!("{}", primes);
            }
        }
        println!();
        Ok(())
    }
}
