use std::ffi::OsString;

use itertools::Itertools;
use structopt::StructOpt;

use crate::command::{selected_forms, CLICommand, CommandContext};
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "minimize";
static ABOUT: &str = "Compute the minimal forms of the current expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Only compute the minimal sum of products
    #[structopt(long)]
    sop: bool,

    /// Only compute the minimal product of sums
    #[structopt(long)]
    pos: bool,

    /// Show the coverage table of the prime implicants
    #[structopt(short, long)]
    coverage: bool,
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
        &["min", "minimal"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let config: Config = Config::from_iter(args);

        let analysis = context.get_analysis()?;
        for form in selected_forms(config.sop, config.pos) {
            if config.coverage {
                print!("{}", analysis.coverage_table(form)?);
            }

            let cover = analysis.cover(form);
            println!("Minimal {}: {}", form, cover);
            if !cover.is_complete() {
                println!(
                    "  uncovered terms: {}",
                    cover.uncovered().iter().join(", ")
                );
            }
        }
        println!();
        Ok(())
    }
}
