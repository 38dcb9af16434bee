use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "table";
static ABOUT: &str = "Show the truth table of the current expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["truth", "tt"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let _config: Config = Config::from_iter(args);

        let analysis = context.get_analysis()?;
        println!("Truth table:");
        print!("{}", analysis.table());
        println!();
        Ok(())
    }
}
