use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{selected_forms, CLICommand, CommandContext};
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "kmap";
static ABOUT: &str = "Show the Karnaugh map of the current expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Mark the minterms
    #[structopt(long)]
    sop: bool,

    /// Mark the maxterms
    #[structopt(long)]
    pos: bool,
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
        &["karnaugh"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let config: Config = Config::from_iter(args);

        let analysis = context.get_analysis()?;
        let values = analysis.table().values();
        for form in selected_forms(config.sop, config.pos) {
            print!("{}", analysis.karnaugh_map(&values, form)?);
            println!("Minimal {}: {}", form, analysis.minimal(form));
            println!();
        }
        Ok(())
    }
}
