use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext, COMMANDS};
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "help";
static ABOUT: &str = "List available commands";

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
        &["commands"]
    }

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let _config: Config = Config::from_iter(args);

        println!("{} {}", clap::crate_name!(), clap::crate_version!());
        println!("{}", clap::crate_description!());
        println!();
        COMMANDS.print_commands();
        println!();
        println!("Expressions use space-separated tokens over the variables a to e,");
        println!("with the operators ! & | -> ~ and parentheses, e.g. \"( a | b ) & ! c\"");
        Ok(())
    }
}
