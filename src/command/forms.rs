use std::ffi::OsString;

use itertools::Itertools;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyLogiminResult;

static NAME: &str = "forms";
static ABOUT: &str = "Show the canonical forms of the current expression";

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
        &["canonical", "normal"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult {
        let _config: Config = Config::from_iter(args);

        let table = context.get_analysis()?.table();
        let (index, binary) = table.index_form();
        println!("PDNF: {}", table.pdnf());
        println!("PCNF: {}", table.pcnf());
        println!("PDNF (numerical): {}", numerical(&table.minterms()));
        println!("PCNF (numerical): {}", numerical(&table.maxterms()));
        println!("Index form: {} - {}", index, binary);
        println!();
        Ok(())
    }
}

fn numerical(terms: &[usize]) -> String {
    if terms.is_empty() {
        String::from("empty")
    } else {
        terms.iter().join(", ")
    }
}
