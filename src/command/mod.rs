//! Define commands for the Command Line Interface
//!
//! This module provides facilities to register a collection of commands, where each command,
//! defined in a private submodule, is a thin wrapper over core API features.
//!
//! The CLI enables to chain several commands, each can use and modify a global context, currently
//! limited to the last analysed expression. The global CLI will thus start by searching command
//! names in the full list of arguments. The arguments between two successive commands define the
//! arguments of the first command.
//!
//! # Example
//!
//! The following command:
//!
//! ```logimin expr "( a | b ) & ! c" table minimize --pos```
//!
//! defines the following subcommands:
//! * **expr** ```"( a | b ) & ! c"```
//! * **table**
//! * **minimize** ```--pos```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::sync::Arc;

use crate::func::analysis::Analysis;
use crate::func::Form;
use crate::helper::error::{generic_error, EmptyLogiminResult, LogiminError, LogiminResult};

// Use a macro to load all command modules and add them to the list of available commands
macro_rules! cmdmods {
    ( $( $x:ident ),* ) => {
        $( mod $x; )*
        /// Single-instance CommandManager created and filled at runtime
        static COMMANDS: Lazy<CommandManager> = Lazy::new(|| {
            CommandManager::default()
            $(  .register( Arc::new( $x::CLI{}))  )*
        });
    };
}

// Define all available commands
cmdmods!(help, expr, table, forms, primes, minimize, kmap);

pub fn help_cmd(context: &mut CommandContext) -> EmptyLogiminResult {
    match COMMANDS.get_command("help") {
        Some(cmd) => cmd.run(context, &[OsString::from("help")]),
        None => Err(generic_error(String::from("Missing help command"))),
    }
}

/// Split the list of CLI parameters into separate slices for each successive command.
///
/// Scan the list of parameters to search for known commands and will consider that
/// they denote the start of the next command.
pub struct SelectedArgs {
    all_args: Vec<OsString>,
    next_slice: usize,
}

/// Register and retrieve commands
#[derive(Default)]
pub struct CommandManager {
    services: HashMap<&'static str, Arc<dyn CLICommand>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CommandManager {
    pub fn register(mut self, action: Arc<dyn CLICommand>) -> Self {
        let name = action.name();
        for alias in action.aliases().iter() {
            self.aliases.insert(alias, name);
        }
        self.services.insert(name, action);
        self
    }

    fn unroll_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).unwrap_or(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(self.unroll_alias(name))
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CLICommand>> {
        self.services.get(self.unroll_alias(name)).map(Arc::clone)
    }

    pub fn print_commands(&self) {
        println!("Available commands");
        println!("==================");
        let mut names: Vec<&&str> = self.services.keys().collect();
        names.sort();
        for name in names {
            if let Some(srv) = self.services.get(*name) {
                println!("  {:20} {}", name, srv.about());
            }
        }
    }
}

/// The execution context to allow successive commands to share an analysed expression
#[derive(Default)]
pub struct CommandContext {
    analysis: Option<Analysis>,
}

impl CommandContext {
    pub fn get_analysis(&self) -> LogiminResult<&Analysis> {
        self.analysis
            .as_ref()
            .ok_or(LogiminError::MissingExpression())
    }

    pub fn set_analysis(&mut self, analysis: Analysis) {
        self.analysis = Some(analysis);
    }
}

/// API for individual commands
pub trait CLICommand: Sync + Send {
    fn name(&self) -> &'static str;

    fn about(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyLogiminResult;
}

/// Select the forms requested by a pair of flags: both when none is set
pub(crate) fn selected_forms(sop: bool, pos: bool) -> Vec<Form> {
    match (sop, pos) {
        (true, false) => vec![Form::Sop],
        (false, true) => vec![Form::Pos],
        _ => vec![Form::Sop, Form::Pos],
    }
}

impl SelectedArgs {
    pub fn new() -> Self {
        SelectedArgs::from_args(env::args_os().collect())
    }

    /// Prepare a list of arguments, the first one being the program name
    pub fn from_args(all_args: Vec<OsString>) -> Self {
        SelectedArgs {
            all_args,
            next_slice: 1,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_slice < self.all_args.len()
    }

    pub fn parse_next(&mut self, context: &mut CommandContext) -> EmptyLogiminResult {
        self.run_next_command(context, &COMMANDS)
    }

    fn run_next_command(
        &mut self,
        context: &mut CommandContext,
        manager: &CommandManager,
    ) -> EmptyLogiminResult {
        let next_command = self.all_args[self.next_slice].to_string_lossy().into_owned();
        let cmd = match manager.get_command(&next_command) {
            None => return Err(generic_error(format!("Unknown command: {}", next_command))),
            Some(c) => c,
        };

        let next_args = self.scan(manager);

        cmd.run(context, next_args)
    }

    fn scan(&mut self, manager: &CommandManager) -> &[OsString] {
        let start = self.next_slice;

        // Find the end of the next slice!
        let mut end = self.all_args.len();
        for i in start + 1..end {
            if manager.contains(&self.all_args[i].to_string_lossy()) {
                end = i;
                break;
            }
        }

        self.next_slice = end;
        &self.all_args[start..end]
    }
}

impl Default for SelectedArgs {
    fn default() -> Self {
        Self::new()
    }
}
