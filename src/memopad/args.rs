use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memopad")]
#[command(about = "A pocket memo pad with switchable notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $MEMOPAD_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note and switch to it
    #[command(alias = "n")]
    New,

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Switch to a note by list position or id
    #[command(alias = "s")]
    Select {
        /// List position (1, 2, ...) or note id
        selector: String,
    },

    /// Print the current note
    #[command(alias = "cat")]
    Show,

    /// Replace the current note's content (reads stdin when no argument)
    #[command(alias = "w")]
    Write {
        /// New content; omit to read from stdin
        content: Option<String>,
    },

    /// Edit the current note in $EDITOR
    #[command(alias = "e")]
    Edit,

    /// Retitle the current note (a blank title gets a timestamp default)
    Rename {
        /// The new title
        #[arg(num_args = 0.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Delete the current note
    #[command(alias = "rm")]
    Delete,

    /// Delete every note and start over with a fresh one
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Write all notes to notes-export.json
    Export {
        /// Target directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (title-policy, list-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
