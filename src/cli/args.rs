//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--remote` / `--local`: Override `remote.enabled`
//! - `--login` / `--password`: Credentials for commands that sign in

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::types::EntityId;
use crate::ui::output::Verbosity;
use crate::ui::prompts;

/// classblog - posts, instructors and students for a class blog
#[derive(Parser, Debug)]
#[command(name = "classblog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; disables prompts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Try the remote backend first (overrides remote.enabled)
    #[arg(long, global = true, conflicts_with = "local")]
    pub remote: bool,

    /// Use only the local store (overrides remote.enabled)
    #[arg(long, global = true)]
    pub local: bool,

    /// Email of the account to sign in as
    #[arg(long, global = true, value_name = "EMAIL")]
    pub login: Option<String>,

    /// Password to sign in with (prompted when omitted)
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The `remote.enabled` override requested on the command line.
    pub fn remote_override(&self) -> Option<bool> {
        if self.remote {
            Some(true)
        } else if self.local {
            Some(false)
        } else {
            None
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true unless `--quiet` was set or stdin is not a TTY.
    pub fn interactive(&self) -> bool {
        !self.quiet && prompts::is_interactive()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and show the current account
    #[command(
        name = "whoami",
        long_about = "Sign in with --login and --password and show the account.\n\n\
            Prints the account name, email and role. Useful for checking credentials \
            and whether the remote backend or the local store answered.",
        after_help = "\
EXAMPLES:
    classblog --login professor@blog.com whoami
    classblog --login aluno@blog.com --password 123456 whoami"
    )]
    Whoami,

    /// Read and write posts
    #[command(
        name = "posts",
        long_about = "Read and write blog posts.\n\n\
            Any signed-in account can list and read posts. Only instructors can \
            create posts, and only the instructor who wrote a post can edit or \
            delete it.",
        after_help = "\
EXAMPLES:
    # Everything, newest last
    classblog --login aluno@blog.com posts list

    # Search titles, descriptions and author names
    classblog --login aluno@blog.com posts list --search navigation

    # Your own posts
    classblog --login professor@blog.com posts list --mine

    # Publish
    classblog --login professor@blog.com posts create \\
        --title \"Hooks\" --description \"useState and useEffect\" --body \"...\""
    )]
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },

    /// Manage instructor records (instructors only)
    #[command(name = "instructors")]
    Instructors {
        #[command(subcommand)]
        action: PeopleAction,
    },

    /// Manage student records (instructors only)
    #[command(name = "students")]
    Students {
        #[command(subcommand)]
        action: PeopleAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for classblog commands.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    classblog completion bash >> ~/.bashrc

    # Zsh
    classblog completion zsh > ~/.zfunc/_classblog

    # Fish
    classblog completion fish > ~/.config/fish/completions/classblog.fish

    # PowerShell
    classblog completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Posts subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PostsAction {
    /// List posts
    List {
        /// Keep posts whose title, description or author contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Only posts you wrote (instructors)
        #[arg(long)]
        mine: bool,
    },
    /// Show one post in full
    Show {
        /// Post id
        id: EntityId,
    },
    /// Publish a new post (instructors)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        body: String,
    },
    /// Edit a post you wrote
    Edit {
        /// Post id
        id: EntityId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Delete a post you wrote
    Delete {
        /// Post id
        id: EntityId,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Instructor and student subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PeopleAction {
    /// List records one page at a time
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Records per page (defaults to listing.page_size)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,

        /// Fetch every page
        #[arg(long, conflicts_with = "page")]
        all: bool,
    },
    /// Add a record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change a record's name or email
    Edit {
        /// Record id
        id: EntityId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a record
    Delete {
        /// Record id
        id: EntityId,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
