use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Give every workspace its own title bar color.
#[derive(Parser, Debug)]
#[command(name = "projcolor", version, about)]
pub struct Args {
    /// Workspace root (defaults to the enclosing git repository)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// File holding the palette and recent colors
    #[arg(long, global = true, env = "PROJCOLOR_STORE")]
    pub store: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the color applied to the workspace
    Current,

    /// List recent and predefined colors
    List,

    /// Apply a saved color by name, or a custom one with --name and --color
    Apply(ApplyArgs),

    /// Add a color to the palette
    Add {
        name: String,
        color: String,
    },

    /// Edit a palette (or recent) color
    Edit {
        /// Name of the entry to edit
        name: String,
        /// Hex code of the entry to edit
        color: String,
        /// New name
        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,
        /// New hex code
        #[arg(long = "color", value_name = "HEX")]
        new_color: Option<String>,
        /// Edit the recent list instead of the palette
        #[arg(long)]
        recent: bool,
    },

    /// Delete a palette (or recent) color
    Delete {
        name: String,
        color: String,
        /// Delete from the recent list instead of the palette
        #[arg(long)]
        recent: bool,
    },

    /// Forget all recent colors
    ClearRecent,

    /// Remove the workspace title bar color
    Reset,
}

#[derive(ClapArgs, Debug)]
pub struct ApplyArgs {
    /// Saved color to apply (recent colors are searched first)
    #[arg(required_unless_present = "color", conflicts_with_all = ["name", "color"])]
    pub saved: Option<String>,

    /// Name for a custom color
    #[arg(long, requires = "color")]
    pub name: Option<String>,

    /// Hex code for a custom color
    #[arg(long, requires = "name")]
    pub color: Option<String>,
}
