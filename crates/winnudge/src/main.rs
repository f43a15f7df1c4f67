mod commands;
mod panel;
mod supervisor;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "winnudge",
    version,
    about = "Move, resize and pin the foreground window from the keyboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Open the text control panel
    Panel,
    /// Run the hotkey listener in the foreground
    Listen,
    /// Apply one action to the foreground window
    Do {
        /// Action name, e.g. move-left, grow-up, opacity-down, next-monitor
        action: String,
    },
    /// Show or change the move step
    Step {
        #[command(subcommand)]
        command: Option<StepCommands>,
    },
    /// Show or change the display settings
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[derive(Subcommand)]
enum StepCommands {
    /// Print the saved move step
    Show,
    /// Save a new move step
    Set {
        /// Pixels per key press
        value: String,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Print the display settings
    Show,
    /// Change one or more display settings
    Set(commands::theme::SetArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Panel => commands::panel::execute(),
        Commands::Listen => commands::listen::execute(),
        Commands::Do { action } => commands::do_action::execute(&action),
        Commands::Step { command } => match command {
            None | Some(StepCommands::Show) => commands::step::show(),
            Some(StepCommands::Set { value }) => commands::step::set(&value),
        },
        Commands::Theme { command } => match command {
            None | Some(ThemeCommands::Show) => commands::theme::show(),
            Some(ThemeCommands::Set(args)) => commands::theme::set(&args),
        },
    }
}
