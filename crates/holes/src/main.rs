mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "holes",
    version,
    about = "Reserve a strip along a monitor edge that other windows cannot cover"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Start the Desktop Holes daemon
    Start,
    /// Stop the daemon and release the hole
    Stop,
    /// Show whether the daemon is running and where the hole is
    Status,
    /// Reserve a strip from a selection rectangle
    #[command(allow_negative_numbers = true)]
    Set(commands::set::SelectionArgs),
    /// Release the reserved strip
    Remove,
    /// Show which edge and thickness a selection would resolve to
    #[command(allow_negative_numbers = true)]
    Resolve(commands::resolve::ResolveArgs),
    /// List the bounds of every monitor
    Monitors,
    /// Manage starting Desktop Holes on logon
    Autostart {
        #[command(subcommand)]
        action: AutostartCommands,
    },
    /// Run the daemon (internal, started by `holes start`)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum AutostartCommands {
    /// Start Desktop Holes on logon
    Enable,
    /// Stop starting Desktop Holes on logon
    Disable,
    /// Show whether autostart is enabled
    Status,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Set(args) => commands::set::execute(&args),
        Commands::Resolve(args) => commands::resolve::execute(&args),
        #[cfg(windows)]
        Commands::Start => commands::start::execute(),
        #[cfg(windows)]
        Commands::Stop => commands::stop::execute(),
        #[cfg(windows)]
        Commands::Status => commands::status::execute(),
        #[cfg(windows)]
        Commands::Remove => commands::send::execute(holes_core::Command::RemoveHole),
        #[cfg(windows)]
        Commands::Monitors => commands::monitors::execute(),
        #[cfg(windows)]
        Commands::Autostart { action } => match action {
            AutostartCommands::Enable => commands::autostart::enable(),
            AutostartCommands::Disable => commands::autostart::disable(),
            AutostartCommands::Status => commands::autostart::status(),
        },
        #[cfg(windows)]
        Commands::Daemon => commands::daemon::execute(),
        #[cfg(not(windows))]
        _ => commands::unsupported(),
    }
}
