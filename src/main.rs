use clap::Parser;
use fitlog::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Fitlog - Training Log and Calorie Budget Tool");
    println!("=============================================");
    println!();
    println!("Track training sessions in plain delimited log files and derive a");
    println!("calorie budget and progress reports from them.");
    println!();
    println!("USAGE:");
    println!("    fitlog <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    dashboard   Show profile summary with calorie budget");
    println!("    progress    Compare recent training activity against prior activity");
    println!("    log         Add, list, or remove training entries");
    println!("    profile     Create or inspect the user profile");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Create a profile:");
    println!("    fitlog profile set --age 25 --sex male --height-cm 180 --weight-kg 80 \\");
    println!("                       --activity moderate --goal maintain");
    println!();
    println!("    # Log a session:");
    println!("    fitlog log add squat --weight 102.5 --reps 5 --sets 3");
    println!();
    println!("    # Compare your squat against last time:");
    println!("    fitlog progress --exercise squat");
    println!();
    println!("For detailed help on any command, use:");
    println!("    fitlog <COMMAND> --help");
}
