use crate::config::LauncherConfig;
use crate::core::{error::Result, ProcessExecutor};
use crate::launcher::Launcher;
use colored::Colorize;

pub async fn execute(config: &LauncherConfig) -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let launcher = Launcher::from_config(config)?;
    let mut all_ok = true;

    println!("Repository root: {}", launcher.root().display().to_string().cyan());

    // Check interpreter
    print!("Checking {}... ", launcher.interpreter());
    if ProcessExecutor::check_command_exists(launcher.interpreter()) {
        let version =
            ProcessExecutor::execute_with_output(launcher.interpreter(), &["--version"]).await;
        match version {
            Ok(v) => {
                let first_line = v.lines().next().unwrap_or(&v);
                println!("{} ({})", "✓".green(), first_line.trim().yellow())
            }
            Err(_) => println!("{}", "✓".green()),
        }
    } else {
        println!("{}", "✗ Not found on PATH".red());
        all_ok = false;
    }

    // Check menu script
    print!("Checking menu script... ");
    if launcher.script().is_file() {
        println!("{} ({})", "✓".green(), launcher.script().display());
    } else {
        println!("{}", "✗ Not found".red());
        println!("  Expected at {}", launcher.script().display().to_string().yellow());
        all_ok = false;
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}
