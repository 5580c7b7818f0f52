use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use schedlog::core::report;
use schedlog::scheduler;
use schedlog::Workspace;

/// Project manager that logs every file action as a synthetic process and
/// replays the action log through FCFS, Round Robin, and Priority
/// scheduling.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Project folder used until one is created from the menu.
    #[arg(long, default_value = "MyProject")]
    project_dir: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut workspace = Workspace::new(&args.project_dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = read_trimmed(&mut input, "Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let Some(name) = read_trimmed(&mut input, "Enter folder name: ")? else {
                    break;
                };
                match workspace.create_project(&name) {
                    Ok(true) => success(&format!("Project folder '{name}' created.")),
                    Ok(false) => warning(&format!("Folder '{name}' already exists. Using it.")),
                    Err(e) => failure(&format!("Error creating folder: {e}")),
                }
            }
            "2" => {
                let Some(name) = read_trimmed(&mut input, "Enter file name: ")? else {
                    break;
                };
                match workspace.add_file(&name) {
                    Ok(()) => success(&format!("File '{name}' created in the project.")),
                    Err(e) => failure(&format!("Error creating file: {e}")),
                }
            }
            "3" => {
                let Some(name) = read_trimmed(&mut input, "Enter file name: ")? else {
                    break;
                };
                let Some(content) = read_content_block(&mut input)? else {
                    break;
                };
                match workspace.write_content(&name, &content) {
                    Ok(()) => success("Content written successfully."),
                    Err(e) => failure(&format!("Error writing file: {e}")),
                }
            }
            "4" => {
                let Some(name) = read_trimmed(&mut input, "Enter file name: ")? else {
                    break;
                };
                match workspace.read_content(&name) {
                    Ok(text) => {
                        println!("Content of '{name}':");
                        println!("{text}");
                    }
                    Err(e) => failure(&format!("Error reading file: {e}")),
                }
            }
            "5" => {
                let Some(old) = read_trimmed(&mut input, "Enter old file name: ")? else {
                    break;
                };
                let Some(new) = read_trimmed(&mut input, "Enter new file name: ")? else {
                    break;
                };
                match workspace.rename_file(&old, &new) {
                    Ok(()) => success(&format!("File renamed from '{old}' to '{new}'.")),
                    Err(e) => failure(&format!("Error renaming file: {e}")),
                }
            }
            "6" => {
                let Some(name) = read_trimmed(&mut input, "Enter file name to delete: ")? else {
                    break;
                };
                match workspace.delete_file(&name) {
                    Ok(()) => success(&format!("File '{name}' deleted.")),
                    Err(e) => failure(&format!("Error deleting file: {e}")),
                }
            }
            "7" => {
                let Some(name) = read_trimmed(&mut input, "Enter file name to search: ")? else {
                    break;
                };
                if workspace.search_file(&name) {
                    success(&format!("File '{name}' exists in the project."));
                } else {
                    warning(&format!("File '{name}' not found."));
                }
            }
            "8" => match workspace.backup_project() {
                Ok(copied) => success(&format!(
                    "Backup folder '{}' holds {copied} files.",
                    workspace.backup_path().display()
                )),
                Err(e) => failure(&format!("Error backing up project: {e}")),
            },
            "9" => run_scheduling(&mut workspace, &mut input)?,
            "10" => break,
            other => warning(&format!("Unknown choice: {other}")),
        }
    }

    Ok(())
}

fn run_scheduling(workspace: &mut Workspace, input: &mut impl BufRead) -> Result<()> {
    if workspace.log().is_empty() {
        warning("No actions recorded yet.");
        return Ok(());
    }
    let Some(raw) = read_trimmed(input, "Enter time quantum for RR: ")? else {
        return Ok(());
    };
    let Ok(quantum) = raw.parse::<u64>() else {
        warning("Quantum must be a positive integer.");
        return Ok(());
    };

    match scheduler::run_all(workspace.log().snapshot(), quantum) {
        Ok(outcomes) => {
            for outcome in &outcomes {
                print!("{}", report::render(outcome));
            }
        }
        Err(e) => warning(&e.to_string()),
    }
    Ok(())
}

fn print_menu() {
    println!("\n==============================");
    println!("PROJECT MANAGER SYSTEM");
    println!("==============================");
    println!("1. Create New Project Folder");
    println!("2. Add File to Project");
    println!("3. Write Content to File");
    println!("4. Read Content from File");
    println!("5. Rename File");
    println!("6. Delete File");
    println!("7. Search File");
    println!("8. Backup Project");
    println!("9. Show CPU Scheduling of Actions");
    println!("10. Exit");
}

/// Prompt and read one line. None means stdin was closed.
fn read_trimmed(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Read lines until one holding only `~`, the same terminator the menu has
/// always used for content entry.
fn read_content_block(input: &mut impl BufRead) -> Result<Option<String>> {
    println!("Enter content (end with ~ on its own line):");
    let mut content = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim_end() == "~" {
            return Ok(Some(content));
        }
        content.push_str(&line);
    }
}

fn success(message: &str) {
    println!("{}", message.green());
}

fn warning(message: &str) {
    println!("{}", message.yellow());
}

fn failure(message: &str) {
    eprintln!("{}", message.red());
}
