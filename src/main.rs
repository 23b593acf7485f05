//! Logoshell CLI
//!
//! Terminal front-end for the editing shell: an interactive console wired
//! to an external Logo interpreter, plus a file mode that prints a source
//! file with syntax highlighting.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

use logoshell::config::ShellConfig;
use logoshell::console::{CommandHistory, Console};
use logoshell::helper::LogoHelper;
use logoshell::interp::ProcessInterpreter;
use logoshell::palette::{self, Palette};
use logoshell::surface::EditingSurface;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("logoshell v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    logoshell [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help           Print this help message");
    eprintln!("    -v, --version        Print version information");
    eprintln!("    -t, --theme <NAME>   Color theme (amber_blue, light, monokai, solarized_dark)");
    eprintln!("    -c, --config <FILE>  Read configuration from FILE");
    eprintln!("    --run                Execute FILE through the configured interpreter");
    eprintln!("    --repl               Start the interactive console (default without FILE)");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("    <FILE>               Logo source file to highlight (or run with --run)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    logoshell");
    eprintln!("    logoshell spiral.logo");
    eprintln!("    logoshell --run spiral.logo");
    eprintln!("    logoshell -t monokai spiral.logo");
    eprintln!();
    eprintln!("The interpreter command comes from the LOGOSHELL_INTERPRETER environment");
    eprintln!("variable or the [interpreter] section of the config file.");
}

fn print_version() {
    println!("logoshell {}", VERSION);
}

struct Options {
    input: Option<String>,
    theme: Option<String>,
    config: Option<String>,
    run_mode: bool,
    repl_mode: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut input = None;
    let mut theme = None;
    let mut config = None;
    let mut run_mode = false;
    let mut repl_mode = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-t" | "--theme" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing theme name after -t".to_string());
                }
                theme = Some(args[i].clone());
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config file after -c".to_string());
                }
                config = Some(args[i].clone());
            }
            "--run" => {
                run_mode = true;
            }
            "--repl" => {
                repl_mode = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if input.is_some() {
                    return Err("Multiple input files specified".to_string());
                }
                input = Some(arg.to_string());
            }
        }
        i += 1;
    }

    Ok(Options {
        input,
        theme,
        config,
        run_mode,
        repl_mode,
    })
}

fn resolve_theme(options: &Options, config: &ShellConfig) -> Result<&'static Palette, String> {
    let name = options.theme.as_deref().unwrap_or(&config.theme);
    palette::by_name(name).ok_or_else(|| {
        format!(
            "Unknown theme '{}' (available: {})",
            name,
            palette::theme_names().join(", ")
        )
    })
}

/// Build the interpreter adapter from the environment or the config file.
fn build_interpreter(config: &ShellConfig) -> Result<ProcessInterpreter, String> {
    if let Ok(command_line) = env::var("LOGOSHELL_INTERPRETER") {
        return ProcessInterpreter::from_command_line(&command_line);
    }
    if let Some(interp) = &config.interpreter {
        return Ok(ProcessInterpreter::new(&interp.command, interp.args.clone()));
    }
    Err(
        "No interpreter configured. Set LOGOSHELL_INTERPRETER or add an [interpreter] \
         section to the config file."
            .to_string(),
    )
}

fn highlight_file(path: &str, theme: &'static Palette) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path, e))?;

    let mut surface = EditingSurface::with_text(&content)?;
    for row in 0..surface.line_count() {
        let line = surface.line(row).unwrap_or_default();
        let tokens = surface.line_tokens(row);
        println!("{}", palette::render_line(&line, &tokens, theme));
    }
    Ok(())
}

fn run_file(path: &str, config: &ShellConfig) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path, e))?;

    let adapter = build_interpreter(config)?;
    let mut console = Console::with_prompt(adapter, &config.prompt)?;
    let reply = console.run_source(&content);
    print!("{}", reply.output);
    Ok(())
}

fn history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".logoshell_history"))
}

fn run_repl(config: &ShellConfig, theme: &'static Palette) -> Result<(), String> {
    let adapter = build_interpreter(config)?;
    let history = CommandHistory::with_capacity(config.history_limit);
    let mut console = Console::with_settings(adapter, &config.prompt, history)?;
    let helper = LogoHelper::new(theme)?;

    let mut rl: Editor<LogoHelper, DefaultHistory> =
        Editor::new().map_err(|e| format!("Failed to initialize line editor: {}", e))?;
    rl.set_helper(Some(helper));

    let history_path = history_file();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    println!("logoshell v{}", VERSION);
    println!("Enter Logo commands. Type 'bye' to exit.\n");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("bye")
                    || trimmed.eq_ignore_ascii_case("exit")
                    || trimmed.eq_ignore_ascii_case("quit")
                {
                    println!("Goodbye!");
                    break;
                }

                let _ = rl.add_history_entry(line.as_str());
                if let Some(helper) = rl.helper_mut() {
                    helper.add_to_history(line.clone());
                    helper.record_definitions(&line);
                }

                let reply = console.submit_line(&line);
                if reply.cleared {
                    // wipe the terminal to mirror the cleared transcript
                    print!("\x1b[2J\x1b[H");
                } else {
                    print!("{}", reply.output);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => return Err(format!("Input error: {}", e)),
        }
    }

    if let Some(path) = &history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => match ShellConfig::load(std::path::Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => ShellConfig::load_default(),
    };

    let theme = match resolve_theme(&options, &config) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match (&options.input, options.run_mode) {
        (Some(path), true) => run_file(path, &config),
        (Some(path), false) if !options.repl_mode => highlight_file(path, theme),
        _ => run_repl(&config, theme),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
