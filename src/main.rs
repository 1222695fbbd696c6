use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::Arc;

use dockprompt::completion::{CompletionResolver, word_before_cursor};
use dockprompt::config::{self, Config, ConfigResult};
use dockprompt::error::PromptError;
use dockprompt::prompt::Prompt;
use dockprompt::runtime::{self, ContainerRuntime, DockerCli};

/// Interactive docker prompt
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive docker prompt with live completion of commands, flags, containers and images"
)]
struct Args {
    /// Docker binary to drive (overrides the config file)
    #[arg(long, value_name = "PATH")]
    docker: Option<String>,

    /// Skip the daemon connectivity check on startup
    #[arg(long)]
    skip_check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print completions for a line as `text<TAB>description` and exit
    Complete {
        /// Everything after `docker `
        #[arg(allow_hyphen_values = true)]
        line: String,

        /// Word under the cursor (defaults to the end of the line)
        #[arg(long, allow_hyphen_values = true)]
        word: Option<String>,
    },
}

fn main() -> Result<()> {
    // Writes to /tmp/dockprompt-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dockprompt-debug.log")
            .expect("Failed to open /tmp/dockprompt-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DOCKPROMPT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let mut config_result = config::load_config();

    let args = Args::parse();
    if let Some(binary) = args.docker {
        config_result.config.runtime.binary = binary;
    }

    let docker: Arc<dyn ContainerRuntime> =
        Arc::new(DockerCli::new(config_result.config.runtime.binary.clone()));
    let resolver = CompletionResolver::from_config(Arc::clone(&docker), &config_result.config);

    if let Some(Command::Complete { line, word }) = args.command {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        return complete(resolver, &line, word);
    }

    validate_docker_exists(&config_result.config)?;
    if !args.skip_check {
        check_daemon(docker.as_ref(), &config_result.config)?;
    }

    let prompt = Prompt::new(resolver)?;
    let terminal = init_terminal()?;
    let result = run(terminal, prompt, config_result);

    restore_terminal()?;
    let prompt = result?;

    // Output after terminal restore to prevent corruption
    if let Some(line) = prompt.submitted() {
        println!("docker {}", line);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== DOCKPROMPT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Resolves one line and prints the suggestions
fn complete(resolver: CompletionResolver, line: &str, word: Option<String>) -> Result<()> {
    let word = word.unwrap_or_else(|| word_before_cursor(line, line.chars().count()));
    let executor = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    for suggestion in executor.block_on(resolver.resolve(line, &word)) {
        println!("{}", suggestion);
    }
    Ok(())
}

/// Validate that the docker binary exists in PATH
fn validate_docker_exists(config: &Config) -> Result<(), PromptError> {
    let binary = &config.runtime.binary;
    which::which(binary).map_err(|_| PromptError::DockerNotFound(binary.clone()))?;
    Ok(())
}

/// Probe the daemon once, bounded by the startup timeout
fn check_daemon(docker: &dyn ContainerRuntime, config: &Config) -> Result<(), PromptError> {
    let executor = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let version = executor
        .block_on(runtime::bounded(
            config.runtime.startup_timeout(),
            docker.ping(),
        ))
        .map_err(|e| PromptError::DaemonUnavailable(e.to_string()))?;

    log::info!("Docker daemon reachable, server version {}", version);

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut prompt: Prompt,
    config_result: ConfigResult,
) -> Result<Prompt> {
    if let Some(warning) = config_result.warning {
        prompt.show_warning(warning);
    }

    loop {
        if prompt.should_render() {
            terminal.draw(|frame| prompt.render(frame))?;
            prompt.clear_dirty();
        }

        prompt.handle_events()?;

        if prompt.should_quit() {
            break;
        }
    }

    Ok(prompt)
}
