//! OpenTTS configuration tool — entry point.
//!
//! Sets up a user or system configuration for the `openttsd` speech daemon,
//! starts it, and walks the operator through checks of the synthesizers and
//! audio output.  When nothing else helps, it collects a debug archive for
//! the developers.
//!
//! # Usage
//!
//! ```text
//! otts-conf [OPTIONS]
//!
//! Options:
//!   -u, --create-user-conf               Create ~/.opentts/conf
//!   -c, --config-basic-settings-user     Basic settings of the user daemon
//!   -C, --config-basic-settings-system   Basic settings of the system daemon
//!   -d, --diagnostics                    Diagnose problems
//!   -s, --test-otts-say                  Speak through the running daemon
//!       --test-festival                  Check the Festival server
//!       --test-espeak                    Check the espeak synthesizer
//!       --test-alsa                      Play a sound through ALSA
//!       --test-pulse                     Play a sound through PulseAudio
//!   -e, --espeak                         Speak all messages with espeak
//!   -n, --dont-ask                       Take every default answer
//!   -D, --debug                          Collect a debug archive
//!       --config <PATH>                  Tool configuration file
//! ```
//!
//! Without an action the tool asks what to do.

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use otts_conf::application::console::OperatorOptions;
use otts_conf::application::diagnostics::AudioSystem;
use otts_conf::application::questions::Dialog;
use otts_conf::application::wizard::{self, Action};
use otts_conf::application::{Context, Paths, Target};
use otts_conf::infrastructure::console::{Speaker, TerminalConsole};
use otts_conf::infrastructure::environment::{home_dir, temp_dir};
use otts_conf::infrastructure::festival::TcpFestivalProbe;
use otts_conf::infrastructure::process::SystemCommandRunner;
use otts_conf::infrastructure::storage::config::load_tool_config;
use otts_conf::infrastructure::tree::FsConfigTree;
use otts_conf_core::ConfigPatcher;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// OpenTTS configuration tool.
///
/// The first selected action runs; the order of the fields below is the
/// order of preference.
#[derive(Debug, Parser)]
#[command(
    name = "otts-conf",
    about = "Set up and diagnose the OpenTTS speech daemon",
    version
)]
struct Cli {
    /// Create a new configuration for the current user in ~/.opentts/conf.
    #[arg(short = 'u', long)]
    create_user_conf: bool,

    /// Configure the basic settings in the user configuration.
    #[arg(short = 'c', long)]
    config_basic_settings_user: bool,

    /// Configure the basic settings in the system-wide configuration.
    #[arg(short = 'C', long)]
    config_basic_settings_system: bool,

    /// Diagnose problems with the current setup.
    #[arg(short = 'd', long)]
    diagnostics: bool,

    /// Test connection to the daemon using otts-say.
    #[arg(short = 's', long)]
    test_otts_say: bool,

    /// Test whether Festival works as a server.
    #[arg(long)]
    test_festival: bool,

    /// Test whether the espeak synthesizer works.
    #[arg(long)]
    test_espeak: bool,

    /// Test ALSA audio output.
    #[arg(long)]
    test_alsa: bool,

    /// Test PulseAudio output.
    #[arg(long)]
    test_pulse: bool,

    /// Use espeak to synthesize messages.
    #[arg(short = 'e', long = "espeak")]
    use_espeak_synthesis: bool,

    /// Do not ask any questions, always use default values.
    #[arg(short = 'n', long)]
    dont_ask: bool,

    /// Debug a problem and generate a report.
    #[arg(short = 'D', long)]
    debug: bool,

    /// Path to the tool's TOML configuration file.
    #[arg(long, value_name = "PATH", env = "OTTS_CONF_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// The action selected on the command line.
    fn action(&self) -> Action {
        let selected = [
            (self.create_user_conf, Action::CreateUserConf),
            (
                self.config_basic_settings_user,
                Action::BasicSettings(Target::User),
            ),
            (
                self.config_basic_settings_system,
                Action::BasicSettings(Target::System),
            ),
            (self.test_festival, Action::TestFestival),
            (self.test_otts_say, Action::TestOttsSay),
            (self.test_espeak, Action::TestEspeak),
            (self.test_alsa, Action::TestAudio(AudioSystem::Alsa)),
            (self.test_pulse, Action::TestAudio(AudioSystem::Pulse)),
            (self.diagnostics, Action::Diagnostics),
            (self.debug, Action::Debug),
        ];
        selected
            .into_iter()
            .find_map(|(chosen, action)| chosen.then_some(action))
            .unwrap_or(Action::Interactive)
    }

    fn operator_options(&self) -> OperatorOptions {
        OperatorOptions {
            dont_ask: self.dont_ask,
            use_espeak_synthesis: self.use_espeak_synthesis,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_tool_config(cli.config.as_deref())
        .context("failed to load the otts-conf configuration")?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the configured level applies.  Logs go to
    // stderr so they do not mix with the dialogue on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let home = home_dir(std::env::var_os("HOME"))?;
    let temp = temp_dir(std::env::var_os("TMPDIR"));
    let paths = Paths::new(home, temp, &config.paths);

    let options = cli.operator_options();
    let speaker = options.use_espeak_synthesis.then(|| {
        Speaker::new(Box::new(SystemCommandRunner), config.commands.espeak.clone())
    });

    let mut ctx = Context {
        dialog: Dialog::new(Box::new(TerminalConsole::stdio(speaker)), options),
        runner: Box::new(SystemCommandRunner),
        festival: Box::new(TcpFestivalProbe),
        tree: Box::new(FsConfigTree),
        patcher: ConfigPatcher::new(),
        paths,
        config,
    };

    let action = cli.action();
    info!(?action, ?options, "otts-conf starting");

    ctx.dialog.report("OpenTTS configuration tool");
    wizard::run(&mut ctx, action, Local::now().date_naive())
        .with_context(|| format!("{action:?} did not complete"))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_selects_interactive() {
        // Arrange: parse with no arguments
        let cli = Cli::parse_from(["otts-conf"]);

        // Assert
        assert_eq!(cli.action(), Action::Interactive);
        assert_eq!(cli.operator_options(), OperatorOptions::default());
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_short_flags_select_actions() {
        let cases = [
            ("-u", Action::CreateUserConf),
            ("-c", Action::BasicSettings(Target::User)),
            ("-C", Action::BasicSettings(Target::System)),
            ("-d", Action::Diagnostics),
            ("-s", Action::TestOttsSay),
            ("-D", Action::Debug),
        ];
        for (flag, expected) in cases {
            let cli = Cli::parse_from(["otts-conf", flag]);
            assert_eq!(cli.action(), expected, "flag {flag}");
        }
    }

    #[test]
    fn test_long_test_flags_select_checks() {
        let cli = Cli::parse_from(["otts-conf", "--test-pulse"]);
        assert_eq!(cli.action(), Action::TestAudio(AudioSystem::Pulse));

        let cli = Cli::parse_from(["otts-conf", "--test-festival"]);
        assert_eq!(cli.action(), Action::TestFestival);
    }

    #[test]
    fn test_first_action_in_priority_order_wins() {
        // Arrange: debug, diagnostics and user settings together
        let cli = Cli::parse_from(["otts-conf", "-D", "-d", "-c"]);

        // Assert
        assert_eq!(cli.action(), Action::BasicSettings(Target::User));
    }

    #[test]
    fn test_festival_test_outranks_otts_say_test() {
        let cli = Cli::parse_from(["otts-conf", "-s", "--test-festival"]);
        assert_eq!(cli.action(), Action::TestFestival);
    }

    #[test]
    fn test_operator_options_from_flags() {
        let cli = Cli::parse_from(["otts-conf", "-n", "--espeak"]);
        assert_eq!(
            cli.operator_options(),
            OperatorOptions {
                dont_ask: true,
                use_espeak_synthesis: true,
            }
        );
    }

    #[test]
    fn test_config_path_override() {
        let cli = Cli::parse_from(["otts-conf", "--config", "/etc/otts-conf.toml", "-d"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/otts-conf.toml")));
        assert_eq!(cli.action(), Action::Diagnostics);
    }
}
