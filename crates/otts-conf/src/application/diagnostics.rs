//! Checks of the speech stack and the full diagnostics run.
//!
//! Each check reports what it is doing, asks the operator where only a human
//! can tell (did you hear it?), and returns whether the check passed.  A
//! failing check is a normal result, not an error.

use std::fmt;

use tracing::{debug, info, warn};

use super::context::{Context, MAX_ATTEMPTS};
use super::error::WizardError;
use super::system::CommandLine;

// ── Hearing tests ─────────────────────────────────────────────────────────────

/// A command that should produce audible speech, plus what to say about it.
struct HearingTest<'a> {
    command: CommandLine,
    missing: &'a str,
    question: &'a str,
    working: &'a str,
    not_working: &'a str,
}

fn hearing_test(ctx: &mut Context, test: HearingTest<'_>) -> Result<bool, WizardError> {
    for attempt in 1..=MAX_ATTEMPTS {
        match ctx.runner.run(&test.command) {
            Ok(status) if !status.success() => {
                debug!(command = %test.command, status = %status, "speech command failed");
            }
            Ok(_) => {}
            Err(e) => {
                warn!("{e}");
                ctx.dialog.report(test.missing);
                return Ok(false);
            }
        }

        if ctx.dialog.question(test.question, true)? {
            ctx.dialog.report(test.working);
            return Ok(true);
        }
        if attempt == MAX_ATTEMPTS
            || !ctx.dialog.question("Do you want to repeat the test?", true)?
        {
            break;
        }
    }
    ctx.dialog.report(test.not_working);
    Ok(false)
}

/// Speaks a message through the running daemon with `otts-say`.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn test_otts_say(ctx: &mut Context) -> Result<bool, WizardError> {
    ctx.dialog.report("Testing OpenTTS using otts-say");
    let command = CommandLine::new(&ctx.config.commands.say)
        .arg("-P")
        .arg("important")
        .arg("OpenTTS seems to work");
    hearing_test(
        ctx,
        HearingTest {
            command,
            missing: "Can't execute the otts-say binary,\nit is likely that OpenTTS is not installed.",
            question: "Did you hear the message about OpenTTS working?",
            working: "OpenTTS is working",
            not_working: "OpenTTS not working now",
        },
    )
}

/// Speaks a message with the standalone espeak synthesizer.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn test_espeak(ctx: &mut Context) -> Result<bool, WizardError> {
    ctx.dialog.report("Testing whether Espeak works");
    let command = CommandLine::new(&ctx.config.commands.espeak).arg("Espeak seems to work");
    hearing_test(
        ctx,
        HearingTest {
            command,
            missing: "Can't execute the espeak binary, it is likely that espeak\nis not installed.",
            question: "Did you hear the message 'Espeak seems to work'?",
            working: "Espeak is working",
            not_working: "\nEspeak is installed, but the espeak utility is not working now.\n\
                          This doesn't necessarily mean that your espeak won't work with\n\
                          OpenTTS.",
        },
    )
}

// ── Festival ──────────────────────────────────────────────────────────────────

/// Checks that a Festival server answers and has festival-freebsoft-utils.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn test_festival(ctx: &mut Context) -> Result<bool, WizardError> {
    ctx.dialog.report("Testing whether Festival works as a server");
    let host = ctx.config.festival.host.clone();
    let port = ctx.config.festival.port;
    let timeout = ctx.config.festival.connect_timeout();

    for attempt in 1..=MAX_ATTEMPTS {
        match ctx.festival.probe(&host, port, timeout) {
            Ok(status) if status.freebsoft_utils => {
                info!(%host, port, "festival server answered");
                ctx.dialog.report("Festival server seems to work correctly");
                return Ok(true);
            }
            Ok(_) => {
                ctx.dialog.report(
                    "ERROR: Your Festival server is working but it doesn't seem\n\
                     to load festival-freebsoft-utils. You need to install festival-freebsoft-utils\n\
                     to be able to use Festival with OpenTTS.",
                );
                return Ok(false);
            }
            Err(e) => {
                warn!("{e}");
                ctx.dialog.report(format!(
                    "ERROR: It was not possible to connect to Festival on the\n\
                     given host and port. {e}."
                ));
                ctx.dialog.report(
                    "Hint: Most likely, your Festival server is not running now\n\
                     (or not at the default port).\n\
                     Try /etc/init.d/festival start or run 'festival --server' from the command line.",
                );
            }
        }
        if attempt == MAX_ATTEMPTS || !ctx.dialog.question("Do you want to try again?", true)? {
            break;
        }
    }
    ctx.dialog.report("Festival server is not working now.");
    Ok(false)
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Sound systems with a standard playback utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSystem {
    Alsa,
    Pulse,
}

impl AudioSystem {
    /// The identifier used in `AudioOutputMethod`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioSystem::Alsa => "alsa",
            AudioSystem::Pulse => "pulse",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AudioSystem::Alsa => "ALSA",
            AudioSystem::Pulse => "PULSE",
        }
    }

    fn player<'a>(&self, ctx: &'a Context) -> &'a str {
        match self {
            AudioSystem::Alsa => &ctx.config.commands.aplay,
            AudioSystem::Pulse => &ctx.config.commands.paplay,
        }
    }
}

impl fmt::Display for AudioSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plays the test sound through `system`'s playback utility.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn audio_try_play(ctx: &mut Context, system: AudioSystem) -> Result<bool, WizardError> {
    let command = CommandLine::new(system.player(ctx)).path_arg(&ctx.paths.test_sound());

    let status = match ctx.runner.run(&command) {
        Ok(status) => status,
        Err(e) => {
            warn!("{e}");
            ctx.dialog.report(format!(
                "Can't execute the {} command, The tool might just not be installed.\n\
                 This doesn't mean that the sound system is not working, but we can't determine it.\n\
                 Please test manually.",
                command.program
            ));
            let sure = ctx
                .dialog
                .question(&format!("Are you sure that {system} audio is working?"), false)?;
            return Ok(sure);
        }
    };

    if !status.success() {
        ctx.dialog.report(format!("Can't play audio via {command}"));
        ctx.dialog.report(
            "Your audio doesn't seem to work, please fix audio first or choose\n\
             a different method.",
        );
        return Ok(false);
    }

    if !ctx.dialog.question("Did you hear the sound?", true)? {
        ctx.dialog.report(
            "Please examine the above output from the sound playback\n\
             utility. If everything seems right, are you sure your audio is loud enough and\n\
             not muted in the mixer? Please fix your audio system first or choose a different\n\
             audio output method in configuration.",
        );
        return Ok(false);
    }
    Ok(true)
}

/// Announces and runs [`audio_try_play`] for `system`.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn test_audio(ctx: &mut Context, system: AudioSystem) -> Result<bool, WizardError> {
    ctx.dialog
        .report(format!("Testing {} sound output", system.label()));
    audio_try_play(ctx, system)
}

// ── Python library ────────────────────────────────────────────────────────────

/// Checks that the Python client library can be imported.
pub fn python_library_importable(ctx: &mut Context) -> bool {
    let commands = &ctx.config.commands;
    let command = CommandLine::new(&commands.python)
        .arg("-c")
        .arg(format!("import {}", commands.python_module));

    let importable = matches!(ctx.run_quietly(&command), Some(status) if status.success());
    if !importable {
        ctx.dialog.report(
            "Python can't find the OpenTTS library.\n\
             Is it installed? This won't prevent OpenTTS to work, but no\n\
             Python applications like Orca will find it.\n\
             Search for package like python-opentts.",
        );
    }
    importable
}

// ── Full diagnostics ──────────────────────────────────────────────────────────

/// What a diagnostics run should look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsRequest {
    /// Whether the daemon is believed to be running; if not, `otts-say` is
    /// not tried.
    pub daemon_running: bool,
    /// Synthesizers to test without asking.  Empty means ask for each.
    pub output_modules: Vec<String>,
    /// Audio systems to test without asking.  Empty means ask for each.
    pub audio_outputs: Vec<String>,
}

impl Default for DiagnosticsRequest {
    fn default() -> Self {
        Self {
            daemon_running: true,
            output_modules: Vec::new(),
            audio_outputs: Vec::new(),
        }
    }
}

/// Outcome of [`run_diagnostics`].  `None` marks a part that was not run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub speech_working: bool,
    pub synthesizers: Option<Vec<String>>,
    pub audio: Option<Vec<String>>,
    pub python_library: Option<bool>,
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\nDiagnostics results:")?;
        if self.speech_working {
            writeln!(f, "OpenTTS is working")?;
        } else {
            writeln!(f, "OpenTTS not working")?;
        }
        if let Some(synthesizers) = &self.synthesizers {
            writeln!(
                f,
                "Synthesizers that were tested and work: {}",
                quoted_list(synthesizers)
            )?;
        }
        if let Some(audio) = &self.audio {
            writeln!(f, "Audio systems that were tested and work: {}", quoted_list(audio))?;
        }
        match self.python_library {
            Some(true) => writeln!(f, "Python OpenTTS module is importable")?,
            Some(false) => writeln!(
                f,
                "Python OpenTTS module not importable.\nEither not installed or not in path."
            )?,
            None => {}
        }
        write!(f, "End of diagnostics results")
    }
}

fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{i}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Tests `identifier` if it was requested, or if nothing was requested and
/// the operator agrees.
fn decide_to_test(
    ctx: &mut Context,
    identifier: &str,
    name: &str,
    listing: &[String],
) -> Result<bool, WizardError> {
    if listing.iter().any(|item| item == identifier) {
        return Ok(true);
    }
    if !listing.is_empty() {
        return Ok(false);
    }
    Ok(ctx
        .dialog
        .question(&format!("Do you want to test the {name} now?"), true)?)
}

/// Runs the checks selected by `request` and collects their results.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn run_diagnostics(
    ctx: &mut Context,
    request: &DiagnosticsRequest,
) -> Result<DiagnosticsReport, WizardError> {
    let speech_working = request.daemon_running && test_otts_say(ctx)?;

    if speech_working {
        if ctx
            .dialog
            .question("OpenTTS works. Do you want to skip other tests?", true)?
        {
            return Ok(DiagnosticsReport {
                speech_working,
                ..DiagnosticsReport::default()
            });
        }
    } else if !ctx.dialog.question(
        "\nOpenTTS isn't running or we can't connect to it (see above),\n\
         do you want to proceed with other tests? (They can help to determine\n\
         what is wrong)",
        true,
    )? {
        return Ok(DiagnosticsReport::default());
    }

    let mut synthesizers = Vec::new();
    if decide_to_test(ctx, "festival", "Festival synthesizer", &request.output_modules)?
        && test_festival(ctx)?
    {
        synthesizers.push("festival".to_string());
    }
    if decide_to_test(ctx, "espeak", "Espeak synthesizer", &request.output_modules)?
        && test_espeak(ctx)?
    {
        synthesizers.push("espeak".to_string());
    }

    let mut audio = Vec::new();
    for (system, name) in [
        (AudioSystem::Alsa, "ALSA sound system"),
        (AudioSystem::Pulse, "Pulse Audio sound system"),
    ] {
        if decide_to_test(ctx, system.as_str(), name, &request.audio_outputs)?
            && test_audio(ctx, system)?
        {
            audio.push(system.as_str().to_string());
        }
    }

    ctx.dialog
        .report("Testing whether Python OpenTTS library is in path and importable");
    let python_library = python_library_importable(ctx);

    Ok(DiagnosticsReport {
        speech_working,
        synthesizers: Some(synthesizers),
        audio: Some(audio),
        python_library: Some(python_library),
    })
}

/// Shows `report` to the operator.
pub fn write_diagnostics_results(ctx: &mut Context, report: &DiagnosticsReport) {
    ctx.dialog.report(report.to_string());
}

#[cfg(test)]
mod tests {
    use std::io;

    use mockall::predicate::eq;

    use super::*;
    use crate::application::context::testing::ContextBuilder;
    use crate::application::system::{CommandError, CommandStatus, FestivalError, FestivalStatus};

    fn spawn_error(c: &CommandLine) -> CommandError {
        CommandError::Spawn {
            program: c.program.clone(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    fn otts_say() -> CommandLine {
        CommandLine::new("otts-say")
            .arg("-P")
            .arg("important")
            .arg("OpenTTS seems to work")
    }

    // ── hearing tests ─────────────────────────────────────────────────────────

    #[test]
    fn test_otts_say_heard() {
        // Arrange
        let mut builder = ContextBuilder::new(&["yes"]);
        builder
            .runner
            .expect_run()
            .with(eq(otts_say()))
            .times(1)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        // Act
        let working = test_otts_say(&mut ctx).unwrap();

        // Assert
        assert!(working);
        assert!(console.reported("OpenTTS is working"));
    }

    #[test]
    fn test_otts_say_repeated_then_given_up() {
        // Arrange: not heard, repeat, not heard, stop
        let mut builder = ContextBuilder::new(&["no", "yes", "no", "no"]);
        builder
            .runner
            .expect_run()
            .times(2)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        // Act
        let working = test_otts_say(&mut ctx).unwrap();

        // Assert
        assert!(!working);
        assert!(console.reported("OpenTTS not working now"));
        assert_eq!(console.remaining_answers(), 0);
    }

    #[test]
    fn test_otts_say_missing_binary() {
        let mut builder = ContextBuilder::new(&[]);
        builder
            .runner
            .expect_run()
            .times(1)
            .returning(|c| Err(spawn_error(c)));
        let (mut ctx, console) = builder.build();

        assert!(!test_otts_say(&mut ctx).unwrap());
        assert!(console.reported("Can't execute the otts-say binary"));
    }

    #[test]
    fn test_espeak_speaks_fixed_message() {
        let mut builder = ContextBuilder::new(&[""]);
        builder
            .runner
            .expect_run()
            .with(eq(CommandLine::new("espeak").arg("Espeak seems to work")))
            .times(1)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        assert!(test_espeak(&mut ctx).unwrap());
        assert!(console.reported("Espeak is working"));
    }

    #[test]
    fn test_hearing_repeats_are_bounded() {
        // Arrange: never heard, always agree to repeat
        let answers: Vec<&str> = std::iter::repeat(["no", "yes"]).take(10).flatten().collect();
        let mut builder = ContextBuilder::new(&answers);
        builder
            .runner
            .expect_run()
            .times(MAX_ATTEMPTS)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, _) = builder.build();

        // Act + Assert
        assert!(!test_espeak(&mut ctx).unwrap());
    }

    // ── festival ──────────────────────────────────────────────────────────────

    #[test]
    fn test_festival_with_freebsoft_utils_passes() {
        // Arrange
        let mut builder = ContextBuilder::new(&[]);
        builder
            .festival
            .expect_probe()
            .withf(|host, port, _| host == "localhost" && *port == 1314)
            .times(1)
            .returning(|_, _, _| Ok(FestivalStatus { freebsoft_utils: true }));
        let (mut ctx, console) = builder.build();

        // Act
        let working = test_festival(&mut ctx).unwrap();

        // Assert
        assert!(working);
        assert!(console.reported("Festival server seems to work correctly"));
    }

    #[test]
    fn test_festival_without_freebsoft_utils_fails() {
        let mut builder = ContextBuilder::new(&[]);
        builder
            .festival
            .expect_probe()
            .times(1)
            .returning(|_, _, _| Ok(FestivalStatus { freebsoft_utils: false }));
        let (mut ctx, console) = builder.build();

        assert!(!test_festival(&mut ctx).unwrap());
        assert!(console.reported("festival-freebsoft-utils"));
    }

    #[test]
    fn test_festival_retry_succeeds_second_time() {
        // Arrange
        let mut builder = ContextBuilder::new(&["yes"]);
        let mut calls = 0;
        builder
            .festival
            .expect_probe()
            .times(2)
            .returning(move |host, port, _| {
                calls += 1;
                if calls == 1 {
                    Err(FestivalError::Resolve {
                        host: host.to_string(),
                        port,
                    })
                } else {
                    Ok(FestivalStatus { freebsoft_utils: true })
                }
            });
        let (mut ctx, console) = builder.build();

        // Act
        let working = test_festival(&mut ctx).unwrap();

        // Assert
        assert!(working);
        assert!(console.reported("It was not possible to connect to Festival"));
    }

    #[test]
    fn test_festival_declined_retry_fails() {
        let mut builder = ContextBuilder::new(&["no"]);
        builder
            .festival
            .expect_probe()
            .times(1)
            .returning(|host, port, _| {
                Err(FestivalError::Resolve {
                    host: host.to_string(),
                    port,
                })
            });
        let (mut ctx, console) = builder.build();

        assert!(!test_festival(&mut ctx).unwrap());
        assert!(console.reported("Festival server is not working now."));
    }

    // ── audio ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_alsa_plays_test_sound_with_aplay() {
        // Arrange
        let mut builder = ContextBuilder::new(&["yes"]);
        builder
            .runner
            .expect_run()
            .with(eq(
                CommandLine::new("aplay").arg("/usr/share/sounds/opentts/test.wav")
            ))
            .times(1)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        // Act
        let working = test_audio(&mut ctx, AudioSystem::Alsa).unwrap();

        // Assert
        assert!(working);
        assert!(console.reported("Testing ALSA sound output"));
    }

    #[test]
    fn test_pulse_playback_failure() {
        let mut builder = ContextBuilder::new(&[]);
        builder
            .runner
            .expect_run()
            .withf(|c| c.program == "paplay")
            .times(1)
            .returning(|_| Ok(CommandStatus::exited(1)));
        let (mut ctx, console) = builder.build();

        assert!(!audio_try_play(&mut ctx, AudioSystem::Pulse).unwrap());
        assert!(console.reported("Can't play audio via paplay"));
    }

    #[test]
    fn test_audio_not_heard() {
        let mut builder = ContextBuilder::new(&["no"]);
        builder
            .runner
            .expect_run()
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        assert!(!audio_try_play(&mut ctx, AudioSystem::Alsa).unwrap());
        assert!(console.reported("not muted in the mixer"));
    }

    #[test]
    fn test_missing_player_asks_for_manual_confirmation() {
        // Arrange
        let mut builder = ContextBuilder::new(&["yes"]);
        builder
            .runner
            .expect_run()
            .returning(|c| Err(spawn_error(c)));
        let (mut ctx, console) = builder.build();

        // Act
        let working = audio_try_play(&mut ctx, AudioSystem::Pulse).unwrap();

        // Assert
        assert!(working);
        assert!(console.reported("Are you sure that pulse audio is working?"));
    }

    // ── python ────────────────────────────────────────────────────────────────

    #[test]
    fn test_python_library_import_command() {
        let mut builder = ContextBuilder::new(&[]);
        builder
            .runner
            .expect_run()
            .with(eq(CommandLine::new("python3").arg("-c").arg("import opentts")))
            .times(1)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, _) = builder.build();

        assert!(python_library_importable(&mut ctx));
    }

    #[test]
    fn test_python_library_missing_reports_hint() {
        let mut builder = ContextBuilder::new(&[]);
        builder
            .runner
            .expect_run()
            .returning(|_| Ok(CommandStatus::exited(1)));
        let (mut ctx, console) = builder.build();

        assert!(!python_library_importable(&mut ctx));
        assert!(console.reported("Python can't find the OpenTTS library."));
    }

    // ── full run ──────────────────────────────────────────────────────────────

    #[test]
    fn test_diagnostics_skips_rest_when_speech_works() {
        // Arrange: heard the message, skip the rest
        let mut builder = ContextBuilder::new(&["yes", "yes"]);
        builder
            .runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, _) = builder.build();

        // Act
        let report = run_diagnostics(&mut ctx, &DiagnosticsRequest::default()).unwrap();

        // Assert
        assert_eq!(
            report,
            DiagnosticsReport {
                speech_working: true,
                ..DiagnosticsReport::default()
            }
        );
    }

    #[test]
    fn test_diagnostics_stops_when_operator_declines_other_tests() {
        let request = DiagnosticsRequest {
            daemon_running: false,
            ..DiagnosticsRequest::default()
        };
        let (mut ctx, _) = ContextBuilder::new(&["no"]).build();

        let report = run_diagnostics(&mut ctx, &request).unwrap();

        assert_eq!(report, DiagnosticsReport::default());
    }

    #[test]
    fn test_diagnostics_tests_only_listed_items() {
        // Arrange: daemon not running; festival and alsa are not listed
        let request = DiagnosticsRequest {
            daemon_running: false,
            output_modules: vec!["espeak".into()],
            audio_outputs: vec!["pulse".into()],
        };
        // proceed, espeak heard, pulse heard
        let mut builder = ContextBuilder::new(&["yes", "yes", "yes"]);
        builder
            .runner
            .expect_run()
            .withf(|c| c.program == "espeak" || c.program == "paplay" || c.program == "python3")
            .times(3)
            .returning(|c| {
                if c.program == "python3" {
                    Ok(CommandStatus::exited(1))
                } else {
                    Ok(CommandStatus::SUCCESS)
                }
            });
        let (mut ctx, console) = builder.build();

        // Act
        let report = run_diagnostics(&mut ctx, &request).unwrap();

        // Assert
        assert!(!report.speech_working);
        assert_eq!(report.synthesizers, Some(vec!["espeak".to_string()]));
        assert_eq!(report.audio, Some(vec!["pulse".to_string()]));
        assert_eq!(report.python_library, Some(false));
        assert!(!console.reported("Do you want to test the"));
    }

    #[test]
    fn test_diagnostics_asks_for_each_item_when_nothing_listed() {
        // Arrange: speech not heard, no repeat, proceed, decline every test
        let mut builder = ContextBuilder::new(&["no", "no", "yes", "no", "no", "no", "no"]);
        builder
            .runner
            .expect_run()
            .returning(|_| Ok(CommandStatus::SUCCESS));
        let (mut ctx, console) = builder.build();

        // Act
        let report = run_diagnostics(&mut ctx, &DiagnosticsRequest::default()).unwrap();

        // Assert
        assert_eq!(report.synthesizers, Some(vec![]));
        assert_eq!(report.audio, Some(vec![]));
        assert_eq!(report.python_library, Some(true));
        assert!(console.reported("Do you want to test the Festival synthesizer now?"));
        assert!(console.reported("Do you want to test the Pulse Audio sound system now?"));
    }

    #[test]
    fn test_report_renders_only_parts_that_ran() {
        let report = DiagnosticsReport {
            speech_working: false,
            synthesizers: Some(vec!["festival".into(), "espeak".into()]),
            audio: None,
            python_library: Some(true),
        };

        let text = report.to_string();

        assert!(text.contains("OpenTTS not working"));
        assert!(text.contains("Synthesizers that were tested and work: ['festival', 'espeak']"));
        assert!(!text.contains("Audio systems"));
        assert!(text.contains("Python OpenTTS module is importable"));
        assert!(text.ends_with("End of diagnostics results"));
    }
}
