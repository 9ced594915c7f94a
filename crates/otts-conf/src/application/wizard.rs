//! Top-level flows: one action per invocation of the tool.

use chrono::NaiveDate;

use super::basic_settings::configure_basic_settings;
use super::context::Context;
use super::daemon::start_daemon;
use super::debug_report::debug_and_report;
use super::diagnostics::{
    run_diagnostics, test_audio, test_espeak, test_festival, test_otts_say,
    write_diagnostics_results, AudioSystem, DiagnosticsRequest,
};
use super::error::WizardError;
use super::paths::Target;
use super::user_config::{create_user_configuration, UserConfigOutcome};

/// What the operator asked the tool to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create `~/.opentts/conf`, then optionally the basic settings.
    CreateUserConf,
    BasicSettings(Target),
    TestFestival,
    TestOttsSay,
    TestEspeak,
    TestAudio(AudioSystem),
    Diagnostics,
    Debug,
    /// No action selected; ask what to do.
    Interactive,
}

/// Asks whether to work on the `user` or the `system` daemon.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn ask_target(ctx: &mut Context, text: &str) -> Result<Target, WizardError> {
    let choices = Target::CHOICES.map(String::from);
    let reply = ctx
        .dialog
        .question_with_required_answers(text, Target::User.to_string(), &choices)?;
    Ok(reply.parse().unwrap_or(Target::User))
}

/// Runs `action` to completion.
///
/// Check results are shown to the operator; only failures of the tool itself
/// come back as errors.
///
/// # Errors
///
/// Returns [`WizardError`] if input cannot be read or a configuration file
/// or tree cannot be written.
pub fn run(ctx: &mut Context, action: Action, today: NaiveDate) -> Result<(), WizardError> {
    match action {
        Action::CreateUserConf => {
            if create_user_configuration(ctx)? == UserConfigOutcome::KeptIncomplete {
                return Ok(());
            }
            if ctx
                .dialog
                .question("Do you want to continue with basic settings?", true)?
            {
                configure_basic_settings(ctx, Target::User)?;
            }
        }
        Action::BasicSettings(target) => {
            configure_basic_settings(ctx, target)?;
        }
        Action::TestFestival => {
            test_festival(ctx)?;
        }
        Action::TestOttsSay => {
            test_otts_say(ctx)?;
        }
        Action::TestEspeak => {
            test_espeak(ctx)?;
        }
        Action::TestAudio(system) => {
            test_audio(ctx, system)?;
        }
        Action::Diagnostics => {
            let report = run_diagnostics(ctx, &DiagnosticsRequest::default())?;
            write_diagnostics_results(ctx, &report);
        }
        Action::Debug => {
            debug_and_report(ctx, None, today)?;
        }
        Action::Interactive => interactive(ctx, today)?,
    }
    Ok(())
}

fn interactive(ctx: &mut Context, today: NaiveDate) -> Result<(), WizardError> {
    if ctx
        .dialog
        .question("Do you want to setup a completely new configuration?", true)?
    {
        return complete_config(ctx, today);
    }
    if ctx
        .dialog
        .question("Do you want to run diagnosis of problems?", true)?
    {
        let report = run_diagnostics(ctx, &DiagnosticsRequest::default())?;
        write_diagnostics_results(ctx, &report);
        return Ok(());
    }
    ctx.dialog.report(
        "Please run this command again and select what you want to do\n\
         or read the quick help available through '-h' or '--help'.",
    );
    Ok(())
}

/// Creates a complete configuration, starts the daemon, runs diagnostics
/// focused on the chosen settings and, if asked, collects a debug report.
///
/// # Errors
///
/// Returns [`WizardError`] if any step fails in a way the operator cannot
/// resolve interactively.
pub fn complete_config(ctx: &mut Context, today: NaiveDate) -> Result<(), WizardError> {
    let target = ask_target(
        ctx,
        "Do you want to create/setup a 'user' or 'system' configuration",
    )?;

    if target == Target::User
        && create_user_configuration(ctx)? == UserConfigOutcome::KeptIncomplete
    {
        return Ok(());
    }
    let settings = configure_basic_settings(ctx, target)?;

    if !ctx
        .dialog
        .question("Do you want to start/restart OpenTTS now and run some tests?", true)?
    {
        ctx.dialog
            .report("Your configuration is now done but not tested");
        return Ok(());
    }

    let started = start_daemon(ctx, target)?;
    if !started {
        ctx.dialog.report("Your OpenTTS is not running");
    }

    let request = DiagnosticsRequest {
        daemon_running: started,
        output_modules: vec![settings.output_module.clone()],
        audio_outputs: settings.audio_methods(),
    };
    let report = run_diagnostics(ctx, &request)?;
    write_diagnostics_results(ctx, &report);

    if ctx.dialog.question(
        "Do you want to run debugging now and send a request for help to the developers?",
        false,
    )? {
        debug_and_report(ctx, Some(target), today)?;
    }
    Ok(())
}
