//! Starting the speech daemon in user or system mode.

use tracing::{info, warn};

use super::basic_settings::ROOT_WARNING;
use super::context::{Context, MAX_ATTEMPTS};
use super::error::WizardError;
use super::paths::Target;
use super::system::CommandLine;

/// Starts the daemon for `target`; returns whether it is believed running.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn start_daemon(ctx: &mut Context, target: Target) -> Result<bool, WizardError> {
    match target {
        Target::User => start_user_daemon(ctx),
        Target::System => start_system_daemon(ctx),
    }
}

/// Runs the daemon as the current user.
///
/// A non-zero exit usually means another instance holds the socket, so the
/// operator is offered to kill running daemons and try again.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn start_user_daemon(ctx: &mut Context) -> Result<bool, WizardError> {
    ctx.dialog.report("Starting OpenTTS in user-mode");
    let command = CommandLine::new(&ctx.config.commands.daemon);

    for attempt in 1..=MAX_ATTEMPTS {
        let status = match ctx.runner.run(&command) {
            Ok(status) => status,
            Err(e) => {
                warn!("{e}");
                ctx.dialog.report(format!("Can't start OpenTTS: {e}"));
                return Ok(false);
            }
        };
        if status.success() {
            info!(attempt, "user daemon started");
            return Ok(true);
        }

        ctx.dialog
            .report(format!("Can't start OpenTTS. Exited with status {status}"));
        if attempt == MAX_ATTEMPTS {
            break;
        }
        let retry = ctx.dialog.question(
            "\nPerhaps this is because your OpenTTS is already running.\n\
             Do you want to kill all running OpenTTS processes and try again?",
            true,
        )?;
        if !retry {
            break;
        }
        ctx.kill_daemons();
    }

    ctx.dialog.report("Can't start OpenTTS");
    Ok(false)
}

/// Starts the system-wide daemon through its init script, or asks the
/// operator to start it by hand.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn start_system_daemon(ctx: &mut Context) -> Result<bool, WizardError> {
    ctx.dialog.report(ROOT_WARNING);
    ctx.dialog.report("Starting OpenTTS in system-mode");

    let script = ctx.config.commands.init_script.clone();
    let uses_script = ctx
        .dialog
        .question(&format!("Is your system using an {script} script?"), true)?;

    if !uses_script {
        ctx.dialog.report(
            "Do not know how to start system OpenTTS,\n\
             you have to start it manually to continue.",
        );
        let started = ctx.dialog.question("Have you started OpenTTS now?", true)?;
        if !started {
            ctx.dialog.report("Can't continue");
        }
        return Ok(started);
    }

    ctx.dialog
        .report("Stopping OpenTTS in case any is running already");
    ctx.run_quietly(&CommandLine::new(&script).arg("stop"));

    ctx.dialog.report(format!("Starting OpenTTS via {script}"));
    match ctx.runner.run(&CommandLine::new(&script).arg("start")) {
        Ok(status) if status.success() => Ok(true),
        Ok(status) => {
            ctx.dialog
                .report(format!("Can't start OpenTTS. Exited with status {status}"));
            Ok(false)
        }
        Err(e) => {
            warn!("{e}");
            ctx.dialog.report(format!("Can't start OpenTTS: {e}"));
            Ok(false)
        }
    }
}
