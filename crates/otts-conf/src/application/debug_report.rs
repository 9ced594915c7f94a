//! Collecting a debug archive for the developers.
//!
//! The daemon is restarted with `-D`, which makes it write verbose logs to
//! `$TMPDIR/openttsd-debug`.  After a few test messages those logs and the
//! configuration directory are packed into a dated `tar.gz`.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::basic_settings::ROOT_WARNING;
use super::context::Context;
use super::error::WizardError;
use super::paths::Target;
use super::system::CommandLine;
use super::wizard::ask_target;

/// Where the archive should be sent.
pub const REPORT_ADDRESS: &str = "opentts-dev@lists.opentts.org";

/// Restarts the daemon in debug mode, speaks test messages and packs the
/// debug output and configuration into an archive.
///
/// Returns the archive path, or `None` when the operator could not get the
/// daemon into the required state or the archive could not be written.
///
/// # Errors
///
/// Returns [`WizardError`] if input cannot be read or the archive permissions
/// or the debug directory cannot be handled.
pub fn debug_and_report(
    ctx: &mut Context,
    target: Option<Target>,
    today: NaiveDate,
) -> Result<Option<PathBuf>, WizardError> {
    ctx.dialog
        .report("Starting collecting debugging output, configuration and logfiles");

    let target = match target {
        Some(target) => target,
        None => ask_target(ctx, "\nDo you want to debug 'system' or 'user' OpenTTS?")?,
    };

    let kill = ctx.dialog.question(
        "It is necessary to kill the currently running OpenTTS\n\
         processes. Do you want to do it now?",
        true,
    )?;
    if kill {
        ctx.kill_daemons();
    } else {
        ctx.dialog.report(
            "\nYou decided not to kill running OpenTTS processes.\n\
             Please make sure your OpenTTS is not running now.",
        );
        if !ctx.dialog.question("Is your OpenTTS not running now?", true)? {
            ctx.dialog
                .report("Can't continue, please stop your OpenTTS and try again");
            return Ok(None);
        }
    }
    ctx.pause(ctx.config.timing.settle_delay());

    let debug_dir = ctx.paths.debug_dir();
    let archive = ctx.paths.debug_archive(today);
    let conf_dir = ctx.paths.conf_dir(target);

    let started = match target {
        Target::User => {
            ctx.dialog
                .report("OpenTTS will be started now in debugging mode");
            let command = CommandLine::new(&ctx.config.commands.daemon).arg("-D");
            matches!(ctx.run_quietly(&command), Some(status) if status.success())
        }
        Target::System => {
            ctx.dialog.report(ROOT_WARNING);
            ctx.dialog
                .report("\nPlease start your system OpenTTS now with parameter '-D'");
            if !ctx.dialog.question("Is your OpenTTS running now?", true)? {
                ctx.dialog.report("Can't continue");
                return Ok(None);
            }
            true
        }
    };
    ctx.pause(ctx.config.timing.settle_delay());

    if !started {
        ctx.dialog
            .report("OpenTTS failed to start, continuing anyway");
    }

    ctx.dialog.report("Trying to speak some messages");
    for n in 1..=3 {
        let command =
            CommandLine::new(&ctx.config.commands.say).arg(format!("OpenTTS debugging {n}"));
        let spoken = matches!(ctx.run_quietly(&command), Some(status) if status.success());
        if n == 1 && !spoken {
            ctx.dialog
                .report("Can't test OpenTTS connection, can't connect");
        }
    }

    ctx.dialog.report("Please wait (about 5 seconds)");
    ctx.pause(ctx.config.timing.collect_delay());

    ctx.dialog
        .report("Collecting debugging output and your configuration information");
    let tar = CommandLine::new(&ctx.config.commands.tar)
        .arg("-czf")
        .path_arg(&archive)
        .path_arg(&debug_dir)
        .path_arg(&conf_dir);
    let packed = matches!(ctx.run_quietly(&tar), Some(status) if status.success());
    if packed {
        ctx.tree.restrict_to_owner(&archive)?;
    }

    ctx.kill_daemons();
    ctx.tree.remove_tree(&debug_dir)?;

    if !packed {
        warn!(archive = %archive.display(), "debug archive was not created");
        ctx.dialog
            .report(format!("Can't create the debugging archive {}", archive.display()));
        return Ok(None);
    }

    info!(archive = %archive.display(), "debug archive written");
    ctx.dialog.report(format!(
        "\nPlease send {} to {REPORT_ADDRESS} with\n\
         a short description of what you did. We will get in touch with you soon\n\
         and suggest a solution.",
        archive.display()
    ));
    Ok(Some(archive))
}
