//! Creation of the per-user configuration tree.
//!
//! A user configuration is a copy of the pristine configuration shipped with
//! the daemon, placed in `~/.opentts/conf`.  Existing configurations are
//! only replaced after the operator agrees.

use tracing::info;

use super::context::Context;
use super::error::WizardError;
use super::paths::CONF_FILE_NAME;

/// What happened to the user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserConfigOutcome {
    /// A fresh copy of the pristine configuration was installed.
    Created,
    /// A complete configuration existed and was kept.
    KeptComplete,
    /// An incomplete configuration existed and the operator chose to keep it.
    KeptIncomplete,
}

/// Decides whether the user configuration looks reasonably complete:
/// `openttsd.conf` plus the `modules/` and `clients/` subdirectories, and
/// more than two entries overall.
pub fn user_configuration_seems_complete(ctx: &Context) -> bool {
    let conf_dir = ctx.paths.user_conf_dir();

    if !ctx.tree.exists(&conf_dir.join(CONF_FILE_NAME)) {
        return false;
    }
    match ctx.tree.entry_count(&conf_dir) {
        Ok(count) if count > 2 => {}
        _ => return false,
    }
    ctx.tree.exists(&conf_dir.join("modules")) && ctx.tree.exists(&conf_dir.join("clients"))
}

/// Creates the user configuration in the standard location.
///
/// # Errors
///
/// Returns [`WizardError`] if the operator's input cannot be read or the
/// configuration tree cannot be removed, created or copied.
pub fn create_user_configuration(ctx: &mut Context) -> Result<UserConfigOutcome, WizardError> {
    let daemon_dir = ctx.paths.user_daemon_dir();
    let conf_dir = ctx.paths.user_conf_dir();

    if ctx.tree.exists(&daemon_dir) {
        if ctx.tree.exists(&conf_dir) {
            if user_configuration_seems_complete(ctx) {
                let rewrite = ctx.dialog.question(
                    "User configuration already exists.\nDo you want to rewrite it with a new one?",
                    false,
                )?;
                if !rewrite {
                    ctx.dialog
                        .report("Keeping configuration intact and continuing with settings.");
                    return Ok(UserConfigOutcome::KeptComplete);
                }
            } else {
                let keep = ctx.dialog.question(
                    "User configuration already exists, but it seems to be incomplete.\nDo you want to keep it?",
                    false,
                )?;
                if keep {
                    ctx.dialog.report("Keeping configuration intact and aborting.");
                    return Ok(UserConfigOutcome::KeptIncomplete);
                }
            }
            info!(dir = %conf_dir.display(), "removing user configuration");
            ctx.tree.remove_tree(&conf_dir)?;
        }
    } else {
        ctx.dialog.report(format!("Creating {}", daemon_dir.display()));
        ctx.tree.create_dir(&daemon_dir)?;
    }

    ctx.tree.copy_tree(&ctx.paths.pristine_conf_dir, &conf_dir)?;
    ctx.dialog
        .report(format!("User configuration created in {}", conf_dir.display()));
    Ok(UserConfigOutcome::Created)
}
