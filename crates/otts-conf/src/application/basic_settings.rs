//! Basic settings: ask the operator for the most important options and
//! write them into `openttsd.conf`.

use otts_conf_core::SettingRequest;

use super::context::Context;
use super::error::WizardError;
use super::paths::{Target, DESKTOP_FILE_NAME};

pub(crate) const ROOT_WARNING: &str = "Warning: You must be root or under sudo to do this.";

const OUTPUT_MODULES: [&str; 5] = ["espeak", "flite", "festival", "cicero", "ibmtts"];
const AUDIO_METHODS: [&str; 4] = ["pulse", "alsa", "oss", "pulse,alsa"];

/// The answers collected by [`configure_basic_settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSettings {
    pub output_module: String,
    pub language: String,
    /// Comma-separated list of audio methods, tried in order by the daemon.
    pub audio_method: String,
    pub rate: i64,
    pub pitch: i64,
}

impl BasicSettings {
    /// The settings as written into `openttsd.conf`.
    pub fn to_request(&self) -> SettingRequest {
        SettingRequest::new()
            .with("DefaultModule", self.output_module.as_str())
            .with("DefaultLanguage", self.language.as_str())
            .with("AudioOutputMethod", self.audio_method.as_str())
            .with("DefaultRate", self.rate)
            .with("DefaultPitch", self.pitch)
    }

    /// Individual audio methods named by [`BasicSettings::audio_method`].
    pub fn audio_methods(&self) -> Vec<String> {
        self.audio_method
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Asks for the basic settings without writing anything.
///
/// # Errors
///
/// Returns [`WizardError::Console`] if the operator's input cannot be read.
pub fn ask_basic_settings(ctx: &mut Context) -> Result<BasicSettings, WizardError> {
    let dialog = &mut ctx.dialog;

    let output_module = dialog.question_with_suggested_answers(
        "Default output module",
        "espeak".to_string(),
        &OUTPUT_MODULES.map(String::from),
    )?;
    let language = dialog.question(
        "Default language (two-letter iso language code like \"en\" or \"cs\")",
        "en".to_string(),
    )?;
    let audio_method = dialog.question_with_suggested_answers(
        "Default audio output method",
        "pulse,alsa".to_string(),
        &AUDIO_METHODS.map(String::from),
    )?;
    let rate = dialog.question(
        "Default speech rate (on the scale of -100..100, 0 is default, 50 is faster, -50 is slower)",
        0i64,
    )?;
    let pitch = dialog.question(
        "Default speech pitch (on the scale of -100..100, 0 is default, 50 is higher, -50 is lower)",
        0i64,
    )?;

    Ok(BasicSettings {
        output_module,
        language,
        audio_method,
        rate,
        pitch,
    })
}

/// Asks for the basic settings and rewrites them in the configuration file
/// of `target`.  For the user daemon, also offers desktop autostart.
///
/// # Errors
///
/// Returns [`WizardError`] if input cannot be read, the configuration file
/// cannot be patched, or the desktop entry cannot be copied.
pub fn configure_basic_settings(
    ctx: &mut Context,
    target: Target,
) -> Result<BasicSettings, WizardError> {
    match target {
        Target::User => ctx.dialog.report("Configuring user settings for OpenTTS"),
        Target::System => {
            ctx.dialog.report(ROOT_WARNING);
            ctx.dialog.report("Configuring system settings for OpenTTS");
        }
    }

    let settings = ask_basic_settings(ctx)?;
    let conf_file = ctx.paths.conf_file(target);
    ctx.patcher.patch(&conf_file, &settings.to_request())?;

    if target == Target::User {
        let autostart = ctx.dialog.question(
            "Do you want to have OpenTTS automatically started from ~/.config/autostart ?",
            true,
        )?;
        if autostart {
            let destination = ctx.paths.autostart_dir().join(DESKTOP_FILE_NAME);
            ctx.tree.copy_file(&ctx.paths.desktop_file(), &destination)?;
        }
    }

    ctx.dialog.report(format!(
        "\nConfiguration written to {}\n\
         Basic configuration now complete. You might still need to fine tune it by\n\
         manually editing the configuration above file. Especially if you need to\n\
         use special audio settings, non-standard synthesizer ports etc.",
        conf_file.display()
    ));
    Ok(settings)
}
