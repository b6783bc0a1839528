//! Provider dispatch
//!
//! Turns an [`Invocation`] into validated provider requests and delivers the
//! resulting audio. Every check that can fail without the network runs in
//! [`Dispatcher::prepare`], so configuration errors never cost a request.
//!
//! ```text
//! provider name -> defaults -> API key -> speed/tuning -> text -> mode/voice
//!     -> build request -> execute -> write/play
//! ```

use log::{debug, error, info};
use std::fmt;
use std::time::Duration;

use crate::artifact::AudioArtifact;
use crate::error::{Result, TtsError};
use crate::executor::Synthesizer;
use crate::output::{self, Delivery, OutputPlan};
use crate::playback::AudioPlayer;
use crate::provider::{Provider, ProviderCatalog, ProviderProfile};
use crate::request::{SynthesisRequest, VoiceTuning};
use crate::validate::{self, DEFAULT_SPEED, SpeedSetting};

/// Environment variable lookup, injectable for tests
pub type EnvLookup<'e> = &'e dyn Fn(&str) -> Option<String>;

/// Read a variable from the process environment; empty values count as unset
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Options for one run, as given on the command line
#[derive(Debug, Clone)]
pub struct Invocation {
    pub provider: String,
    pub voice: Option<String>,
    pub model: Option<String>,
    pub text: String,
    pub speed: f64,
    pub token: Option<String>,
    /// Speak with every preset voice
    pub all_voices: bool,
    pub tuning: VoiceTuning,
    pub output: OutputPlan,
}

impl Invocation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            provider: Provider::default().to_string(),
            voice: None,
            model: None,
            text: text.into(),
            speed: DEFAULT_SPEED,
            token: None,
            all_voices: false,
            tuning: VoiceTuning::default(),
            output: OutputPlan::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    AllVoices,
}

/// A fully validated call, ready to be sent
pub struct PreparedCall<'a> {
    pub profile: &'a ProviderProfile,
    pub api_key: String,
    pub request: SynthesisRequest,
    pub mode: Mode,
    /// Non-fatal problems found while preparing, for the caller to report
    pub warnings: Vec<String>,
}

/// Pauses used when speaking with every voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoPauses {
    pub after_announcement: Duration,
    pub between_voices: Duration,
}

impl DemoPauses {
    pub fn none() -> Self {
        Self {
            after_announcement: Duration::ZERO,
            between_voices: Duration::ZERO,
        }
    }
}

impl Default for DemoPauses {
    fn default() -> Self {
        Self {
            after_announcement: Duration::from_millis(500),
            between_voices: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStage {
    /// The voice says its own name
    Announcement,
    /// The voice says the caller's text
    Utterance,
}

impl fmt::Display for DemoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoStage::Announcement => f.write_str("announcement"),
            DemoStage::Utterance => f.write_str("utterance"),
        }
    }
}

#[derive(Debug)]
pub struct VoiceFailure {
    pub voice: &'static str,
    pub stage: DemoStage,
    pub error: TtsError,
}

/// Summary of an all-voices run
#[derive(Debug, Default)]
pub struct DemoReport {
    pub voices: usize,
    pub attempts: usize,
    pub failures: Vec<VoiceFailure>,
}

#[derive(Debug)]
pub enum Outcome {
    Single(Delivery),
    AllVoices(DemoReport),
}

/// Pick the API key: explicit token first, then the provider's environment variable
pub fn resolve_api_key(
    profile: &ProviderProfile,
    token: Option<&str>,
    env: EnvLookup<'_>,
) -> Result<String> {
    non_empty(token)
        .map(String::from)
        .or_else(|| env(profile.env_var).filter(|key| !key.is_empty()))
        .ok_or(TtsError::MissingApiKey {
            provider: profile.display_name,
            env_var: profile.env_var,
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Wires the catalog, synthesizer and player together
pub struct Dispatcher<'a> {
    catalog: &'a ProviderCatalog,
    synthesizer: &'a dyn Synthesizer,
    player: &'a dyn AudioPlayer,
    pauses: DemoPauses,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        catalog: &'a ProviderCatalog,
        synthesizer: &'a dyn Synthesizer,
        player: &'a dyn AudioPlayer,
    ) -> Self {
        Self {
            catalog,
            synthesizer,
            player,
            pauses: DemoPauses::default(),
        }
    }

    pub fn with_pauses(mut self, pauses: DemoPauses) -> Self {
        self.pauses = pauses;
        self
    }

    /// Validate an invocation and resolve everything needed to send it.
    ///
    /// Never touches the network.
    pub fn prepare(&self, invocation: &Invocation, env: EnvLookup<'_>) -> Result<PreparedCall<'a>> {
        let profile = self.catalog.lookup(&invocation.provider)?;

        let voice = non_empty(invocation.voice.as_deref()).unwrap_or(profile.default_voice);
        let model = match profile.default_model {
            Some(default) => Some(
                non_empty(invocation.model.as_deref())
                    .unwrap_or(default)
                    .to_string(),
            ),
            None => {
                if let Some(model) = non_empty(invocation.model.as_deref()) {
                    debug!(
                        "{} has no model parameter, ignoring '{}'",
                        profile.display_name, model
                    );
                }
                None
            }
        };

        let api_key = resolve_api_key(profile, invocation.token.as_deref(), env)?;

        let mut warnings = Vec::new();
        let speed = validate::validate_speed(profile, invocation.speed)?;
        if let SpeedSetting::Ignored { requested } = speed {
            warnings.push(format!(
                "Speed adjustment is not supported for {}, ignoring speed {}",
                profile.display_name, requested
            ));
        }
        if profile.supports_tuning {
            validate::validate_tuning(&invocation.tuning)?;
        }

        if invocation.text.trim().is_empty() {
            return Err(TtsError::MissingText);
        }

        let (mode, voice) = if invocation.all_voices {
            if !profile.supports_voice_demo {
                return Err(TtsError::UnsupportedOption(format!(
                    "--all flag is only supported for the {} provider",
                    self.demo_providers()
                )));
            }
            if invocation.output.path.is_some() {
                warnings.push("--output is ignored when speaking with all voices".to_string());
            }
            (Mode::AllVoices, profile.resolve_voice(voice))
        } else {
            validate::validate_voice(profile, voice)?;
            (Mode::Single, profile.resolve_voice(voice))
        };

        let request = SynthesisRequest {
            voice,
            model,
            text: invocation.text.clone(),
            speed: speed.value(),
            tuning: invocation.tuning,
        };
        debug!(
            "Provider: {}, voice: {}, model: {}, speed: {:?}",
            profile.display_name,
            request.voice,
            request.model.as_deref().unwrap_or("(none)"),
            request.speed
        );

        Ok(PreparedCall {
            profile,
            api_key,
            request,
            mode,
            warnings,
        })
    }

    /// Prepare and carry out an invocation
    pub async fn run(&self, invocation: &Invocation, env: EnvLookup<'_>) -> Result<Outcome> {
        let call = self.prepare(invocation, env)?;
        self.execute(&call, &invocation.output).await
    }

    /// Carry out a prepared call in its mode
    pub async fn execute(&self, call: &PreparedCall<'_>, plan: &OutputPlan) -> Result<Outcome> {
        match call.mode {
            Mode::Single => self.speak_once(call, plan).await.map(Outcome::Single),
            Mode::AllVoices => Ok(Outcome::AllVoices(self.speak_all_voices(call).await)),
        }
    }

    /// Build and execute one request
    pub async fn synthesize(
        &self,
        call: &PreparedCall<'_>,
        request: &SynthesisRequest,
    ) -> Result<AudioArtifact> {
        let descriptor = call.profile.build_request(request, &call.api_key)?;
        self.synthesizer.execute(&descriptor).await
    }

    /// Synthesize the prepared request and hand it to the requested sinks
    pub async fn speak_once(&self, call: &PreparedCall<'_>, plan: &OutputPlan) -> Result<Delivery> {
        let audio = self.synthesize(call, &call.request).await?;
        output::deliver(&audio, plan, self.player)
    }

    /// Speak the text with every preset voice, in declared order.
    ///
    /// Each voice first announces its name, then speaks the text. A failed
    /// synthesis or playback is logged and recorded; the loop always runs to
    /// the end. There is no pause after the last voice.
    pub async fn speak_all_voices(&self, call: &PreparedCall<'_>) -> DemoReport {
        let mut report = DemoReport::default();
        let last = call.profile.presets.len().saturating_sub(1);

        for (index, preset) in call.profile.presets.iter().enumerate() {
            info!("Speaking with voice: {}", preset.name);
            report.voices += 1;

            let steps = [
                (
                    DemoStage::Announcement,
                    call.request.for_voice(preset.id, preset.name),
                    self.pauses.after_announcement,
                ),
                (
                    DemoStage::Utterance,
                    call.request.for_voice(preset.id, &call.request.text),
                    if index == last {
                        Duration::ZERO
                    } else {
                        self.pauses.between_voices
                    },
                ),
            ];

            for (stage, request, pause) in steps {
                report.attempts += 1;
                if let Err(e) = self.speak_and_play(call, &request).await {
                    error!("{} {} failed: {}", preset.name, stage, e);
                    report.failures.push(VoiceFailure {
                        voice: preset.name,
                        stage,
                        error: e,
                    });
                }
                if !pause.is_zero() {
                    tokio::time::sleep(pause).await;
                }
            }
        }

        report
    }

    async fn speak_and_play(&self, call: &PreparedCall<'_>, request: &SynthesisRequest) -> Result<()> {
        let audio = self.synthesize(call, request).await?;
        self.player.play(&audio)
    }

    fn demo_providers(&self) -> String {
        self.catalog
            .profiles()
            .filter(|p| p.supports_voice_demo)
            .map(|p| p.display_name)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
