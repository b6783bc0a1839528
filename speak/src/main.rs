// speak - Text-to-speech from the command line

mod config;
mod help;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, FromArgMatches, Parser};
use log::{Level, info, warn};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use tts_client::validate::DEFAULT_SPEED;
use tts_client::{
    Delivery, Dispatcher, HttpSynthesizer, Invocation, Outcome, OutputPlan, Provider,
    ProviderCatalog, RodioPlayer, TtsError, VoiceTuning, process_env,
};

use config::SpeakConfig;

#[derive(Parser, Debug)]
#[command(name = "speak")]
#[command(about = "Convert text to speech using OpenAI, ElevenLabs, or Deepgram")]
#[command(version)]
struct Args {
    /// TTS provider: openai, elevenlabs, deepgram
    #[arg(short, long)]
    provider: Option<String>,

    /// Voice preset name or provider voice ID
    #[arg(short, long)]
    voice: Option<String>,

    /// Model to use (provider-specific)
    #[arg(short, long)]
    model: Option<String>,

    /// Save audio to this MP3 file instead of playing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Playback speed
    #[arg(short = 'x', long, default_value_t = DEFAULT_SPEED, allow_negative_numbers = true)]
    speed: f64,

    /// Play the audio even when saving with --output
    #[arg(short, long, default_value_t = false)]
    speak: bool,

    /// API key (overrides the provider's environment variable)
    #[arg(long, value_name = "KEY")]
    token: Option<String>,

    /// Speak the text with every voice (OpenAI only)
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Voice stability, 0.0 to 1.0 (ElevenLabs only)
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    stability: f64,

    /// Voice similarity boost, 0.0 to 1.0 (ElevenLabs only)
    #[arg(long, default_value_t = 0.75, allow_negative_numbers = true)]
    similarity: f64,

    /// List the selected provider's voice presets and exit
    #[arg(long, default_value_t = false)]
    list_voices: bool,

    /// Enable debug mode for verbose output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Text to speak (read from stdin when omitted)
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

fn init_logging(debug: bool) {
    let level = if debug {
        "debug"
    } else {
        "warn,speak=info,tts_client=info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "Error: {}", record.args()),
            Level::Warn => writeln!(buf, "Warning: {}", record.args()),
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}: {}", level, record.target(), record.args()),
        })
        .init();
}

/// Join the positional words, or fall back to piped stdin
fn read_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" ").trim().to_string());
    }

    if io::stdin().is_terminal() {
        return Ok(String::new());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer.trim().to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let catalog = ProviderCatalog::builtin();
    let matches = Args::command()
        .after_help(help::provider_details(&catalog))
        .get_matches();
    let args = Args::from_arg_matches(&matches)?;

    init_logging(args.debug);

    let config = SpeakConfig::load()?;
    let provider = args
        .provider
        .clone()
        .or_else(|| config.provider.clone())
        .unwrap_or_else(|| Provider::default().to_string());

    if args.list_voices {
        let profile = catalog.lookup(&provider)?;
        print!("{}", help::voice_list(profile));
        return Ok(());
    }

    let text = read_text(&args.text)?;

    // Unknown provider names get no config defaults; the dispatcher reports them
    let defaults = provider
        .parse::<Provider>()
        .map(|p| config.defaults_for(p).clone())
        .unwrap_or_default();

    let invocation = Invocation {
        provider,
        voice: args.voice.or(defaults.voice),
        model: args.model.or(defaults.model),
        text,
        speed: args.speed,
        token: args.token,
        all_voices: args.all,
        tuning: VoiceTuning {
            stability: args.stability,
            similarity_boost: args.similarity,
        },
        output: OutputPlan {
            path: args.output,
            speak: args.speak,
        },
    };

    let synthesizer = HttpSynthesizer::new()?;
    let player = RodioPlayer::new();
    let dispatcher = Dispatcher::new(&catalog, &synthesizer, &player);

    let call = match dispatcher.prepare(&invocation, &process_env) {
        Err(TtsError::MissingText) => bail!("No text provided. Run 'speak --help' for usage"),
        result => result?,
    };

    // Always shown, whatever the log filter
    for warning in &call.warnings {
        eprintln!("{}", warning_notice(warning));
    }

    match dispatcher.execute(&call, &invocation.output).await? {
        Outcome::Single(delivery) => {
            if let Some(notice) = saved_notice(&delivery) {
                eprintln!("{}", notice);
            }
        }
        Outcome::AllVoices(report) => {
            if report.failures.is_empty() {
                info!("Spoke with {} voices", report.voices);
            } else {
                warn!(
                    "{} of {} attempts failed across {} voices",
                    report.failures.len(),
                    report.attempts,
                    report.voices
                );
            }
        }
    }

    Ok(())
}

fn warning_notice(warning: &str) -> String {
    format!("Warning: {}", warning)
}

fn saved_notice(delivery: &Delivery) -> Option<String> {
    delivery
        .saved_to
        .as_ref()
        .map(|path| format!("Saved to {}", path.display()))
}
