/// Quaver - inspect what the desktop client would show
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use quaver_cli::{render, store::TomlFileStore};
use quaver_core::album::{Album, AlbumShelf};
use quaver_core::system_info::SystemInfo;
use quaver_features::{AudioFeatures, DisplayFeature, Feature, FeatureKind, Key, Mode};
use quaver_settings::{
    is_pulse_available, Bitrate, Palette, ProcessProbe, RefreshInterval, SettingsApplier,
    SettingsForm, SettingsStore,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quaver")]
#[command(about = "Quaver music client utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single audio feature value
    Feature {
        /// Feature name, e.g. energy or time_signature
        kind: String,
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Show a pitch class by ordinal (0 = C)
    Key { ordinal: i64 },
    /// Show a mode by ordinal (0 = minor, 1 = major)
    Mode { ordinal: i64 },
    /// Render an audio-features JSON response, `-` reads stdin
    Features { file: PathBuf },
    /// Group an artist's albums from a JSON array, `-` reads stdin
    Albums { file: PathBuf },
    /// Print system information
    Sysinfo {
        /// Output an HTML table instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show or change client settings
    Settings {
        /// Settings file path
        #[arg(short, long, env = "QUAVER_CONFIG", default_value = "quaver.toml")]
        config: PathBuf,
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,
    /// Validate and apply changes as one batch
    Apply {
        #[arg(long)]
        style: Option<String>,
        #[arg(long, value_enum)]
        palette: Option<PaletteArg>,
        #[arg(long, value_enum)]
        refresh: Option<RefreshArg>,
        #[arg(long)]
        start_client: Option<bool>,
        #[arg(long)]
        pulse_volume: Option<bool>,
        #[arg(long)]
        media_controller: Option<bool>,
        /// Path to spotifyd, empty string clears it
        #[arg(long)]
        client_path: Option<String>,
        #[arg(long)]
        username: Option<String>,
        /// Streaming quality in kbit/s (96, 160 or 320)
        #[arg(long)]
        bitrate: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaletteArg {
    Default,
    Style,
    Dark,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Default => Palette::App,
            PaletteArg::Style => Palette::Style,
            PaletteArg::Dark => Palette::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RefreshArg {
    Fast,
    Medium,
    Slow,
}

impl From<RefreshArg> for RefreshInterval {
    fn from(arg: RefreshArg) -> Self {
        match arg {
            RefreshArg::Fast => RefreshInterval::Fast,
            RefreshArg::Medium => RefreshInterval::Medium,
            RefreshArg::Slow => RefreshInterval::Slow,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "quaver=info,quaver_cli=info,quaver_features=warn,quaver_settings=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Feature { kind, value } => {
            let feature = Feature::new(FeatureKind::from_name(&kind), value);
            println!("{}", render::feature_line(&DisplayFeature::from(feature)));
        }
        Commands::Key { ordinal } => {
            let key = Key::from_ordinal(ordinal)
                .with_context(|| format!("No pitch class for ordinal {}", ordinal))?;
            println!("{}", render::feature_line(&DisplayFeature::from(key)));
        }
        Commands::Mode { ordinal } => {
            let mode = Mode::from_ordinal(ordinal)
                .with_context(|| format!("No mode for ordinal {}", ordinal))?;
            println!("{}", render::feature_line(&DisplayFeature::from(mode)));
        }
        Commands::Features { file } => {
            let features: AudioFeatures = serde_json::from_str(&read_input(&file)?)
                .context("Failed to parse audio features")?;
            print!("{}", render::feature_table(&features.to_display_features()));
        }
        Commands::Albums { file } => {
            let albums: Vec<Album> =
                serde_json::from_str(&read_input(&file)?).context("Failed to parse albums")?;
            print!("{}", render::album_shelf(&AlbumShelf::from_albums(&albums)));
        }
        Commands::Sysinfo { html } => {
            let info = SystemInfo::collect();
            if html {
                println!("{}", info.to_html());
            } else {
                print!("{}", info.to_text());
            }
        }
        Commands::Settings { config, action } => {
            settings(config, action)?;
        }
    }

    Ok(())
}

fn settings(config: PathBuf, action: SettingsAction) -> anyhow::Result<()> {
    let store = TomlFileStore::new(config);

    match action {
        SettingsAction::Show => {
            let settings = store.load()?;
            print!("{}", render::settings(&settings));
        }
        SettingsAction::Apply {
            style,
            palette,
            refresh,
            start_client,
            pulse_volume,
            media_controller,
            client_path,
            username,
            bitrate,
        } => {
            tracing::info!(path = %store.path().display(), "Applying settings");
            let mut applier = SettingsApplier::new(store, ProcessProbe::new())?;
            let mut form = SettingsForm::from_settings(applier.settings(), is_pulse_available());

            if style.is_some() {
                form.style = style;
            }
            if let Some(palette) = palette {
                form.palette = palette.into();
            }
            if let Some(refresh) = refresh {
                form.refresh_interval = refresh.into();
            }
            if let Some(start_client) = start_client {
                form.start_client = start_client;
            }
            if form.pulse_volume.is_some() {
                if let Some(pulse_volume) = pulse_volume {
                    form.pulse_volume = Some(pulse_volume);
                }
            } else if pulse_volume.is_some() {
                tracing::warn!("PulseAudio not available, ignoring --pulse-volume");
            }
            if let Some(media_controller) = media_controller {
                form.media_controller = media_controller;
            }
            if let Some(client_path) = client_path {
                form.client_path = client_path;
            }
            if let Some(username) = username {
                form.username = username;
            }
            if let Some(bitrate) = bitrate {
                form.bitrate = Bitrate::from_kbps(bitrate);
            }

            let outcome = applier.apply(&form)?;
            print!("{}", render::apply_outcome(&outcome));
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
