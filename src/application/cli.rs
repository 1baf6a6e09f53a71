#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::application::reports;
use crate::application::ui::help_text;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::parse_backend_name;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;
use crate::domain::models::CropQuery;
use crate::domain::models::FertilizerQuery;
use crate::domain::models::Language;
use crate::domain::models::SpeechName;
use crate::domain::models::SubsidyQuery;
use crate::domain::models::Symptom;
use crate::domain::models::SymptomQuiz;
use crate::domain::services::features::FeaturesService;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn backend() -> Result<BackendBox> {
    let name = parse_backend_name(&Config::get(ConfigKey::Backend))?;
    return Ok(BackendManager::get(name));
}

fn language() -> Language {
    return Language::parse_or_default(&Config::get(ConfigKey::Language));
}

fn string_arg(matches: &ArgMatches, id: &str) -> String {
    return matches
        .get_one::<String>(id)
        .map(|e| return e.to_string())
        .unwrap_or_default();
}

/// Walks the three question quiz on the terminal.
fn run_symptom_quiz() -> Result<Vec<Symptom>> {
    let mut quiz = SymptomQuiz::default();

    while let Some(question) = quiz.current() {
        let labels = question
            .options
            .iter()
            .map(|option| return option.label)
            .collect::<Vec<&str>>();

        let idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Question {}/{}: {}",
                quiz.position(),
                quiz.total(),
                question.prompt
            ))
            .default(0)
            .items(&labels)
            .interact_opt()?;

        match idx {
            Some(idx) => quiz.answer(idx)?,
            None => bail!("Symptom quiz cancelled"),
        }
    }

    return Ok(quiz.answers().to_vec());
}

async fn run_disease(matches: &ArgMatches) -> Result<String> {
    let backend = backend()?;

    match matches.subcommand() {
        Some(("image", image_matches)) => {
            let file = string_arg(image_matches, "file");
            let report = FeaturesService::detect_image(&backend, path::Path::new(&file)).await?;
            return Ok(reports::disease(&report));
        }
        Some(("symptoms", symptom_matches)) => {
            let mut symptoms = symptom_matches
                .get_many::<String>("symptom")
                .into_iter()
                .flatten()
                .filter_map(|e| return Symptom::parse(e))
                .collect::<Vec<Symptom>>();

            if symptoms.is_empty() {
                symptoms = run_symptom_quiz()?;
            }

            let report = FeaturesService::detect_symptoms(&backend, &symptoms).await?;
            return Ok(reports::disease(&report));
        }
        _ => {
            subcommand_disease().print_long_help()?;
            return Ok("".to_string());
        }
    }
}

async fn run_crop(matches: &ArgMatches) -> Result<String> {
    let defaults = CropQuery::default();
    let query = CropQuery {
        soil_type: matches
            .get_one::<String>("soil-type")
            .cloned()
            .unwrap_or(defaults.soil_type),
        climate: matches
            .get_one::<String>("climate")
            .cloned()
            .unwrap_or(defaults.climate),
        water_availability: matches
            .get_one::<String>("water")
            .cloned()
            .unwrap_or(defaults.water_availability),
        season: matches
            .get_one::<String>("season")
            .cloned()
            .unwrap_or(defaults.season),
    };

    let rec = FeaturesService::recommend_crop(&backend()?, &query).await?;
    return Ok(reports::crop(&rec));
}

async fn run_fertilizer(matches: &ArgMatches) -> Result<String> {
    let query = FertilizerQuery {
        crop: string_arg(matches, "crop"),
        soil_type: string_arg(matches, "soil-type"),
        growth_stage: string_arg(matches, "growth-stage"),
    };

    let rec = FeaturesService::recommend_fertilizer(&backend()?, &query).await?;
    return Ok(reports::fertilizer(&rec));
}

async fn run_subsidy(matches: &ArgMatches) -> Result<String> {
    let land_size = match matches.get_one::<f64>("land-size") {
        Some(land_size) => *land_size,
        None => bail!("Please fill all details"),
    };
    let query = SubsidyQuery {
        crop: string_arg(matches, "crop"),
        category: string_arg(matches, "category"),
        land_size,
    };

    let res = FeaturesService::find_subsidies(&backend()?, &query).await?;
    return Ok(reports::subsidies(&res));
}

async fn run_weather(matches: &ArgMatches) -> Result<String> {
    let city = string_arg(matches, "city");
    let overview = FeaturesService::weather(&backend()?, &city, language()).await?;
    return Ok(reports::weather(&overview));
}

/// Prints a one-shot feature result. Failures are shown inline and end the
/// process with a non-zero status instead of the crash report.
fn print_feature(res: Result<String>) {
    match res {
        Ok(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Err(err) => {
            tracing::error!(error = ?err, "Feature request failed");
            eprintln!("{}", Paint::red(format!("Error: {err}")));
            std::process::exit(1);
        }
    }
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_disease() -> Command {
    return Command::new("disease")
        .about("Detect crop diseases from a leaf photo or a symptom quiz.")
        .subcommand(
            Command::new("image")
                .about("Analyze a leaf photo (png, jpg, jpeg, gif, webp, bmp up to 5MB).")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .help("Path to the leaf photo.")
                        .num_args(1)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("symptoms")
                .about("Analyze observed symptoms. Omit --symptom to take the interactive quiz.")
                .arg(
                    Arg::new("symptom")
                        .short('s')
                        .long("symptom")
                        .help("Observed symptom. Can be repeated.")
                        .action(ArgAction::Append)
                        .value_parser(PossibleValuesParser::new(Symptom::VARIANTS)),
                ),
        );
}

fn subcommand_crop() -> Command {
    let defaults = CropQuery::default();

    return Command::new("crop")
        .about("Recommend crops for your soil, climate and season.")
        .arg(
            Arg::new("soil-type")
                .long("soil-type")
                .num_args(1)
                .help(format!("Soil type, such as clay, loamy or sandy. [default: {}]", defaults.soil_type)),
        )
        .arg(
            Arg::new("climate")
                .long("climate")
                .num_args(1)
                .help(format!("Climate, such as tropical, subtropical or arid. [default: {}]", defaults.climate)),
        )
        .arg(
            Arg::new("water")
                .long("water")
                .num_args(1)
                .help(format!("Water availability: low, medium or high. [default: {}]", defaults.water_availability)),
        )
        .arg(
            Arg::new("season")
                .long("season")
                .num_args(1)
                .help(format!("Growing season: kharif, rabi or zaid. [default: {}]", defaults.season)),
        );
}

fn subcommand_fertilizer() -> Command {
    return Command::new("fertilizer")
        .about("Recommend a fertilizer plan for a crop.")
        .arg(
            Arg::new("crop")
                .long("crop")
                .num_args(1)
                .help("Crop being grown."),
        )
        .arg(
            Arg::new("soil-type")
                .long("soil-type")
                .num_args(1)
                .help("Soil type of the field."),
        )
        .arg(
            Arg::new("growth-stage")
                .long("growth-stage")
                .num_args(1)
                .help("Current growth stage, such as initial, vegetative or flowering."),
        );
}

fn subcommand_subsidy() -> Command {
    return Command::new("subsidy")
        .about("Find government schemes you are eligible for.")
        .arg(
            Arg::new("crop")
                .long("crop")
                .num_args(1)
                .help("Crop being grown."),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .num_args(1)
                .help("Farmer category, such as small, marginal or large."),
        )
        .arg(
            Arg::new("land-size")
                .long("land-size")
                .num_args(1)
                .value_parser(value_parser!(f64))
                .help("Land size in acres."),
        );
}

fn subcommand_weather() -> Command {
    return Command::new("weather")
        .about("Current weather, forecast and farming advice for a city.")
        .arg(
            Arg::new("city")
                .short('C')
                .long("city")
                .num_args(1)
                .help("City to look up."),
        );
}

fn arg_backend() -> Arg {
    return Arg::new(ConfigKey::Backend.to_string())
        .short('b')
        .long(ConfigKey::Backend.to_string())
        .env("SOILSYNC_BACKEND")
        .num_args(1)
        .help(format!(
            "The backend answering requests. The offline backend always uses the local fallbacks. [default: {}]",
            Config::default(ConfigKey::Backend)
        ))
        .value_parser(PossibleValuesParser::new(BackendName::VARIANTS))
        .global(true);
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("SUGGESTIONS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("soilsync")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Start a new chat session. This is the default."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_crop())
        .subcommand(subcommand_disease())
        .subcommand(subcommand_fertilizer())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_subsidy())
        .subcommand(subcommand_weather())
        .arg(arg_backend())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SOILSYNC_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("SOILSYNC_API_URL")
                .num_args(1)
                .help(format!("SoilSync API URL. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ChatEndpoint.to_string())
                .long(ConfigKey::ChatEndpoint.to_string())
                .env("SOILSYNC_CHAT_ENDPOINT")
                .num_args(1)
                .help(format!("Path of the chat route on the SoilSync API. [default: {}]", Config::default(ConfigKey::ChatEndpoint)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
                .long(ConfigKey::BackendHealthCheckTimeout.to_string())
                .env("SOILSYNC_BACKEND_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when doing a healthcheck for a backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .short('l')
                .long(ConfigKey::Language.to_string())
                .env("SOILSYNC_LANGUAGE")
                .num_args(1)
                .help(format!("Language for replies, speech and farming advice. [default: {}]", Config::default(ConfigKey::Language)))
                .value_parser(PossibleValuesParser::new(Language::codes()))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Speech.to_string())
                .long(ConfigKey::Speech.to_string())
                .env("SOILSYNC_SPEECH")
                .num_args(1)
                .help(format!("Speech engine used to read replies aloud and capture voice questions. [default: {}]", Config::default(ConfigKey::Speech)))
                .value_parser(PossibleValuesParser::new(SpeechName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SpeechCommand.to_string())
                .long(ConfigKey::SpeechCommand.to_string())
                .env("SOILSYNC_SPEECH_COMMAND")
                .num_args(1)
                .help(format!("Command that reads text from stdin and speaks it. {{lang}} is replaced with the voice name. [default: {}]", Config::default(ConfigKey::SpeechCommand)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ListenCommand.to_string())
                .long(ConfigKey::ListenCommand.to_string())
                .env("SOILSYNC_LISTEN_COMMAND")
                .num_args(1)
                .help("Command that records one utterance and prints the transcript to stdout. {lang} is replaced with the voice name.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::AutoSubmitVoice.to_string())
                .long(ConfigKey::AutoSubmitVoice.to_string())
                .env("SOILSYNC_AUTO_SUBMIT_VOICE")
                .num_args(1)
                .help(format!("Send voice transcripts right away instead of waiting for Enter. [default: {}]", Config::default(ConfigKey::AutoSubmitVoice)))
                .value_parser(PossibleValuesParser::new(["true", "false"]))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("SOILSYNC_USERNAME")
                .num_args(1)
                .help("Your name shown next to your messages.")
                .global(true),
        );
}

/// Parses arguments and runs one-shot commands. Returns true when the
/// interactive chat should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some((name, subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let res = match name {
                "crop" => run_crop(subcmd_matches).await,
                "disease" => run_disease(subcmd_matches).await,
                "fertilizer" => run_fertilizer(subcmd_matches).await,
                "subsidy" => run_subsidy(subcmd_matches).await,
                "weather" => run_weather(subcmd_matches).await,
                _ => bail!("Unknown command {name}"),
            };
            print_feature(res);
            return Ok(false);
        }
        None => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
