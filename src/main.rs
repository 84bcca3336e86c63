use std::fs::File;
use std::path::Path;
use std::time::Duration;

use clap::{crate_authors, crate_description, crate_version, Arg, Command};
use failure::{bail, Error};
use log::{error, info};
use simplelog::{
    ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use iso_graph_projector::classification::ClassificationRules;
use iso_graph_projector::graph::{self, json_ld, turtle};
use iso_graph_projector::iso::MetadataExtractor;
use iso_graph_projector::model::DatasetRecord;
use iso_graph_projector::settings::Settings;
use iso_graph_projector::source;

fn main() {
    let matches = Command::new("ISO Graph Projector")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("input")
                .index(1)
                .value_name("INPUT")
                .help("Path or http(s) URL of an ISO 19139 document")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("SETTINGS")
                .help("Specify the settings file")
                .takes_value(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format, overrides the settings")
                .possible_values(["dcat", "schema-org", "text"])
                .takes_value(true),
        )
        .get_matches();

    let settings = match Settings::new(matches.value_of("settings").map(Path::new)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to load settings: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = initialize_logger(&settings) {
        eprintln!("Unable to initialize logger: {}", e);
    }

    let input = matches.value_of("input").unwrap_or_default();
    let format = matches
        .value_of("format")
        .unwrap_or(&settings.output.format);

    if let Err(e) = run(input, format, &settings) {
        error!("Unable to project `{}`: {}", input, e);
        std::process::exit(1);
    }
}

fn run(input: &str, format: &str, settings: &Settings) -> Result<(), Error> {
    let loaded_rules;
    let rules = match &settings.classification.rules_file {
        Some(path) => {
            loaded_rules = ClassificationRules::builtin_with_path(Path::new(path))?;
            info!("Loaded {} classification rule(s)", loaded_rules.len());
            &loaded_rules
        }
        None => ClassificationRules::builtin(),
    };

    let document = source::open(input, Duration::from_secs(settings.fetch.timeout_seconds))?;

    let mut record =
        MetadataExtractor::new(rules).extract(document.source.as_deref(), document.reader)?;

    if record.source.is_none() {
        record.source = local_subject(&record, settings.output.base_uri.as_deref());
    }

    let output = match format {
        "dcat" => turtle::to_string(&graph::project_catalog(&record)),
        "schema-org" => {
            let document = json_ld::to_json(&graph::project_structured_data(&record));
            serde_json::to_string_pretty(&document)?
        }
        "text" => record.to_string(),
        other => bail!("Unknown output format `{}`", other),
    };

    print!("{}", output);

    Ok(())
}

/// The subject of a local document: the base URI followed by the file identifier.
fn local_subject(record: &DatasetRecord, base_uri: Option<&str>) -> Option<String> {
    let base_uri = base_uri?;
    match &record.identifier {
        Some(identifier) => Some(format!("{}{}", base_uri, identifier)),
        None => Some(base_uri.to_string()),
    }
}

/// Initialize the logger.
fn initialize_logger(settings: &Settings) -> Result<(), Error> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    let log_level = if settings.general.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    loggers.push(TermLogger::new(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    if let Some(log_file) = &settings.general.log_file {
        loggers.push(WriteLogger::new(
            log_level,
            simplelog::Config::default(),
            File::create(log_file)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}
