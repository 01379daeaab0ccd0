use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use siteanno_annotate::Processor;
use siteanno_core::models::RegionSet;
use siteanno_core::utils::remove_all_extensions;
use siteanno_store::PositionStore;

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let in_file = matches
        .get_one::<String>("in_file")
        .expect("An input dataset reference is required.");

    let anno_files: Vec<&String> = matches
        .get_many::<String>("anno-files")
        .expect("At least one annotation file is required.")
        .collect();

    let prefix = matches
        .get_one::<String>("prefix")
        .map(String::as_str)
        .unwrap_or("");

    let distance = matches.get_flag("distance");

    info!("Add annotations ...");

    let store = PositionStore::from_ref(in_file)
        .with_context(|| format!("Invalid input dataset reference: {}", in_file))?;
    let processor = Processor::new(store, distance);

    for anno_file in anno_files {
        let anno_name = format!(
            "{}{}",
            prefix,
            remove_all_extensions(Path::new(anno_file))
        );
        info!("\t{} ...", anno_name);

        let annos = RegionSet::try_from(anno_file.as_str())
            .with_context(|| format!("Failed to load annotation file: {}", anno_file))?;

        processor
            .process(&annos, &anno_name)
            .with_context(|| format!("Failed to annotate dataset with {}", anno_name))?;
    }

    info!("Done!");
    Ok(())
}
