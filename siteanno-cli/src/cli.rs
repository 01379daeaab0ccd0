use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Annotate a genomic position dataset with BED interval overlap or distance features.")
        .arg(
            arg!(<in_file> "Input dataset reference of the form path:dataset_group (e.g. data/store:train)"),
        )
        .arg(
            Arg::new("anno-files")
                .short('a')
                .long("anno-files")
                .value_name("FILE")
                .num_args(1..)
                .required(true)
                .help("Annotation files in BED format (plain or gzipped)"),
        )
        .arg(
            arg!(--prefix <STR>)
                .required(false)
                .default_value("")
                .help("Prefix annotation names"),
        )
        .arg(
            arg!(--distance "Compute distance to annotations instead of membership")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--verbose "More detailed log messages").action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .required(false)
                .help("Write log messages to file instead of stderr"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_minimal_invocation() {
        let matches = build_parser()
            .try_get_matches_from(["siteanno", "data/store:train", "-a", "cgi.bed"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("in_file").unwrap(),
            "data/store:train"
        );
        assert!(!matches.get_flag("distance"));
        assert_eq!(matches.get_one::<String>("prefix").unwrap(), "");
    }

    #[rstest]
    fn test_parse_multiple_anno_files() {
        let matches = build_parser()
            .try_get_matches_from([
                "siteanno",
                "data/store:train",
                "-a",
                "cgi.bed",
                "lmr.bed.gz",
                "--distance",
                "--prefix",
                "anno_",
            ])
            .unwrap();
        let files: Vec<&String> = matches.get_many::<String>("anno-files").unwrap().collect();
        assert_eq!(files, vec!["cgi.bed", "lmr.bed.gz"]);
        assert!(matches.get_flag("distance"));
        assert_eq!(matches.get_one::<String>("prefix").unwrap(), "anno_");
    }

    #[rstest]
    fn test_anno_files_required() {
        let result = build_parser().try_get_matches_from(["siteanno", "data/store:train"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_in_file_required() {
        let result = build_parser().try_get_matches_from(["siteanno", "-a", "cgi.bed"]);
        assert!(result.is_err());
    }
}
