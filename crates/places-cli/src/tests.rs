use super::*;

#[test]
fn parses_collect_with_defaults() {
    let cli = Cli::try_parse_from(["places-cli", "collect"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Collect {
            ref keywords,
            min_rating: None,
            min_reviews: None,
            limit: None,
            output: None,
            dry_run: false,
        } if keywords.is_empty()
    ));
}

#[test]
fn parses_repeated_keywords_and_rating() {
    let cli = Cli::try_parse_from([
        "places-cli",
        "collect",
        "--keyword",
        "bakery",
        "--keyword",
        "pub",
        "--min-rating",
        "4.2",
        "--dry-run",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Collect {
            keywords,
            min_rating,
            dry_run,
            ..
        } => {
            assert_eq!(keywords, vec!["bakery", "pub"]);
            assert!((min_rating.unwrap() - 4.2).abs() < f64::EPSILON);
            assert!(dry_run);
        }
        Commands::Map { .. } => panic!("expected collect"),
    }
}

#[test]
fn rejects_rating_above_scale() {
    let result = Cli::try_parse_from(["places-cli", "collect", "--min-rating", "6"]);
    assert!(result.is_err());
}

#[test]
fn parses_review_floor_and_limit() {
    let cli = Cli::try_parse_from([
        "places-cli",
        "collect",
        "--min-reviews",
        "20",
        "--limit",
        "15",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Collect {
            min_reviews, limit, ..
        } => {
            assert_eq!(min_reviews, Some(20));
            assert_eq!(limit, Some(15));
        }
        Commands::Map { .. } => panic!("expected collect"),
    }
}

#[test]
fn rejects_zero_limit() {
    let result = Cli::try_parse_from(["places-cli", "collect", "--limit", "0"]);
    assert!(result.is_err());
}

#[test]
fn parses_map_flags() {
    let cli = Cli::try_parse_from([
        "places-cli",
        "map",
        "--output",
        "out.html",
        "--zoom",
        "15",
        "--no-open",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Map {
            output,
            zoom,
            no_open,
        } => {
            assert_eq!(output, Some(PathBuf::from("out.html")));
            assert_eq!(zoom, Some(15));
            assert!(no_open);
        }
        Commands::Collect { .. } => panic!("expected map"),
    }
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["places-cli"]).is_err());
}
