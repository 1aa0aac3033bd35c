#[cfg(test)]
mod tests {
    use crate::cli::{retain_known_args, split_list, Cli, Command};
    use crate::format::DEFAULT_FORMATS;
    use clap::Parser;
    use std::path::PathBuf;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn parse(raw: &[&str]) -> Cli {
        Cli::try_parse_from(retain_known_args(args(raw))).unwrap()
    }

    #[test]
    fn test_build_args_defaults() {
        let cli = parse(&["fob-scripts", "build"]);

        if let Command::Build(build) = cli.command {
            assert_eq!(build.bundle, DEFAULT_FORMATS);
            assert_eq!(build.config, None);
            assert_eq!(build.environment, None);
            assert!(!build.watch);
            assert!(!build.p_react);
            assert!(!build.no_clean);
            assert!(!build.no_package_json);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_args_default_matches_clap_defaults() {
        let cli = parse(&["fob-scripts", "build"]);
        let Command::Build(build) = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build, crate::cli::BuildArgs::default());
    }

    #[test]
    fn test_build_args_all_flags() {
        let cli = parse(&[
            "fob-scripts",
            "build",
            "--config",
            "rollup.custom.js",
            "--environment",
            "INCLUDE_DEPS,BUILD:production",
            "--watch",
            "--bundle",
            "esm,umd.min",
            "--p-react",
            "--no-clean",
            "--no-package-json",
        ]);

        let Command::Build(build) = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build.config, Some(PathBuf::from("rollup.custom.js")));
        assert_eq!(
            build.environment.as_deref(),
            Some("INCLUDE_DEPS,BUILD:production")
        );
        assert!(build.watch);
        assert_eq!(build.bundle, ["esm", "umd.min"]);
        assert!(build.p_react);
        assert!(build.no_clean);
        assert!(build.no_package_json);
    }

    #[test]
    fn test_build_ignores_unknown_flags() {
        let cli = parse(&[
            "fob-scripts",
            "build",
            "--experimental-thing",
            "--size-limit",
            "10kb",
            "--target=es5",
            "-x",
            "stray",
            "--bundle=cjs",
        ]);

        let Command::Build(build) = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build.bundle, ["cjs"]);
    }

    #[test]
    fn test_validate_scripts_positional() {
        let cli = parse(&["fob-scripts", "validate", "build,lint"]);

        let Command::Validate(validate) = cli.command else {
            panic!("Expected Validate command");
        };
        assert_eq!(validate.scripts.as_deref(), Some("build,lint"));
    }

    #[test]
    fn test_validate_without_scripts() {
        let cli = parse(&["fob-scripts", "validate"]);

        let Command::Validate(validate) = cli.command else {
            panic!("Expected Validate command");
        };
        assert_eq!(validate.scripts, None);
    }

    #[test]
    fn test_validate_drops_build_only_flags() {
        let kept = retain_known_args(args(&["fob-scripts", "validate", "--watch", "build"]));
        assert_eq!(kept, ["fob-scripts", "validate", "build"]);
    }

    #[test]
    fn test_global_flags_survive_filtering() {
        let cli = parse(&[
            "fob-scripts",
            "-v",
            "--no-color",
            "--cwd",
            "/tmp/project",
            "build",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let result = Cli::try_parse_from(retain_known_args(args(&[
            "fob-scripts",
            "--verbose",
            "--quiet",
            "build",
        ])));
        assert!(result.is_err());
    }

    #[test]
    fn test_retain_keeps_everything_after_double_dash() {
        let kept = retain_known_args(args(&["fob-scripts", "build", "--", "--whatever"]));
        assert_eq!(kept, ["fob-scripts", "build", "--", "--whatever"]);
    }

    #[test]
    fn test_retain_unknown_flag_followed_by_known_flag() {
        let kept = retain_known_args(args(&["fob-scripts", "build", "--silent", "--watch"]));
        assert_eq!(kept, ["fob-scripts", "build", "--watch"]);
    }

    #[test]
    fn test_unknown_flag_before_validate_scripts() {
        let cli = parse(&["fob-scripts", "validate", "--silent", "build,lint"]);

        let Command::Validate(validate) = cli.command else {
            panic!("Expected Validate command");
        };
        assert_eq!(validate.scripts.as_deref(), Some("build,lint"));
    }

    #[test]
    fn test_unknown_flag_before_subcommand() {
        let cli = parse(&["fob-scripts", "--silent", "build", "--bundle", "esm"]);

        let Command::Build(build) = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build.bundle, ["esm"]);
    }

    #[test]
    fn test_unknown_flag_value_dropped_under_build() {
        let kept = retain_known_args(args(&[
            "fob-scripts",
            "build",
            "--size-limit",
            "10kb",
            "--watch",
        ]));
        assert_eq!(kept, ["fob-scripts", "build", "--watch"]);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("esm,cjs"), ["esm", "cjs"]);
        assert_eq!(split_list(" build , lint "), ["build", "lint"]);
        assert_eq!(split_list("build,,"), ["build"]);
        assert!(split_list(",").is_empty());
    }
}
