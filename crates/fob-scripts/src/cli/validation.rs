/// A flag this CLI understands, for [`retain_known_args`].
struct KnownFlag {
    long: &'static str,
    short: Option<char>,
    takes_value: bool,
}

const fn flag(long: &'static str, short: Option<char>, takes_value: bool) -> KnownFlag {
    KnownFlag {
        long,
        short,
        takes_value,
    }
}

const GLOBAL_FLAGS: &[KnownFlag] = &[
    flag("verbose", Some('v'), false),
    flag("quiet", Some('q'), false),
    flag("no-color", None, false),
    flag("cwd", None, true),
    flag("help", Some('h'), false),
    flag("version", Some('V'), false),
];

const BUILD_FLAGS: &[KnownFlag] = &[
    flag("config", None, true),
    flag("environment", None, true),
    flag("watch", None, false),
    flag("bundle", None, true),
    flag("p-react", None, false),
    flag("no-clean", None, false),
    flag("no-package-json", None, false),
];

const SUBCOMMANDS: &[&str] = &["build", "validate", "help"];

/// Drop arguments the CLI doesn't recognise.
///
/// Package scripts often pass flags meant for newer releases or for other
/// tools. Instead of failing, unknown flags are removed before clap parses
/// the arguments:
///
/// - `--unknown` and `--unknown=value` are dropped
/// - unknown short flags are dropped
/// - stray positionals are dropped, except the subcommand itself and the
///   first one after `validate`
///
/// Unknown flags never consume the following word, so `--unknown value`
/// leaves `value` to the positional rules: under `build` it is dropped, under
/// `validate` it is the task list.
///
/// Everything after a literal `--` is kept untouched. The first element is
/// the program name and is always kept.
///
/// # Examples
///
/// ```
/// use fob_scripts::cli::retain_known_args;
///
/// let args = retain_known_args(
///     ["fob-scripts", "build", "--bundle", "esm", "--minify-css", "yes", "--watch"]
///         .map(String::from),
/// );
/// assert_eq!(args, ["fob-scripts", "build", "--bundle", "esm", "--watch"]);
/// ```
pub fn retain_known_args<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut raw = raw.into_iter();
    let mut kept: Vec<String> = raw.next().into_iter().collect();
    let mut subcommand: Option<String> = None;
    let mut positional_kept = false;

    while let Some(arg) = raw.next() {
        if arg == "--" {
            kept.push(arg);
            kept.extend(raw.by_ref());
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };

            if let Some(known) = find_flag(subcommand.as_deref(), |f| f.long == name) {
                let needs_value = known.takes_value && !inline_value;
                kept.push(arg);
                if needs_value {
                    kept.extend(raw.next());
                }
            }
            continue;
        }

        if is_flag(&arg) {
            let shorts: Vec<char> = arg.chars().skip(1).collect();
            let all_known = shorts.iter().all(|c| {
                find_flag(subcommand.as_deref(), |f| f.short == Some(*c))
                    .is_some_and(|f| !f.takes_value)
            });
            if all_known {
                kept.push(arg);
            }
            continue;
        }

        match subcommand.as_deref() {
            None => {
                if SUBCOMMANDS.contains(&arg.as_str()) {
                    subcommand = Some(arg.clone());
                }
                kept.push(arg);
            }
            Some("validate") | Some("help") if !positional_kept => {
                positional_kept = true;
                kept.push(arg);
            }
            Some(_) => {}
        }
    }

    kept
}

fn find_flag(
    subcommand: Option<&str>,
    matches: impl Fn(&KnownFlag) -> bool,
) -> Option<&'static KnownFlag> {
    let scoped: &[KnownFlag] = match subcommand {
        Some("build") => BUILD_FLAGS,
        _ => &[],
    };
    GLOBAL_FLAGS.iter().chain(scoped).find(|f| matches(*f))
}

fn is_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// Split a comma-separated list, trimming entries and skipping empty ones.
///
/// # Examples
///
/// ```
/// use fob_scripts::cli::split_list;
///
/// assert_eq!(split_list("build, lint,,flow"), ["build", "lint", "flow"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
