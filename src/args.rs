use std::ffi::OsString;

/// Long flags that take a separate value argument
const VALUE_FLAGS: &[&str] = &["--file"];

/// Rewrites single-dash long flags (`-log`, `-file=x`) to their double-dash
/// form so clap can parse them. Single-letter flags such as `-h` are left
/// alone, and nothing after a bare `--` is touched. The argument following a
/// bare `-file` is its value and is passed through as is, even when it
/// starts with `-`.
///
/// The first item is the program name and is passed through unchanged.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut rewriting = true;
    let mut value_pending = false;

    for (index, arg) in args.into_iter().enumerate() {
        if index == 0 || !rewriting {
            normalized.push(arg);
            continue;
        }

        if value_pending {
            value_pending = false;
            normalized.push(arg);
            continue;
        }

        if arg == "--" {
            rewriting = false;
            normalized.push(arg);
            continue;
        }

        let arg = rewrite_flag(arg);
        value_pending = arg.to_str().is_some_and(|flag| VALUE_FLAGS.contains(&flag));
        normalized.push(arg);
    }

    normalized
}

fn rewrite_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };

    let is_single_dash_long = text.starts_with('-')
        && !text.starts_with("--")
        && text.chars().nth(1).is_some_and(char::is_alphabetic)
        && text.split('=').next().is_some_and(|name| name.len() > 2);

    if is_single_dash_long {
        OsString::from(format!("-{}", text))
    } else {
        arg
    }
}
