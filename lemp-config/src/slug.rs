use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Derive a filesystem/hostname-safe slug from a project directory name.
///
/// Lowercases, collapses any run of other characters into a single dash
/// and trims leading/trailing dashes.
pub fn slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn lowercases_and_dashes() {
        assert_eq!(slug("My Project"), "my-project");
        assert_eq!(slug("starcorp"), "starcorp");
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(slug("app -- v2!"), "app-v2");
        assert_eq!(slug("...dotted.name..."), "dotted-name");
    }

    #[test]
    fn underscores_become_dashes() {
        assert_eq!(slug("my_app"), "my-app");
    }
}
