//! On-disk naming conventions for scripts and audio artifacts.
//!
//! Pure functions — no I/O.

/// Script files live under `<data>/<user>/scripts/` as `script_<id>.json`.
const SCRIPT_PREFIX: &str = "script_";
const SCRIPT_SUFFIX: &str = ".json";

/// Recover the script identifier from a script filename.
///
/// Returns `None` for names that don't follow the `script_<id>.json`
/// convention, including an empty identifier.
pub fn script_id_from_filename(filename: &str) -> Option<&str> {
    let id = filename
        .strip_prefix(SCRIPT_PREFIX)?
        .strip_suffix(SCRIPT_SUFFIX)?;
    if id.is_empty() { None } else { Some(id) }
}

/// Filename for a script with the given identifier.
pub fn script_filename(script_id: &str) -> String {
    format!("{SCRIPT_PREFIX}{script_id}{SCRIPT_SUFFIX}")
}

/// Filename for a persisted audio artifact, under `<data>/<user>/audio/`.
pub fn audio_filename(podcast_id: &str) -> String {
    format!("podcast_{podcast_id}.wav")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_filename_round_trips() {
        let name = script_filename("abc123");
        assert_eq!(name, "script_abc123.json");
        assert_eq!(script_id_from_filename(&name), Some("abc123"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(script_id_from_filename("abc123.json"), None);
    }

    #[test]
    fn rejects_missing_suffix() {
        assert_eq!(script_id_from_filename("script_abc123.txt"), None);
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(script_id_from_filename("script_.json"), None);
    }

    #[test]
    fn id_may_contain_underscores() {
        assert_eq!(
            script_id_from_filename("script_ab_cd_12.json"),
            Some("ab_cd_12")
        );
    }

    #[test]
    fn audio_filename_format() {
        assert_eq!(audio_filename("abc123"), "podcast_abc123.wav");
    }
}
