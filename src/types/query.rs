use serde::Deserialize;

/// `?mine=1` on the list endpoints. Any non-empty value other than `0`/`false` counts.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub mine: Option<String>,
}

impl ListQuery {
    pub fn mine(&self) -> bool {
        flag(self.mine.as_deref())
    }
}

/// Query-string switch: absent, empty, `0` and `false` are off.
pub fn flag(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

/// Trims and turns blank strings into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(v: Option<&str>) -> ListQuery {
        ListQuery { mine: v.map(str::to_string) }
    }

    #[test]
    fn mine_flag_values() {
        assert!(q(Some("1")).mine());
        assert!(q(Some("true")).mine());
        assert!(q(Some("yes")).mine());
        assert!(!q(None).mine());
        assert!(!q(Some("")).mine());
        assert!(!q(Some("0")).mine());
        assert!(!q(Some("FALSE")).mine());
    }

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" tripod ".into())), Some("tripod".into()));
        assert_eq!(non_blank(None), None);
    }
}
