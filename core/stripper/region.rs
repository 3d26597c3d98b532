use super::common::{StripError, line_of};
use crate::config::Markers;

/// Removes every `ignore_start ... ignore_end` span, markers included.
/// Regions do not nest: a start marker inside a region is discarded with it.
pub fn strip_regions(text: &str, markers: &Markers) -> Result<String, StripError> {
    let start = markers.ignore_start;
    let end = markers.ignore_end;

    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    loop {
        let tail = &text[pos..];
        let next_start = tail.find(start);

        if let Some(e) = tail.find(end) {
            if next_start.is_none_or(|s| e < s) {
                return Err(StripError::UnmatchedEndMarker {
                    marker: end,
                    line: line_of(text, pos + e),
                });
            }
        }

        let Some(s) = next_start else {
            result.push_str(tail);
            return Ok(result);
        };

        result.push_str(&tail[..s]);
        let opened_at = pos + s;
        pos = opened_at + start.len();

        match text[pos..].find(end) {
            Some(e) => pos += e + end.len(),
            None => {
                return Err(StripError::UnmatchedStartMarker {
                    marker: start,
                    line: line_of(text, opened_at),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> Result<String, StripError> {
        strip_regions(text, &Markers::default())
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        let text = "#pragma once\r\n\nclass Foo {\n  void Bar();\n};\n";
        assert_eq!(strip(text).unwrap(), text);
        assert_eq!(strip("").unwrap(), "");
    }

    #[test]
    fn region_is_removed_with_its_markers() {
        let a = "class Foo {\n";
        let b = "\n  void Hidden();\n  ";
        let c = "\n  void Visible();\n};\n";
        let text = format!("{a}CSP_START_IGNORE{b}CSP_END_IGNORE{c}");
        assert_eq!(strip(&text).unwrap(), format!("{a}{c}"));
    }

    #[test]
    fn multiple_regions_are_removed() {
        let text = "a CSP_START_IGNORE x CSP_END_IGNORE b CSP_START_IGNORE y CSP_END_IGNORE c";
        assert_eq!(strip(text).unwrap(), "a  b  c");
    }

    #[test]
    fn start_marker_inside_region_does_not_nest() {
        let text = "a CSP_START_IGNORE x CSP_START_IGNORE y CSP_END_IGNORE b";
        assert_eq!(strip(text).unwrap(), "a  b");
    }

    #[test]
    fn region_at_end_of_buffer() {
        assert_eq!(strip("keep\nCSP_START_IGNORE\ngone\nCSP_END_IGNORE").unwrap(), "keep\n");
    }

    #[test]
    fn lone_end_marker_fails() {
        assert_eq!(
            strip("CSP_END_IGNORE"),
            Err(StripError::UnmatchedEndMarker {
                marker: "CSP_END_IGNORE",
                line: 1
            })
        );
    }

    #[test]
    fn end_marker_before_start_marker_fails() {
        let text = "one\ntwo CSP_END_IGNORE\nCSP_START_IGNORE\nCSP_END_IGNORE\n";
        assert_eq!(
            strip(text),
            Err(StripError::UnmatchedEndMarker {
                marker: "CSP_END_IGNORE",
                line: 2
            })
        );
    }

    #[test]
    fn second_close_after_region_fails() {
        let text = "CSP_START_IGNORE x CSP_END_IGNORE\nCSP_END_IGNORE";
        assert!(matches!(
            strip(text),
            Err(StripError::UnmatchedEndMarker { line: 2, .. })
        ));
    }

    #[test]
    fn lone_start_marker_fails() {
        assert_eq!(
            strip("a\n\nCSP_START_IGNORE\nb"),
            Err(StripError::UnmatchedStartMarker {
                marker: "CSP_START_IGNORE",
                line: 3
            })
        );
    }
}
