use crate::domain::models::Fragment;
use log::debug;

const SEPARATOR_WIDTH: usize = 50;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub fn build_document(fragments: &[Fragment], timestamp: &str) -> String {
    debug!("Building document from {} fragments", fragments.len());
    let mut result = String::new();

    let sources = fragments
        .iter()
        .map(|f| f.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    result.push_str("# Generated gitignore file\n");
    result.push_str(&format!("# Created by concatenating: {}\n", sources));
    result.push_str(&format!("# Generated on: {}\n\n", timestamp));

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&separator());
            result.push('\n');
        }

        debug!("Adding fragment from {}", fragment.path.display());
        result.push_str(&format!("# From: {}\n", fragment.path.display()));
        result.push_str(&separator());
        result.push('\n');

        // Strip trailing whitespace so every fragment ends with exactly one newline
        result.push_str(fragment.content.trim_end());
        result.push('\n');

        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fragment(path: &str, content: &str) -> Fragment {
        Fragment {
            path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_header_lists_sources_in_order() {
        let fragments = vec![
            fragment("a.gitignore", "*.log"),
            fragment("b.gitignore", "node_modules/"),
        ];

        let document = build_document(&fragments, "2026-08-29 12:00:00");

        assert!(document.starts_with(
            "# Generated gitignore file\n\
             # Created by concatenating: a.gitignore, b.gitignore\n\
             # Generated on: 2026-08-29 12:00:00\n\n"
        ));
    }

    #[test]
    fn test_two_fragment_layout() {
        let fragments = vec![
            fragment("a.gitignore", "*.log\n\n\n"),
            fragment("b.gitignore", "node_modules/"),
        ];

        let document = build_document(&fragments, "2026-08-29 12:00:00");
        let banner = "=".repeat(50);

        let expected_body = format!(
            "# From: a.gitignore\n{banner}\n*.log\n\n\n{banner}\n# From: b.gitignore\n{banner}\nnode_modules/\n\n"
        );
        let body = document
            .split_once("\n\n")
            .map(|(_, rest)| rest)
            .unwrap_or("");

        assert_eq!(body, expected_body);
    }

    #[test]
    fn test_trailing_whitespace_normalized() {
        for content in ["*.log", "*.log\n", "*.log\n\n\n", "*.log   \n  \n"] {
            let document = build_document(&[fragment("a.gitignore", content)], "ts");
            assert!(document.ends_with("*.log\n\n"), "content {:?}", content);
        }
    }

    #[test]
    fn test_empty_fragment_ends_with_single_newline() {
        let document = build_document(&[fragment("empty.gitignore", "")], "ts");
        let banner = "=".repeat(50);

        assert!(document.ends_with(&format!("{banner}\n\n\n")));
    }

    #[test]
    fn test_fragments_appear_in_input_order() {
        let fragments = vec![
            fragment("z.gitignore", "z"),
            fragment("a.gitignore", "a"),
            fragment("m.gitignore", "m"),
        ];

        let document = build_document(&fragments, "ts");

        let z = document.find("# From: z.gitignore").unwrap();
        let a = document.find("# From: a.gitignore").unwrap();
        let m = document.find("# From: m.gitignore").unwrap();
        assert!(z < a && a < m);
    }
}
