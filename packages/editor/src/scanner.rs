//! # Field Reference Scanner
//!
//! Finds which profile fields a template touches. Runs on every
//! keystroke, so it has to cope with half-typed expressions: anything
//! that is not yet a complete `{{ ... }}` pair is skipped, never an error.
//!
//! The scanner does not parse the template language. Inside each
//! `{{ ... }}` it picks up every `.identifier` token, which means
//! references inside `if`, `range` and `with` bodies are found too.

use std::collections::HashSet;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Ordered, de-duplicated field names referenced by `text`
pub fn scan(text: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rest = text;

    while let Some(open) = rest.find(OPEN) {
        let after_open = &rest[open + OPEN.len()..];
        let Some(close) = after_open.find(CLOSE) else {
            // Dangling expression at the end of the buffer
            break;
        };

        collect_fields(&after_open[..close], &mut seen, &mut fields);
        rest = &after_open[close + CLOSE.len()..];
    }

    fields
}

fn collect_fields<'a>(
    expression: &'a str,
    seen: &mut HashSet<&'a str>,
    fields: &mut Vec<String>,
) {
    let expression = expression.trim_start();
    let mut chars = expression.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '.' {
            continue;
        }

        let start = match chars.peek() {
            Some(&(i, next)) if is_ident_start(next) => i,
            _ => continue,
        };
        let mut end = start;
        while let Some(&(i, next)) = chars.peek() {
            if !is_ident_continue(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let name = &expression[start..end];
        if seen.insert(name) {
            fields.push(name.to_string());
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `name` is a well-formed field identifier
pub fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_text_without_delimiters() {
        assert!(scan("Dear hiring manager, .Name is not a reference").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(scan("{{.Name}} {{.Name}}"), vec!["Name"]);
    }

    #[test]
    fn test_first_seen_order() {
        assert_eq!(scan("{{.B}} {{.A}} {{.B}}"), vec!["B", "A"]);
    }

    #[test]
    fn test_nested_references() {
        let fields = scan("{{ if .Company }}{{ .Company }}{{ end }}");
        assert!(fields.contains(&"Company".to_string()));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_unmatched_trailing_delimiter() {
        assert!(scan("text {{ .Name").is_empty());
        assert_eq!(scan("{{.Name}} {{.Open"), vec!["Name"]);
    }

    #[test]
    fn test_discovers_fields_in_control_flow() {
        let src = "Hello {{ .Name }}\nEmail: {{.Email}} and {{ .Phone }}\n\
                   {{ if .CompanyToApplyTo }}Apply to {{ .CompanyToApplyTo }} as {{ .RoleToApplyTo }}{{ end }}\n\
                   {{ with (index .Experience 0) }}Worked at {{ .Company }}{{ end }}";

        assert_eq!(
            scan(src),
            vec![
                "Name",
                "Email",
                "Phone",
                "CompanyToApplyTo",
                "RoleToApplyTo",
                "Experience",
                "Company"
            ]
        );
    }

    #[test]
    fn test_multiple_references_in_one_expression() {
        assert_eq!(scan("{{ printf \"%s %s\" .First .Last }}"), vec!["First", "Last"]);
    }

    #[test]
    fn test_chained_fields() {
        assert_eq!(scan("{{ .Profile.Name }}"), vec!["Profile", "Name"]);
    }

    #[test]
    fn test_dots_without_identifier() {
        assert!(scan("{{ . }} {{ 1.5 }} {{ .. }} {{ .-x }}").is_empty());
    }

    #[test]
    fn test_identifier_forms() {
        assert_eq!(scan("{{ ._private .a1_b2 .Ünïcode }}"), vec!["_private", "a1_b2", "Ünïcode"]);
    }

    #[test]
    fn test_empty_expression() {
        assert!(scan("{{}}{{   }}").is_empty());
    }

    #[test]
    fn test_resumes_after_close() {
        // The `}}` inside the first expression ends it; `.After` is outside any expression
        assert_eq!(scan("{{ .A }} .After }} {{ .B }}"), vec!["A", "B"]);
    }

    #[test]
    fn test_results_are_valid_identifiers() {
        let src = "{{ .A1 }} {{ .b.c }} {{ $x := .d_e }} {{ .9 }} {{ .}}";
        for name in scan(src) {
            assert!(is_field_name(&name), "invalid field name {:?}", name);
        }
    }

    #[test]
    fn test_scan_is_pure() {
        let src = "{{ .Name }} {{ if .Company }}{{ .Role }}{{ end }}";
        assert_eq!(scan(src), scan(src));
    }

    #[test]
    fn test_many_distinct_fields_keep_order() {
        let src: String = (0..500).map(|i| format!("{{{{ .F{} }}}} {{{{ .F{} }}}}", i, i)).collect();
        let fields = scan(&src);

        assert_eq!(fields.len(), 500);
        assert_eq!(fields[0], "F0");
        assert_eq!(fields[499], "F499");
    }

    #[test]
    fn test_is_field_name() {
        assert!(is_field_name("Name"));
        assert!(is_field_name("_x9"));
        assert!(!is_field_name(""));
        assert!(!is_field_name("9x"));
        assert!(!is_field_name("a-b"));
    }
}
