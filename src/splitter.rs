// A comma splits only when an even number of double quotes follow it on
// the line. On balanced lines that is the same as "outside quotes".
pub fn split_line(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut quotes_after = line.matches('"').count();
    let mut fields = Vec::new();
    let mut start = 0;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quotes_after -= 1,
            ',' if quotes_after % 2 == 0 => {
                fields.push(clean(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean(&line[start..]));
    fields
}

fn clean(field: &str) -> String {
    add_slashes(field.trim_matches(|c| c == ' ' || c == '"'))
}

pub fn add_slashes(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\'' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\0' => escaped.push_str("\\0"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_is_not_a_split_point() {
        assert_eq!(split_line(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
    }

    #[test]
    fn quotes_after_a_space_still_protect_commas() {
        assert_eq!(split_line(r#"A, "B,C",D"#), vec!["A", "B,C", "D"]);
    }

    #[test]
    fn quotes_inside_a_field_protect_commas() {
        assert_eq!(split_line(r#"A,x"B,C"y,D"#), vec!["A", r#"x\"B,C\"y"#, "D"]);
    }

    #[test]
    fn carriage_return_stays_in_field() {
        assert_eq!(split_line("A,B\rC,D"), vec!["A", "B\rC", "D"]);
    }

    #[test]
    fn unbalanced_quote_only_counts_what_follows() {
        // one quote follows the first comma, none follow the second
        assert_eq!(split_line(r#"A,B"C,D"#), vec![r#"A,B\"C"#, "D"]);
    }

    #[test]
    fn fields_are_trimmed_of_spaces_and_quotes() {
        assert_eq!(split_line(r#" A , "B" ,"C D""#), vec!["A", "B", "C D"]);
    }

    #[test]
    fn fields_are_escaped() {
        assert_eq!(
            split_line(r"O'Neill,back\slash"),
            vec![r"O\'Neill", r"back\\slash"]
        );
    }

    #[test]
    fn empty_fields_are_kept() {
        assert_eq!(split_line("A,,C,"), vec!["A", "", "C", ""]);
    }

    #[test]
    fn blank_line_has_no_fields() {
        assert!(split_line("").is_empty());
        assert!(split_line("   ").is_empty());
    }

    #[test]
    fn add_slashes_escapes_significant_characters() {
        assert_eq!(add_slashes(r#"a'b"c\d"#), r#"a\'b\"c\\d"#);
        assert_eq!(add_slashes("nul\0"), "nul\\0");
        assert_eq!(add_slashes("plain"), "plain");
    }
}
