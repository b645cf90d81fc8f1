use crate::model::Commit;

/// Parse raw `git log --pretty=format:%h|%an|%s` output into commit records.
///
/// Each line is split into at most three fields on `|`, so subjects that
/// contain the delimiter are preserved verbatim. Lines that do not yield a
/// non-empty id, a non-empty author, and a subject are dropped.
pub fn parse_log(input: &str) -> Vec<Commit> {
    input.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Commit> {
    let mut fields = line.splitn(3, '|');
    let id = fields.next()?;
    let author = fields.next()?;
    let subject = fields.next()?;

    if id.is_empty() || author.is_empty() {
        return None;
    }

    Some(Commit {
        id: id.to_string(),
        author: author.to_string(),
        subject: subject.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_three_field_lines() {
        let commits = parse_log("a1b2c3d|Alice|Initialization: project setup");
        assert_eq!(
            commits,
            vec![Commit {
                id: "a1b2c3d".to_string(),
                author: "Alice".to_string(),
                subject: "Initialization: project setup".to_string(),
            }]
        );
    }

    #[test]
    fn keeps_delimiters_inside_subject() {
        let commits = parse_log("a1b2c3d|Alice|fix: handle a|b|c edge");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "fix: handle a|b|c edge");
    }

    #[test]
    fn drops_lines_with_too_few_fields() {
        let input = "onlytwo|fields\nsingle\n\ne4f5g6h|Bob|Fill: Commit model";
        let commits = parse_log(input);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, "e4f5g6h");
    }

    #[test]
    fn drops_lines_with_empty_id_or_author() {
        let input = "|Alice|subject\nabc1234||subject";
        assert!(parse_log(input).is_empty());
    }

    #[test]
    fn allows_empty_subject() {
        let commits = parse_log("a1b2c3d|Alice|");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "");
    }

    #[test]
    fn empty_input_yields_no_commits() {
        assert!(parse_log("").is_empty());
    }
}
