use crate::error::PromptError;

/// One line of `git status --porcelain=2 --branch --show-stash`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Record<'a> {
    /// `# <key> <values...>`
    Header { key: &'a str, values: Vec<&'a str> },
    /// `1 XY ...` or `2 XY ...`, carrying the two-character `XY` code.
    Changed { code: &'a str },
    Untracked,
    /// Blank lines, unmerged (`u`), ignored (`!`), unknown headers and other records.
    Other,
}

const HEADER_FIELDS: usize = 3;
const AB_HEADER_FIELDS: usize = 4;
const ORDINARY_FIELDS: usize = 9;
const RENAMED_FIELDS: usize = 10;
const UNTRACKED_FIELDS: usize = 2;

impl<'a> Record<'a> {
    /// Decode `line`, the `line_no`-th (1-based) line of the report.
    pub(crate) fn decode(line_no: usize, line: &'a str) -> Result<Self, PromptError> {
        let fields: Vec<&str> = line.split(' ').collect();
        match fields[0] {
            "#" => {
                let expected = match fields.get(1) {
                    Some(&"branch.ab") => AB_HEADER_FIELDS,
                    Some(&("branch.oid" | "branch.head" | "branch.upstream" | "stash")) => {
                        HEADER_FIELDS
                    }
                    _ => return Ok(Self::Other),
                };
                require(line_no, "header", &fields, expected)?;
                Ok(Self::Header {
                    key: fields[1],
                    values: fields[2..].to_vec(),
                })
            }
            "1" => Self::changed(line_no, "changed", &fields, ORDINARY_FIELDS),
            "2" => Self::changed(line_no, "renamed", &fields, RENAMED_FIELDS),
            "?" => {
                require(line_no, "untracked", &fields, UNTRACKED_FIELDS)?;
                Ok(Self::Untracked)
            }
            _ => Ok(Self::Other),
        }
    }

    fn changed(
        line_no: usize,
        kind: &'static str,
        fields: &[&'a str],
        expected: usize,
    ) -> Result<Self, PromptError> {
        require(line_no, kind, fields, expected)?;
        let code = fields[1];
        if code.len() != 2 || !code.is_ascii() {
            return Err(PromptError::InvalidStatusCode {
                line: line_no,
                code: code.to_string(),
            });
        }
        Ok(Self::Changed { code })
    }
}

fn require(
    line_no: usize,
    kind: &'static str,
    fields: &[&str],
    expected: usize,
) -> Result<(), PromptError> {
    if fields.len() < expected {
        return Err(PromptError::MalformedRecord {
            line: line_no,
            kind,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_headers() {
        assert_eq!(
            Record::decode(1, "# branch.ab +2 -1").expect("decode"),
            Record::Header {
                key: "branch.ab",
                values: vec!["+2", "-1"],
            }
        );
        assert_eq!(
            Record::decode(1, "# stash 3").expect("decode"),
            Record::Header {
                key: "stash",
                values: vec!["3"],
            }
        );
    }

    #[test]
    fn decodes_entries() {
        assert_eq!(
            Record::decode(1, "1 .M N... 100644 100644 100644 abc abc file.txt").expect("decode"),
            Record::Changed { code: ".M" }
        );
        assert_eq!(
            Record::decode(
                1,
                "2 R. N... 100644 100644 100644 abc abc R100 new.txt\told.txt"
            )
            .expect("decode"),
            Record::Changed { code: "R." }
        );
        assert_eq!(
            Record::decode(1, "? newfile.txt").expect("decode"),
            Record::Untracked
        );
    }

    #[test]
    fn file_names_with_spaces_are_fine() {
        assert_eq!(
            Record::decode(1, "1 A. N... 000000 100644 100644 000 abc my file.txt").expect("decode"),
            Record::Changed { code: "A." }
        );
    }

    #[test]
    fn unread_headers_need_no_value() {
        assert_eq!(Record::decode(1, "#").expect("decode"), Record::Other);
        assert_eq!(Record::decode(1, "# branch.future").expect("decode"), Record::Other);
        assert_eq!(Record::decode(1, "# branch.future a b").expect("decode"), Record::Other);
    }

    #[test]
    fn ignores_other_records() {
        assert_eq!(Record::decode(1, "").expect("decode"), Record::Other);
        assert_eq!(
            Record::decode(1, "u UU N... 100644 100644 100644 100644 a b c f.txt").expect("decode"),
            Record::Other
        );
        assert_eq!(Record::decode(1, "! target").expect("decode"), Record::Other);
    }

    #[test]
    fn short_records_are_malformed() {
        let err = Record::decode(4, "# branch.ab +2").unwrap_err();
        match err {
            PromptError::MalformedRecord {
                line,
                kind,
                expected,
                found,
            } => {
                assert_eq!((line, kind, expected, found), (4, "header", 4, 3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            Record::decode(1, "# branch.head").unwrap_err(),
            PromptError::MalformedRecord { .. }
        ));
        assert!(matches!(
            Record::decode(3, "2 R. N... 100644 100644 100644 abc abc R100").unwrap_err(),
            PromptError::MalformedRecord {
                line: 3,
                kind: "renamed",
                expected: 10,
                found: 9,
            }
        ));
        assert!(matches!(
            Record::decode(1, "1 .M").unwrap_err(),
            PromptError::MalformedRecord { kind: "changed", .. }
        ));
        assert!(matches!(
            Record::decode(1, "?").unwrap_err(),
            PromptError::MalformedRecord { kind: "untracked", .. }
        ));
    }

    #[test]
    fn bad_status_code_is_rejected() {
        let err = Record::decode(2, "1 M N... 100644 100644 100644 abc abc file.txt").unwrap_err();
        assert!(matches!(err, PromptError::InvalidStatusCode { line: 2, .. }));
    }
}
