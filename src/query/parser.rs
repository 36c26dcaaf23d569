use regex::Regex;

/// Result of parsing a raw search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSearch {
    /// Free-text query with all operator substrings removed.
    pub query: String,
    /// One AND-able MeiliSearch filter clause per operator that occurred.
    pub filters: Vec<String>,
}

/// A recognised search operator and the index field it filters on.
struct Operator {
    key: &'static str,
    field: &'static str,
}

/// Operator table. Keys are matched case-insensitively; values within one
/// operator are OR-combined into a single filter clause.
const OPERATORS: &[Operator] = &[
    Operator {
        key: "bank",
        field: "bank",
    },
    Operator {
        key: "category",
        field: "category",
    },
];

/// Parse a user-provided search string.
///
/// Each occurrence of `<key>:<value>` for a key in the operator table is
/// extracted, where `<value>` is either a double-quoted phrase or a single
/// whitespace-delimited token. Matched substrings are removed from the
/// returned query and the remaining whitespace is collapsed. Inputs without
/// any recognised operator come back trimmed but otherwise unchanged.
pub fn parse_search_input(input: &str) -> ParsedSearch {
    let mut query = input.to_string();
    let mut filters = Vec::new();

    for op in OPERATORS {
        let re = Regex::new(&format!(r#"(?i){}:("[^"]+"|\S+)"#, op.key)).unwrap();

        let values: Vec<String> = re
            .captures_iter(input)
            .map(|cap| strip_quotes(&cap[1]).to_string())
            .collect();
        if values.is_empty() {
            continue;
        }

        let clause = values
            .iter()
            .map(|value| format!("{} = \"{}\"", op.field, value))
            .collect::<Vec<_>>()
            .join(" OR ");
        filters.push(clause);

        query = re.replace_all(&query, "").into_owned();
        query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    ParsedSearch {
        query: query.trim().to_string(),
        filters,
    }
}

/// Strip surrounding double quotes from a well-formed `"..."` value.
/// Stray or unbalanced quotes are left as-is.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
