//! Query Parser Tests
//!
//! Validates operator extraction, filter clause construction and query
//! cleanup for the search input parser.

#[cfg(test)]
mod tests {
    use crate::query::parser::parse_search_input;

    // ============================================================
    // NO OPERATORS
    // ============================================================

    #[test]
    fn test_empty_input() {
        let parsed = parse_search_input("");

        assert_eq!(parsed.query, "");
        assert!(parsed.filters.is_empty());
    }

    #[test]
    fn test_plain_query_passes_through() {
        let parsed = parse_search_input("monthly maintenance fee");

        assert_eq!(parsed.query, "monthly maintenance fee");
        assert!(parsed.filters.is_empty());
    }

    #[test]
    fn test_plain_query_is_trimmed_but_not_collapsed() {
        // Without operators only leading/trailing whitespace is removed.
        let parsed = parse_search_input("  wire  transfer  ");

        assert_eq!(parsed.query, "wire  transfer");
        assert!(parsed.filters.is_empty());
    }

    #[test]
    fn test_colon_without_recognised_key_is_not_an_operator() {
        let parsed = parse_search_input("ratio 1:100");

        assert_eq!(parsed.query, "ratio 1:100");
        assert!(parsed.filters.is_empty());
    }

    // ============================================================
    // BANK OPERATOR
    // ============================================================

    #[test]
    fn test_single_bank_operator() {
        let parsed = parse_search_input("bank:alpha transfer fee");

        assert_eq!(parsed.query, "transfer fee");
        assert_eq!(parsed.filters, vec!["bank = \"alpha\"".to_string()]);
    }

    #[test]
    fn test_multiple_bank_values_or_combined() {
        let parsed = parse_search_input("bank:alpha bank:eurobank fee");

        assert_eq!(parsed.query, "fee");
        assert_eq!(
            parsed.filters,
            vec!["bank = \"alpha\" OR bank = \"eurobank\"".to_string()]
        );
    }

    #[test]
    fn test_bank_operator_key_is_case_insensitive() {
        let parsed = parse_search_input("BANK:nbg atm");

        assert_eq!(parsed.query, "atm");
        assert_eq!(parsed.filters, vec!["bank = \"nbg\"".to_string()]);
    }

    #[test]
    fn test_bank_operator_only_no_free_text() {
        let parsed = parse_search_input("bank:piraeus");

        assert_eq!(parsed.query, "");
        assert_eq!(parsed.filters, vec!["bank = \"piraeus\"".to_string()]);
    }

    // ============================================================
    // CATEGORY OPERATOR / QUOTED VALUES
    // ============================================================

    #[test]
    fn test_quoted_value_with_spaces() {
        let parsed = parse_search_input("category:\"Price List\" commission");

        assert_eq!(parsed.query, "commission");
        assert_eq!(parsed.filters, vec!["category = \"Price List\"".to_string()]);
    }

    #[test]
    fn test_unterminated_quote_is_kept_verbatim() {
        // Malformed quoting gets no special handling; the token is taken
        // as-is including the stray quote.
        let parsed = parse_search_input("category:\"Price fee");

        assert_eq!(parsed.query, "fee");
        assert_eq!(parsed.filters, vec!["category = \"\"Price\"".to_string()]);
    }

    #[test]
    fn test_bank_and_category_yield_separate_clauses() {
        let parsed = parse_search_input("bank:alpha category:PriceList overdraft");

        assert_eq!(parsed.query, "overdraft");
        assert_eq!(
            parsed.filters,
            vec![
                "bank = \"alpha\"".to_string(),
                "category = \"PriceList\"".to_string(),
            ]
        );
    }

    // ============================================================
    // QUERY CLEANUP
    // ============================================================

    #[test]
    fn test_operator_removal_collapses_whitespace() {
        let parsed = parse_search_input("fee bank:alpha schedule");

        assert_eq!(parsed.query, "fee schedule");
    }

    #[test]
    fn test_operator_in_the_middle_of_text() {
        let parsed = parse_search_input("card bank:eurobank issuance cost");

        assert_eq!(parsed.query, "card issuance cost");
        assert_eq!(parsed.filters, vec!["bank = \"eurobank\"".to_string()]);
    }

    #[test]
    fn test_greek_query_text_survives() {
        let parsed = parse_search_input("bank:alpha προμήθεια ανάληψης");

        assert_eq!(parsed.query, "προμήθεια ανάληψης");
        assert_eq!(parsed.filters, vec!["bank = \"alpha\"".to_string()]);
    }
}
