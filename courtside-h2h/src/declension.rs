use courtside::plural::Forms;

const MATCH: Forms<'static> = Forms::new("матч", "матча", "матчей");

/// Renders a match count with the noun in agreement, e.g. `"1 матч"`, `"3 матча"`, `"11 матчей"`.
pub fn format_match_count(n: u64) -> String {
    MATCH.count(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreement() {
        assert_eq!("0 матчей", format_match_count(0));
        assert_eq!("1 матч", format_match_count(1));
        assert_eq!("2 матча", format_match_count(2));
        assert_eq!("5 матчей", format_match_count(5));
        assert_eq!("11 матчей", format_match_count(11));
        assert_eq!("14 матчей", format_match_count(14));
        assert_eq!("21 матч", format_match_count(21));
        assert_eq!("23 матча", format_match_count(23));
        assert_eq!("111 матчей", format_match_count(111));
    }
}
