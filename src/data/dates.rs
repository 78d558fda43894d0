use chrono::{Datelike, NaiveDate};

//date patterns tried in priority order; the order is significant, an
//ambiguous string like "01/02/2020" must resolve as month/day/year
const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d", "%Y/%m/%d"];

//resolves an x-cell to a calendar year
//falls back to a bare 4-digit year, then to the first 4 characters of the
//trimmed cell parsed as an integer; returns None when nothing matches
pub fn resolve_year(x_cell: &str) -> Option<i32> {
    let trimmed = x_cell.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.year());
        }
    }

    if trimmed.len() == 4 {
        if let Ok(year) = trimmed.parse::<i32>() {
            return Some(year);
        }
    }

    trimmed.get(..4)?.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_slash_date_resolves_month_first() {
        //month/day/year is tried before day/month/year
        assert_eq!(resolve_year("01/02/2020"), Some(2020));
    }

    #[test]
    fn day_month_year_used_when_month_slot_is_invalid() {
        //month 25 is impossible, so the second pattern picks it up
        assert_eq!(resolve_year("25/12/2019"), Some(2019));
    }

    #[test]
    fn iso_dash_and_slash_dates_resolve() {
        assert_eq!(resolve_year("2020-05-01"), Some(2020));
        assert_eq!(resolve_year("2018/11/30"), Some(2018));
    }

    #[test]
    fn bare_year_resolves() {
        assert_eq!(resolve_year("1999"), Some(1999));
        assert_eq!(resolve_year("  2024  "), Some(2024));
    }

    #[test]
    fn prefix_year_is_the_last_resort() {
        assert_eq!(resolve_year("2021 (est)"), Some(2021));
    }

    #[test]
    fn unresolvable_cells_yield_none() {
        assert_eq!(resolve_year("march"), None);
        assert_eq!(resolve_year(""), None);
        assert_eq!(resolve_year("ab"), None);
    }
}
