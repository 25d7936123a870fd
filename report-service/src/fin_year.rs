use time::{Date, Duration, Month};

/// Monday at or before the given date. Identity for Mondays.
pub fn monday_on_or_before(d: Date) -> Date {
    d - Duration::days(i64::from(d.weekday().number_days_from_monday()))
}

/// Starting calendar year of the April-start financial year containing `d`.
/// January to March belong to the financial year that started the previous
/// April.
pub fn fin_year_for_date(d: Date) -> i32 {
    if u8::from(d.month()) >= 4 {
        d.year()
    } else {
        d.year() - 1
    }
}

/// Financial year label of the form `2022-23`.
pub fn fin_year_label(fin_year: i32) -> String {
    format!("{}-{:02}", fin_year, (fin_year + 1) % 100)
}

/// 1-based week number within the financial year. Week 1 begins on the first
/// Monday on or after 1 April; each later Monday starts the next week. Dates
/// from 1 April up to that first Monday have no full reporting week of their
/// own and share week 1.
pub fn week_num_of_fin_year(d: Date) -> u32 {
    let fin_year = fin_year_for_date(d);
    let fy_start = Date::from_calendar_date(fin_year, Month::April, 1)
        .expect("1 April exists in every financial year");
    let monday_before_start = monday_on_or_before(fy_start);
    let first_monday = if monday_before_start == fy_start {
        fy_start
    } else {
        monday_before_start + Duration::weeks(1)
    };

    let week_monday = monday_on_or_before(d);
    if week_monday < first_monday {
        return 1;
    }
    ((week_monday - first_monday).whole_weeks() + 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    #[test]
    fn monday_on_or_before_lands_on_a_monday_within_six_days() {
        // One full week: Monday 2023-01-02 through Sunday 2023-01-08.
        for offset in 0..7 {
            let d = date!(2023 - 01 - 02) + Duration::days(offset);
            let monday = monday_on_or_before(d);
            assert_eq!(monday.weekday(), Weekday::Monday);
            assert!((d - monday).whole_days() <= 6);
            assert!(monday <= d);
        }
    }

    #[test]
    fn monday_is_its_own_week_start() {
        assert_eq!(monday_on_or_before(date!(2023 - 01 - 02)), date!(2023 - 01 - 02));
    }

    #[test]
    fn fin_year_is_consecutive_across_the_april_boundary() {
        assert_eq!(fin_year_for_date(date!(2023 - 03 - 31)), 2022);
        assert_eq!(fin_year_for_date(date!(2023 - 04 - 01)), 2023);
    }

    #[test]
    fn fin_year_label_keeps_two_digit_suffix() {
        assert_eq!(fin_year_label(2022), "2022-23");
        assert_eq!(fin_year_label(1999), "1999-00");
    }

    #[test]
    fn week_one_starts_at_the_first_monday_of_the_financial_year() {
        // 1 April 2022 was a Friday; the first Monday of FY 2022 is 4 April.
        assert_eq!(week_num_of_fin_year(date!(2022 - 04 - 04)), 1);
        assert_eq!(week_num_of_fin_year(date!(2022 - 04 - 11)), 2);
    }

    #[test]
    fn week_one_is_first_of_april_when_it_is_a_monday() {
        // 1 April 2024 was a Monday.
        assert_eq!(week_num_of_fin_year(date!(2024 - 04 - 01)), 1);
        assert_eq!(week_num_of_fin_year(date!(2024 - 04 - 08)), 2);
    }

    #[test]
    fn april_days_before_the_first_monday_share_week_one() {
        assert_eq!(week_num_of_fin_year(date!(2022 - 04 - 01)), 1);
        assert_eq!(week_num_of_fin_year(date!(2022 - 04 - 03)), 1);
    }

    #[test]
    fn weeks_increase_by_one_per_monday_through_the_year() {
        assert_eq!(week_num_of_fin_year(date!(2023 - 01 - 02)), 40);
        // Any day of that week maps to the same number.
        assert_eq!(week_num_of_fin_year(date!(2023 - 01 - 08)), 40);
        // Last week of FY 2022.
        assert_eq!(week_num_of_fin_year(date!(2023 - 03 - 31)), 52);
    }
}
